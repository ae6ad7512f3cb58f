use serde::{Deserialize, Serialize};
use std::fmt;

/// Entitlement tier. The set is closed: any other integer is rejected at the
/// boundary. `Root` (999) is a sentinel, not a fifth paid tier: it passes
/// every numeric gate and is the exact-match requirement for the admin
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Level {
    Guest,
    Starter,
    Basic,
    Pro,
    Enterprise,
    Root,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Guest,
        Level::Starter,
        Level::Basic,
        Level::Pro,
        Level::Enterprise,
        Level::Root,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Level::Guest => "Invitado",
            Level::Starter => "Starter",
            Level::Basic => "Basic",
            Level::Pro => "Pro",
            Level::Enterprise => "Empresa",
            Level::Root => "Dios",
        }
    }

    /// Badge color used by the dashboard.
    pub fn color(&self) -> &'static str {
        match self {
            Level::Guest => "gray",
            Level::Starter => "green",
            Level::Basic => "blue",
            Level::Pro => "purple",
            Level::Enterprise => "orange",
            Level::Root => "red",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Guest
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> i32 {
        match level {
            Level::Guest => 0,
            Level::Starter => 1,
            Level::Basic => 2,
            Level::Pro => 3,
            Level::Enterprise => 4,
            Level::Root => 999,
        }
    }
}

impl TryFrom<i32> for Level {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Guest),
            1 => Ok(Level::Starter),
            2 => Ok(Level::Basic),
            3 => Ok(Level::Pro),
            4 => Ok(Level::Enterprise),
            999 => Ok(Level::Root),
            other => Err(format!("{} is not a valid user level", other)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_integers_outside_the_closed_set() {
        for raw in [-1, 5, 100, 998, 1000] {
            assert!(Level::try_from(raw).is_err(), "{} must be rejected", raw);
        }
    }

    #[test]
    fn root_orders_above_every_tier() {
        for level in Level::ALL {
            assert!(Level::Root >= level);
        }
    }
}
