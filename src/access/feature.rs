use crate::models::Level;
use serde::Serialize;

/// Gated sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Profitability,
    BreakevenRoas,
    Smartship,
    History,
    Insights,
    LabelSku,
    MultiStore,
    Admin,
}

/// What a feature asks of the caller. `Paid` is the `-1` marker used in
/// gating configuration ("requires a paid plan, not a level"); `Admin` is an
/// exact sentinel match, never an ordering check, so a future sentinel value
/// cannot silently inherit admin rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    MinLevel(Level),
    Paid,
    Admin,
}

impl Requirement {
    pub fn from_raw(raw: i32) -> Result<Requirement, String> {
        match raw {
            -1 => Ok(Requirement::Paid),
            999 => Ok(Requirement::Admin),
            other => Level::try_from(other).map(Requirement::MinLevel),
        }
    }

    pub fn as_raw(&self) -> i32 {
        match self {
            Requirement::MinLevel(level) => i32::from(*level),
            Requirement::Paid => -1,
            Requirement::Admin => 999,
        }
    }
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::Profitability,
        Feature::BreakevenRoas,
        Feature::Smartship,
        Feature::History,
        Feature::Insights,
        Feature::LabelSku,
        Feature::MultiStore,
        Feature::Admin,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Feature::Profitability => "rentabilidad",
            Feature::BreakevenRoas => "breakeven-roas",
            Feature::Smartship => "smartship",
            Feature::History => "historial",
            Feature::Insights => "informacion",
            Feature::LabelSku => "pdf-generator",
            Feature::MultiStore => "tiendas",
            Feature::Admin => "admin",
        }
    }

    pub fn section_name(&self) -> &'static str {
        match self {
            Feature::Profitability => "Calculadora de Rentabilidad",
            Feature::BreakevenRoas => "Calcula tu Breakeven y ROAS",
            Feature::Smartship => "SmartShip - Transformador de Pedidos",
            Feature::History => "Historial de Archivos",
            Feature::Insights => "Información y Estadísticas",
            Feature::LabelSku => "Integrar SKU en Rótulos",
            Feature::MultiStore => "Gestión de Tiendas",
            Feature::Admin => "Panel de Administración",
        }
    }

    pub fn requirement(&self) -> Requirement {
        match self {
            Feature::Profitability => Requirement::MinLevel(Level::Guest),
            Feature::BreakevenRoas => Requirement::MinLevel(Level::Starter),
            Feature::Smartship => Requirement::MinLevel(Level::Basic),
            Feature::History => Requirement::MinLevel(Level::Basic),
            Feature::Insights => Requirement::MinLevel(Level::Basic),
            Feature::LabelSku => Requirement::MinLevel(Level::Pro),
            Feature::MultiStore => Requirement::MinLevel(Level::Enterprise),
            Feature::Admin => Requirement::Admin,
        }
    }
}
