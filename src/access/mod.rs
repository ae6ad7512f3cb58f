mod feature;
mod gate;
mod lifecycle;
pub mod paid;
pub mod trial;

pub use feature::*;
pub use gate::*;
pub use lifecycle::*;
pub use paid::is_paid_user;
pub use trial::{trial_info, TrialInfo};
