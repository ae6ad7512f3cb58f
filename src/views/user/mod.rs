mod admin;
mod owner;

pub use admin::*;
pub use owner::*;
