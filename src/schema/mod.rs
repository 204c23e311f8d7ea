//! Schema module - Configuration, seeding and template types for runs.

mod config;
mod seed;
mod template;

pub use config::*;
pub use seed::*;
pub use template::*;
