pub mod ads;
pub mod age;
pub mod analytics;
pub mod config;
pub mod error;
pub mod love;
pub mod share;
pub mod svg;
pub mod titles;

pub use age::{AgeResult, compute_age, parse_date};
pub use config::AppConfig;
pub use error::InvalidInput;
pub use love::{CompatibilityResult, Tier, compute_compatibility, compute_compatibility_with};
