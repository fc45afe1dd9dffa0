pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod quality;
pub mod report;
pub mod utils;

pub use error::{Result, SkillcheckError};
pub use quality::{Analysis, SkillAnalyzer};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
