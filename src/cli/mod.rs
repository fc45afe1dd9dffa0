//! CLI module - Command-line interface definition and handler
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

pub use output::{ColorMode, OutputFormat};

pub mod output;

use crate::config::Config;
use crate::error::Result;
use crate::quality::SkillAnalyzer;

/// Mechanical structural checks for a SKILL.md skill package
#[derive(Parser, Debug)]
#[command(name = "skillcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skill package directory (the folder containing SKILL.md)
    #[arg(value_name = "SKILL_DIR")]
    pub path: PathBuf,

    /// Output format (human, plain, json)
    #[arg(long, short = 'O', value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Color mode: auto, always, never
    #[arg(long, value_name = "WHEN", value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/skillcheck/config.toml, then .skillcheck.toml in the package)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Whether status tokens should be colored.
    #[must_use]
    pub fn use_color(&self) -> bool {
        self.output_format.use_colors() && self.color.enabled()
    }
}

/// Analyze the package named on the command line and print the report.
pub fn run(cli: &Cli) -> Result<()> {
    let package = crate::core::SkillPackage::open(&cli.path)?;
    let config = Config::load(cli.config.as_deref(), package.root())?;
    debug!(format = ?cli.output_format, "running analysis");

    let analysis = SkillAnalyzer::new(config).analyze(&package)?;
    output::emit_analysis(&analysis, cli.output_format, cli.use_color())
}
