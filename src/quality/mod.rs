//! Structural checks over a skill package.
//!
//! [`SkillAnalyzer::analyze`] runs every check in a fixed order and returns
//! the accumulated records. Only a missing `SKILL.md` stops the run early;
//! every other problem becomes a record and the remaining checks still run.

pub mod files;
pub mod frontmatter;
pub mod references;
pub mod scripts;
pub mod size;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::core::frontmatter::document_body;
use crate::core::links::internal_links;
use crate::core::{CheckRecord, PRIMARY_DOCUMENT, RecordLog, Section, SkillPackage};
use crate::error::Result;

/// Records produced for one package.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub package: String,
    pub path: PathBuf,
    pub records: Vec<CheckRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct SkillAnalyzer {
    config: Config,
}

impl SkillAnalyzer {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open the directory at `path` and analyze it.
    ///
    /// # Errors
    ///
    /// Fails when `path` is not a directory or `SKILL.md` is unreadable.
    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<Analysis> {
        let package = SkillPackage::open(path)?;
        self.analyze(&package)
    }

    /// Run every check against `package`.
    ///
    /// # Errors
    ///
    /// Fails only on I/O errors reading the package; findings are records.
    pub fn analyze(&self, package: &SkillPackage) -> Result<Analysis> {
        let mut log = RecordLog::new();
        let exists_check = format!("{PRIMARY_DOCUMENT} exists");

        let Some(content) = package.read_document()? else {
            log.fail(
                Section::Structure,
                exists_check,
                format!("{PRIMARY_DOCUMENT} not found"),
            );
            return Ok(finish(package, log));
        };
        log.pass(Section::Structure, exists_check, "");

        let limits = &self.config.limits;
        frontmatter::check(&content, limits, &mut log);
        size::check(&content, limits, &mut log);

        files::check(&package.inventory(), &self.config.files, &mut log);

        let links = internal_links(document_body(&content));
        debug!(count = links.len(), "extracted internal links");
        references::check_link_integrity(package, &links, &mut log);
        references::check_reference_files(package, &links, &mut log);

        scripts::check(package, &mut log);

        Ok(finish(package, log))
    }
}

fn finish(package: &SkillPackage, log: RecordLog) -> Analysis {
    debug!(package = %package.name(), records = log.len(), "analysis complete");
    Analysis {
        package: package.name().to_string(),
        path: package.root().to_path_buf(),
        records: log.into_records(),
    }
}
