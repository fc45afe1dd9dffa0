//! Check records and the ordered accumulator that collects them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Warn,
    Fail,
    Info,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report section a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Section {
    Structure,
    Frontmatter,
    Size,
    Files,
    References,
    Scripts,
}

impl Section {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Structure => "STRUCTURE",
            Self::Frontmatter => "FRONTMATTER",
            Self::Size => "SIZE",
            Self::Files => "FILES",
            Self::References => "REFERENCES",
            Self::Scripts => "SCRIPTS",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported outcome. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub section: Section,
    pub check: String,
    pub status: Status,
    /// Free-form detail; empty when the check has nothing to add.
    pub detail: String,
}

impl CheckRecord {
    #[must_use]
    pub fn new(
        section: Section,
        check: impl Into<String>,
        status: Status,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            section,
            check: check.into(),
            status,
            detail: detail.into(),
        }
    }
}

/// Append-only, emission-ordered log of check records.
#[derive(Debug, Default)]
pub struct RecordLog {
    records: Vec<CheckRecord>,
}

impl RecordLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        section: Section,
        check: impl Into<String>,
        status: Status,
        detail: impl Into<String>,
    ) {
        self.push(CheckRecord::new(section, check, status, detail));
    }

    pub fn push(&mut self, record: CheckRecord) {
        trace!(
            section = %record.section,
            check = %record.check,
            status = %record.status,
            "check recorded"
        );
        self.records.push(record);
    }

    pub fn pass(&mut self, section: Section, check: impl Into<String>, detail: impl Into<String>) {
        self.record(section, check, Status::Pass, detail);
    }

    pub fn warn(&mut self, section: Section, check: impl Into<String>, detail: impl Into<String>) {
        self.record(section, check, Status::Warn, detail);
    }

    pub fn fail(&mut self, section: Section, check: impl Into<String>, detail: impl Into<String>) {
        self.record(section, check, Status::Fail, detail);
    }

    pub fn info(&mut self, section: Section, check: impl Into<String>, detail: impl Into<String>) {
        self.record(section, check, Status::Info, detail);
    }

    #[must_use]
    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<CheckRecord> {
        self.records
    }
}
