//! Report rendering.
//!
//! Pure formatting over an ordered record list. Sections are grouped by
//! first appearance; records keep their emission order inside a section.
//!
//! ```text
//! === Skill Analysis: my-skill ===
//!
//! STRUCTURE
//!   SKILL.md exists: PASS
//!
//! FRONTMATTER
//!   Valid frontmatter: PASS
//!   Name valid: PASS: my-skill
//!
//! SUMMARY: 0 FAIL, 0 WARN, 3 PASS
//! ```

use std::collections::HashMap;

use console::style;
use serde::Serialize;

use crate::core::{CheckRecord, Section, Status};
use crate::quality::Analysis;

/// Count of records per status. INFO is tracked but not part of the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub fail: usize,
    pub warn: usize,
    pub pass: usize,
    pub info: usize,
}

impl Tally {
    #[must_use]
    pub fn from_records(records: &[CheckRecord]) -> Self {
        let mut tally = Self::default();
        for record in records {
            match record.status {
                Status::Fail => tally.fail += 1,
                Status::Warn => tally.warn += 1,
                Status::Pass => tally.pass += 1,
                Status::Info => tally.info += 1,
            }
        }
        tally
    }

    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "SUMMARY: {} FAIL, {} WARN, {} PASS",
            self.fail, self.warn, self.pass
        )
    }
}

/// Records of one section, in emission order.
#[derive(Debug, Clone)]
pub struct SectionGroup<'a> {
    pub section: Section,
    pub records: Vec<&'a CheckRecord>,
}

/// Group records by section in order of first appearance.
#[must_use]
pub fn group_by_section(records: &[CheckRecord]) -> Vec<SectionGroup<'_>> {
    let mut groups: Vec<SectionGroup<'_>> = Vec::new();
    let mut index: HashMap<Section, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.section).or_insert_with(|| {
            groups.push(SectionGroup {
                section: record.section,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }
    groups
}

/// Render the text report. `color` styles the status tokens.
#[must_use]
pub fn render_text(package: &str, records: &[CheckRecord], color: bool) -> String {
    let mut lines = vec![format!("=== Skill Analysis: {package} ==="), String::new()];

    for (i, group) in group_by_section(records).iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(group.section.to_string());
        for record in &group.records {
            let status = status_token(record.status, color);
            if record.detail.is_empty() {
                lines.push(format!("  {}: {status}", record.check));
            } else {
                lines.push(format!("  {}: {status}: {}", record.check, record.detail));
            }
        }
    }

    lines.push(String::new());
    lines.push(Tally::from_records(records).summary_line());
    lines.join("\n")
}

fn status_token(status: Status, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    let styled = match status {
        Status::Pass => style(status.as_str()).green(),
        Status::Warn => style(status.as_str()).yellow(),
        Status::Fail => style(status.as_str()).red().bold(),
        Status::Info => style(status.as_str()).dim(),
    };
    styled.force_styling(true).to_string()
}

/// JSON payload for an analysis.
#[derive(Debug, Serialize)]
pub struct ReportData<'a> {
    pub package: &'a str,
    pub path: String,
    pub records: &'a [CheckRecord],
    pub summary: Tally,
}

impl<'a> From<&'a Analysis> for ReportData<'a> {
    fn from(analysis: &'a Analysis) -> Self {
        Self {
            package: &analysis.package,
            path: analysis.path.display().to_string(),
            records: &analysis.records,
            summary: Tally::from_records(&analysis.records),
        }
    }
}
