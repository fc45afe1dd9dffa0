//! Internal link integrity and `references/` linkage.

use std::collections::HashSet;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::core::{MarkdownLink, RecordLog, Section, SkillPackage};
use crate::utils::fs::list_visible_files;

pub const REFERENCES_DIR: &str = "references";

/// One combined verdict over every package-relative link.
pub fn check_link_integrity(package: &SkillPackage, links: &[MarkdownLink], log: &mut RecordLog) {
    if links.is_empty() {
        log.info(Section::References, "Link integrity", "No internal links found");
        return;
    }

    let broken: Vec<&str> = links
        .iter()
        .filter(|link| !package.resolve(&link.href).exists())
        .map(|link| link.href.as_str())
        .collect();
    debug!(total = links.len(), broken = broken.len(), "checked internal links");

    if broken.is_empty() {
        log.pass(
            Section::References,
            "Link integrity",
            format!("{}/{} links valid", links.len(), links.len()),
        );
    } else {
        log.fail(
            Section::References,
            "Link integrity",
            format!("Broken: {}", broken.iter().join(", ")),
        );
    }
}

/// Flag files in `references/` that no internal link points at.
///
/// A directory that cannot be listed becomes a WARN record.
pub fn check_reference_files(package: &SkillPackage, links: &[MarkdownLink], log: &mut RecordLog) {
    let dir = package.root().join(REFERENCES_DIR);
    if !dir.is_dir() {
        log.info(Section::References, "References directory", "No references/ directory");
        return;
    }

    let files = match list_visible_files(&dir) {
        Ok(files) => files,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "cannot list references");
            log.warn(
                Section::References,
                "References directory",
                format!("Cannot read {REFERENCES_DIR}/: {err}"),
            );
            return;
        }
    };

    let unlinked = unlinked_references(&files, links);
    if unlinked.is_empty() {
        log.pass(Section::References, "All references linked", "");
    } else {
        log.warn(Section::References, "Unlinked reference files", unlinked.iter().join(", "));
    }
}

/// Reference files matched neither by base name nor by exact href.
#[must_use]
pub fn unlinked_references<'a>(files: &'a [String], links: &[MarkdownLink]) -> Vec<&'a str> {
    let prefix = format!("{REFERENCES_DIR}/");
    let linked_names: HashSet<&str> = links
        .iter()
        .filter(|link| link.href.starts_with(&prefix))
        .map(MarkdownLink::file_name)
        .collect();
    let hrefs: HashSet<&str> = links.iter().map(|link| link.href.as_str()).collect();

    files
        .iter()
        .filter(|name| {
            !linked_names.contains(name.as_str()) && !hrefs.contains(format!("{prefix}{name}").as_str())
        })
        .map(String::as_str)
        .collect()
}
