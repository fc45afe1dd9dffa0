//! Front matter schema checks.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::config::LimitsConfig;
use crate::core::{CheckRecord, FieldText, Frontmatter, RecordLog, Section, Status, parse_frontmatter};

static SKILL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"));

/// Lowercase kebab-case: letter/digit groups joined by single hyphens.
#[must_use]
pub fn is_kebab_case(name: &str) -> bool {
    SKILL_NAME.is_match(name)
}

/// Parse the front matter and run the field checks on it.
pub fn check(content: &str, limits: &LimitsConfig, log: &mut RecordLog) {
    let fm = match parse_frontmatter(content) {
        Ok(fm) => fm,
        Err(err) => {
            log.fail(Section::Frontmatter, "Valid frontmatter", err);
            return;
        }
    };
    log.pass(Section::Frontmatter, "Valid frontmatter", "");

    log.push(unexpected_keys_record(&fm));
    log.push(name_record(&fm.text("name"), limits));
    log.push(description_record(&fm.text("description"), limits));
}

#[must_use]
pub fn unexpected_keys_record(fm: &Frontmatter) -> CheckRecord {
    let extra = fm.unexpected_keys();
    if extra.is_empty() {
        CheckRecord::new(Section::Frontmatter, "No unexpected keys", Status::Pass, "")
    } else {
        CheckRecord::new(
            Section::Frontmatter,
            "No unexpected keys",
            Status::Warn,
            format!("Unexpected: {}", extra.iter().join(", ")),
        )
    }
}

#[must_use]
pub fn name_record(name: &FieldText, limits: &LimitsConfig) -> CheckRecord {
    let name = match name {
        FieldText::Missing => {
            return CheckRecord::new(
                Section::Frontmatter,
                "Name present",
                Status::Fail,
                "Missing 'name' field",
            );
        }
        FieldText::Unexpected(kind) => {
            return CheckRecord::new(
                Section::Frontmatter,
                "Name format",
                Status::Fail,
                format!("expected a string, found a {kind}"),
            );
        }
        FieldText::Text(name) => name,
    };

    if !is_kebab_case(name) {
        return CheckRecord::new(
            Section::Frontmatter,
            "Name format",
            Status::Fail,
            format!("'{name}' is not valid kebab-case"),
        );
    }

    let len = name.chars().count();
    if len > limits.max_name_chars {
        return CheckRecord::new(
            Section::Frontmatter,
            "Name length",
            Status::Fail,
            format!("{len} chars (max {})", limits.max_name_chars),
        );
    }

    CheckRecord::new(Section::Frontmatter, "Name valid", Status::Pass, name.clone())
}

#[must_use]
pub fn description_record(description: &FieldText, limits: &LimitsConfig) -> CheckRecord {
    let description = match description {
        FieldText::Missing => {
            return CheckRecord::new(
                Section::Frontmatter,
                "Description present",
                Status::Fail,
                "Missing 'description' field",
            );
        }
        FieldText::Unexpected(kind) => {
            return CheckRecord::new(
                Section::Frontmatter,
                "Description format",
                Status::Fail,
                format!("expected a string, found a {kind}"),
            );
        }
        FieldText::Text(description) => description,
    };

    let len = description.chars().count();
    let (status, detail) = if len < limits.min_description_chars {
        (
            Status::Warn,
            format!("{len} chars (recommend >= {})", limits.min_description_chars),
        )
    } else if len > limits.max_description_chars {
        (
            Status::Fail,
            format!("{len} chars (max {})", limits.max_description_chars),
        )
    } else {
        (Status::Pass, format!("{len} chars"))
    };
    CheckRecord::new(Section::Frontmatter, "Description length", status, detail)
}
