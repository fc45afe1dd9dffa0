//! SKILL.md front matter extraction.
//!
//! Front matter is the YAML block between the opening `---` line and the
//! next `---` line. Attribution headers (lines starting with `#`) may come
//! before it and are skipped. Every failure mode is returned as a message
//! string so callers can report it instead of aborting.

use std::num::FpCategory;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

/// Keys a SKILL.md front matter block may carry.
pub const ALLOWED_KEYS: [&str; 6] = [
    "name",
    "description",
    "license",
    "allowed-tools",
    "metadata",
    "compatibility",
];

static FRONTMATTER_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---").expect("valid regex"));

static BODY_AFTER_FRONTMATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n.*?\n---\n?(.*)").expect("valid regex"));

/// Parsed front matter mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: Mapping,
}

/// A front matter value read as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldText {
    /// Key absent, or present with a blank value (null, "", false, 0, [] or {}).
    Missing,
    /// Scalar text. `true` reads as `True`, which is never a valid name.
    Text(String),
    /// A non-empty sequence or mapping where a scalar was expected.
    Unexpected(&'static str),
}

impl Frontmatter {
    #[must_use]
    pub const fn from_mapping(fields: Mapping) -> Self {
        Self { fields }
    }

    /// All keys, rendered as text, in document order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.fields.keys().map(render_key).collect()
    }

    /// Keys outside [`ALLOWED_KEYS`], sorted.
    #[must_use]
    pub fn unexpected_keys(&self) -> Vec<String> {
        let mut extra: Vec<String> = self
            .keys()
            .into_iter()
            .filter(|key| !ALLOWED_KEYS.contains(&key.as_str()))
            .collect();
        extra.sort();
        extra.dedup();
        extra
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Read `key` as text.
    #[must_use]
    pub fn text(&self, key: &str) -> FieldText {
        self.get(key).map_or(FieldText::Missing, value_text)
    }
}

fn value_text(value: &Value) -> FieldText {
    match value {
        Value::Null | Value::Bool(false) => FieldText::Missing,
        Value::Bool(true) => FieldText::Text("True".to_string()),
        Value::String(s) if s.is_empty() => FieldText::Missing,
        Value::String(s) => FieldText::Text(s.clone()),
        Value::Number(n) if n.as_f64().map(f64::classify) == Some(FpCategory::Zero) => {
            FieldText::Missing
        }
        Value::Number(n) => FieldText::Text(n.to_string()),
        Value::Sequence(seq) if seq.is_empty() => FieldText::Missing,
        Value::Sequence(_) => FieldText::Unexpected("sequence"),
        Value::Mapping(map) if map.is_empty() => FieldText::Missing,
        Value::Mapping(_) => FieldText::Unexpected("mapping"),
        Value::Tagged(tagged) => value_text(&tagged.value),
    }
}

fn render_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

/// Drop leading `#` lines. A trailing `#` line without a newline is kept.
#[must_use]
pub fn strip_comment_lines(content: &str) -> &str {
    let mut rest = content;
    while rest.starts_with('#') {
        match rest.find('\n') {
            Some(idx) => rest = &rest[idx + 1..],
            None => break,
        }
    }
    rest
}

/// Parse the front matter block of a SKILL.md document.
///
/// # Errors
///
/// Returns a human-readable message when the block is absent, malformed,
/// not valid YAML, or not a mapping.
pub fn parse_frontmatter(content: &str) -> Result<Frontmatter, String> {
    let stripped = strip_comment_lines(content);
    if !stripped.starts_with("---") {
        return Err("No YAML frontmatter found".to_string());
    }

    let block = FRONTMATTER_BLOCK
        .captures(stripped)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| "Invalid frontmatter format".to_string())?;

    if block.trim().is_empty() {
        return Err("Frontmatter must be a YAML dictionary".to_string());
    }

    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(fields)) => Ok(Frontmatter::from_mapping(fields)),
        Ok(_) => Err("Frontmatter must be a YAML dictionary".to_string()),
        Err(err) => Err(format!("Invalid YAML: {err}")),
    }
}

/// Document body after comment lines and the front matter block.
///
/// Falls back to the whole document when no front matter block is found.
#[must_use]
pub fn document_body(content: &str) -> &str {
    let stripped = strip_comment_lines(content);
    BODY_AFTER_FRONTMATTER
        .captures(stripped)
        .and_then(|caps| caps.get(1))
        .map_or(content, |m| m.as_str())
}
