//! Core skill package types: loading, front matter, links, and records.

pub mod frontmatter;
pub mod links;
pub mod package;
pub mod record;

pub use frontmatter::{FieldText, Frontmatter, parse_frontmatter};
pub use links::{LinkKind, MarkdownLink, extract_links};
pub use package::{FileInventory, PRIMARY_DOCUMENT, SkillPackage};
pub use record::{CheckRecord, RecordLog, Section, Status};
