use std::path::{Path, PathBuf};

use tempfile::TempDir;

use skillcheck::{Analysis, SkillAnalyzer};

// =============================================================================
// Assertion Macros
// =============================================================================

/// Assert that an analysis holds a record with the given check and status.
#[macro_export]
macro_rules! assert_record {
    ($analysis:expr, $check:expr, $status:expr) => {{
        let record = $analysis
            .records
            .iter()
            .find(|r| r.check == $check)
            .unwrap_or_else(|| panic!("no record named '{}' in {:#?}", $check, $analysis.records));
        assert_eq!(record.status, $status, "unexpected status for '{}'", $check);
        record
    }};
}

// =============================================================================
// Package Builder
// =============================================================================

/// A skill package laid out in a temporary directory.
///
/// The package lives in a named subdirectory so the report title is stable.
pub struct TestPackage {
    _temp: TempDir,
    pub root: PathBuf,
}

impl TestPackage {
    pub fn new(name: &str) -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path().join(name);
        std::fs::create_dir(&root).expect("create package dir");
        Self { _temp: temp, root }
    }

    /// A package whose SKILL.md has valid front matter and a short body.
    pub fn minimal(name: &str) -> Self {
        let package = Self::new(name);
        package.skill_md(&skill_md(name, &"A helpful skill description. ".repeat(3), "Body.\n"));
        package
    }

    pub fn skill_md(&self, content: &str) -> &Self {
        self.file("SKILL.md", content)
    }

    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write file");
        self
    }

    pub fn dir(&self, rel: &str) -> &Self {
        std::fs::create_dir_all(self.root.join(rel)).expect("create dir");
        self
    }

    #[cfg(unix)]
    pub fn script(&self, rel: &str, executable: bool) -> &Self {
        use std::os::unix::fs::PermissionsExt;

        self.file(rel, "#!/bin/sh\necho ok\n");
        let mode = if executable { 0o755 } else { 0o644 };
        std::fs::set_permissions(self.root.join(rel), std::fs::Permissions::from_mode(mode))
            .expect("set permissions");
        self
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn analyze(&self) -> Analysis {
        SkillAnalyzer::default()
            .analyze_path(&self.root)
            .expect("analysis succeeds")
    }
}

/// SKILL.md text with the given front matter fields and body.
pub fn skill_md(name: &str, description: &str, body: &str) -> String {
    format!("---\nname: {name}\ndescription: {}\n---\n{body}", description.trim())
}
