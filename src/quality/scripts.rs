//! `scripts/` permission checks.

use std::path::Path;

use tracing::{debug, warn};

use crate::core::{RecordLog, Section, SkillPackage};
use crate::utils::fs::{is_executable, list_visible_files};

pub const SCRIPTS_DIR: &str = "scripts";

/// Check `scripts/`. A directory that cannot be listed becomes a WARN record.
pub fn check(package: &SkillPackage, log: &mut RecordLog) {
    let dir = package.root().join(SCRIPTS_DIR);
    if !dir.is_dir() {
        log.info(Section::Scripts, "Scripts directory", "No scripts/ directory");
        return;
    }

    match list_visible_files(&dir) {
        Ok(scripts) => check_scripts(&dir, &scripts, log),
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "cannot list scripts");
            log.warn(
                Section::Scripts,
                "Scripts directory",
                format!("Cannot read {SCRIPTS_DIR}/: {err}"),
            );
        }
    }
}

/// One INFO count record, then one record per script file in `dir`.
pub fn check_scripts(dir: &Path, scripts: &[String], log: &mut RecordLog) {
    log.info(Section::Scripts, "Scripts found", scripts.len().to_string());

    for name in scripts {
        let check = format!("{name} executable");
        match is_executable(dir.join(name)) {
            Ok(true) => log.pass(Section::Scripts, check, ""),
            Ok(false) => log.warn(Section::Scripts, check, "Not marked executable"),
            Err(err) => {
                warn!(script = %name, error = %err, "cannot check script permissions");
                log.warn(
                    Section::Scripts,
                    check,
                    format!("Cannot check permissions: {err}"),
                );
            }
        }
        debug!(script = %name, "checked script permissions");
    }
}
