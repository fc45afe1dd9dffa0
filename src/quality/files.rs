//! File tree hygiene checks.

use itertools::Itertools;

use crate::config::FilesConfig;
use crate::core::{FileInventory, RecordLog, Section};

pub fn check(inventory: &FileInventory, files: &FilesConfig, log: &mut RecordLog) {
    let dirs = inventory.top_level_dirs();
    let dirs = if dirs.is_empty() {
        "none".to_string()
    } else {
        dirs.join(", ")
    };
    log.info(Section::Files, "Directories", dirs);
    log.info(Section::Files, "Total files", inventory.files().len().to_string());

    let extraneous = inventory.with_base_names(&files.extraneous);
    if extraneous.is_empty() {
        log.pass(Section::Files, "Extraneous files", "none detected");
    } else {
        log.warn(Section::Files, "Extraneous files", extraneous.iter().join(", "));
    }
}
