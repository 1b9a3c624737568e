use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const DEFAULT_DIR: &str = "outputs";
const REPORT_STEM: &str = "validation_report";

/// Where the report goes.
///
/// No path means `outputs/validation_report.<extension>`. A directory (existing, or
/// given with a trailing separator) receives that file name. Missing parent
/// directories are created.
pub fn resolve_file_path(path: &Option<String>, extension: &str) -> Result<PathBuf> {
    let filename = format!("{}.{}", REPORT_STEM, extension);
    let Some(base_path) = path.as_deref() else {
        let dir = Path::new(DEFAULT_DIR);
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        return Ok(dir.join(filename));
    };
    let path = Path::new(base_path);

    let output_path = if path.exists() {
        if path.is_dir() {
            path.join(&filename)
        } else {
            path.to_path_buf()
        }
    } else if base_path.ends_with('/') || base_path.ends_with('\\') {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        path.join(filename)
    } else {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }
        path.to_path_buf()
    };
    Ok(output_path)
}
