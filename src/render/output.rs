// src/render/output.rs
// Writes the rendered document, replacing whatever was there before.

use anyhow::{Context, Result};
use std::path::Path;

/// Writes `contents` to `path`, creating missing parent directories.
pub async fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
