use super::CliError;
use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use swap_core::domain::BlobKey;
use swap_core::{RenderedFiles, SwapModel};

pub(super) fn read_text(path: &Path) -> Result<String, CliError> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    Ok(text)
}

/// Reads every file whose extension names a blob role. Other files are
/// skipped.
pub(super) fn load_directory(directory: &Path) -> Result<BTreeMap<BlobKey, String>, CliError> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("failed to list input directory '{}'", directory.display()))?;
    let mut blobs = BTreeMap::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to list input directory '{}'", directory.display()))?
            .path();
        if !path.is_file() {
            continue;
        }
        let Some(key) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(BlobKey::from_file_name)
        else {
            tracing::debug!(path = %path.display(), "skipping file without a SWAP extension");
            continue;
        };
        blobs.insert(key, read_text(&path)?);
    }
    tracing::debug!(directory = %directory.display(), blobs = blobs.len(), "loaded input directory");
    Ok(blobs)
}

pub(super) fn write_rendered(files: &RenderedFiles, output: &Path) -> Result<Vec<PathBuf>, CliError> {
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory '{}'", output.display()))?;
    let mut written = Vec::with_capacity(files.len());
    for (key, text) in files {
        let path = output.join(key.file_name());
        fs::write(&path, text).with_context(|| format!("failed to write '{}'", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

pub(super) fn write_text(path: &Path, text: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

pub(super) fn model_summary(model: &SwapModel) -> String {
    let mut lines = Vec::new();
    for (key, sections) in model.blobs() {
        lines.push(format!("{key}: {} sections", sections.len()));
        for section in sections {
            lines.push(format!("  {}", section.kind()));
        }
    }
    lines.join("\n")
}
