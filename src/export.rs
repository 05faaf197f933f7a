//! Export generated addresses to disk

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{DotForgeError, Result};
use crate::types::GenerationReport;
use crate::validation_error;

/// Lists at least this long get a progress bar while writing
const PROGRESS_THRESHOLD: usize = 500;

/// Write addresses as plain text, one per line
pub fn write_plaintext(path: &Path, addresses: &[String]) -> Result<()> {
    if addresses.is_empty() {
        return Err(validation_error!("No addresses to export"));
    }

    ensure_parent(path)?;

    let progress = if addresses.len() >= PROGRESS_THRESHOLD {
        let bar = ProgressBar::new(addresses.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} addresses") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut content = String::with_capacity(addresses.iter().map(|a| a.len() + 1).sum());
    for (i, address) in addresses.iter().enumerate() {
        if i > 0 {
            content.push('\n');
        }
        content.push_str(address);
        progress.inc(1);
    }

    std::fs::write(path, content).map_err(|e| {
        DotForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;
    progress.finish_and_clear();

    tracing::info!(path = %path.display(), count = addresses.len(), "Exported addresses");
    Ok(())
}

/// Read a plain text export back
pub fn read_plaintext(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DotForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Write a generation report as pretty JSON
pub fn write_json(path: &Path, report: &GenerationReport) -> Result<()> {
    if report.is_empty() {
        return Err(validation_error!("No addresses to export"));
    }

    ensure_parent(path)?;

    let content = serde_json::to_string_pretty(report).map_err(|e| {
        DotForgeError::internal(format!("Failed to serialize report: {}", e))
    })?;

    std::fs::write(path, content).map_err(|e| {
        DotForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    tracing::info!(path = %path.display(), count = report.len(), "Exported JSON report");
    Ok(())
}

/// Load a JSON generation report
pub fn read_json(path: &Path) -> Result<GenerationReport> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DotForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    serde_json::from_str(&content).map_err(|e| DotForgeError::parse(e.to_string(), Some(content)))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DotForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }
    }
    Ok(())
}
