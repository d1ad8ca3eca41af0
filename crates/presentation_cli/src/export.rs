//! JSON export of nearby-search results

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use domain::short_timestamp;
use integration_places::Place;
use tracing::info;

/// Export file name for a given timestamp
pub fn export_file_name(timestamp: &str) -> String {
    format!("query-{timestamp}.json")
}

/// Write places to `<dir>/query-<mmddHHMMSS>.json`, creating `dir` if needed
pub fn write_places(dir: &Path, places: &[Place]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(export_file_name(&short_timestamp()));
    let file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, places)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    info!(path = %path.display(), count = places.len(), "Exported places");
    Ok(path)
}
