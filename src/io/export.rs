//! JSON model snapshots and calculation settings on disk.

use crate::Model;
use crate::ettv::config::EttvConfig;
use crate::ettv::export::ModelExport;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

/// File name used when the project name is blank.
pub const DEFAULT_EXPORT_STEM: &str = "EttvModel";

/// Builds `{ProjectName}_v{Version}.json`, with spaces in the project name
/// replaced by underscores. A blank name falls back to [`DEFAULT_EXPORT_STEM`].
pub fn export_file_name(model: &Model) -> String {
    let name = model.project_name();
    let stem = if name.trim().is_empty() {
        DEFAULT_EXPORT_STEM.to_string()
    } else {
        name.replace(' ', "_")
    };
    format!("{stem}_v{}.json", model.version())
}

/// Serializes a model snapshot to a JSON string.
pub fn to_export_string(model: &Model) -> Result<String> {
    serde_json::to_string_pretty(&ModelExport::from_model(model))
        .context("Failed to serialize model to string")
}

/// Deserializes a model snapshot from a JSON string.
pub fn from_export_string(json: &str) -> Result<ModelExport> {
    serde_json::from_str(json).context("Failed to deserialize model snapshot from string")
}

/// Writes a model snapshot into `dir`, creating the directory if needed.
///
/// Returns the path of the written file.
pub fn write_export(dir: &Path, model: &Model) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    let path = dir.join(export_file_name(model));

    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ModelExport::from_model(model))
        .with_context(|| format!("Failed to serialize model to: {}", path.display()))?;

    info!(path = %path.display(), "Exported model");
    Ok(path)
}

/// Reads a model snapshot written by [`write_export`].
pub fn read_export(path: &Path) -> Result<ModelExport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let export: ModelExport = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize model snapshot from: {}", path.display()))?;

    Ok(export)
}

/// Reads and validates calculation settings. Missing fields take defaults.
pub fn read_config(path: &Path) -> Result<EttvConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let config: EttvConfig = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize config from: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config in: {}", path.display()))?;

    Ok(config)
}

pub fn write_config(path: &Path, config: &EttvConfig) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, config)
        .with_context(|| format!("Failed to serialize config to: {}", path.display()))?;

    Ok(())
}
