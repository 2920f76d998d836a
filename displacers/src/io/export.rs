//! Trajectory export
//!
//! Serializes run outputs for whatever renders or analyses them. The format
//! follows the file extension: `.yaml`/`.yml` for YAML, anything else JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => ExportFormat::Yaml,
            _ => ExportFormat::Json,
        }
    }
}

/// Write `value` to `writer` in `format`
pub fn write_output<W, T>(mut writer: W, value: &T, format: ExportFormat) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
        }
        ExportFormat::Yaml => serde_yaml::to_writer(&mut writer, value)?,
    }
    writer.flush()?;
    Ok(())
}

/// Write `value` to `path`, choosing the format from its extension
pub fn export_to_file<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    write_output(BufWriter::new(file), value, ExportFormat::from_path(path))
        .with_context(|| format!("cannot write {}", path.display()))
}
