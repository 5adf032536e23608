use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::ExportRecord;

/// Top-level JSON layout for a batch of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportShape {
    /// A bare object for exactly one record, an array otherwise. Foundry's
    /// per-item import dialog only accepts the bare object.
    #[default]
    Auto,
    /// Always an array.
    List,
}

/// Configuration for JSON export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonConfig {
    pub shape: ExportShape,
    /// Two-space indentation, as Foundry writes its own exports.
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            shape: ExportShape::Auto,
            pretty: true,
        }
    }
}

/// Serializes records for Foundry's import dialog.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    config: JsonConfig,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Write `records` to `writer`.
    pub fn export<W: Write>(&self, records: &[ExportRecord], writer: &mut W) -> Result<()> {
        match (self.config.shape, records) {
            (ExportShape::Auto, [single]) => self.write_value(single, writer),
            _ => self.write_value(records, writer),
        }
    }

    pub fn to_string(&self, records: &[ExportRecord]) -> Result<String> {
        let mut buf = Vec::new();
        self.export(records, &mut buf)?;
        // serde_json only ever writes UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Create (or truncate) `path` and write `records` to it.
    pub fn export_to_file<P: AsRef<Path>>(&self, records: &[ExportRecord], path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.export(records, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn write_value<T: serde::Serialize + ?Sized, W: Write>(
        &self,
        value: &T,
        writer: &mut W,
    ) -> Result<()> {
        if self.config.pretty {
            serde_json::to_writer_pretty(&mut *writer, value)?;
        } else {
            serde_json::to_writer(&mut *writer, value)?;
        }
        Ok(())
    }
}
