//! Rendering and persistence of generated documents.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Textual encoding for generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Render a document in this format.
    ///
    /// Both encoders emit struct fields in declaration order with no
    /// timestamps, so identical documents render byte-identically.
    pub fn render<T: Serialize>(&self, doc: &T) -> Result<String> {
        match self {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(doc)?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(doc)?),
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{}' (expected yaml or json)", other),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Destination for rendered documents, keyed by a logical target name.
pub trait DocumentSink {
    fn write_document(&mut self, target: &str, contents: &str) -> Result<()>;
}

/// Writes each document as `<dir>/<target>.<ext>`.
pub struct FileSink {
    dir: PathBuf,
    extension: &'static str,
}

impl FileSink {
    /// Create the sink, making the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        Ok(Self {
            dir,
            extension: format.extension(),
        })
    }
}

impl DocumentSink for FileSink {
    fn write_document(&mut self, target: &str, contents: &str) -> Result<()> {
        let path = self.dir.join(format!("{}.{}", target, self.extension));
        std::fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Captures documents in memory. Used in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub documents: Vec<(String, String)>,
}

impl DocumentSink for MemorySink {
    fn write_document(&mut self, target: &str, contents: &str) -> Result<()> {
        self.documents.push((target.to_string(), contents.to_string()));
        Ok(())
    }
}
