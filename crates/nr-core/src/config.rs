use crate::error::Result;
use crate::types::HighlightStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    pub style: StyleConfig,
    pub server: ServerConfig,
}

/// Font and highlight applied to every rendered run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_family: String,
    pub font_size_points: f64,
    pub highlight: HighlightStyle,
}

impl StyleConfig {
    /// Font size in OOXML half-points (10.5pt -> 21).
    pub fn half_points(&self) -> usize {
        (self.font_size_points * 2.0).round().max(1.0) as usize
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "Hiragino Maru Gothic Pro".into(),
            font_size_points: 10.5,
            highlight: HighlightStyle::Gray50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            template_path: PathBuf::from("uploads/temp.docx"),
            output_dir: PathBuf::from("uploads"),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl NarrationConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
