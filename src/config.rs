use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Pretty,
    Text,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Exit non-zero when the booking is rejected.
    pub fail_on_invalid: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            fail_on_invalid: true,
        }
    }
}

impl OutputConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("invalid config JSON in {}", path.display()))
    }

    /// Reads the file named by `PNR_CONFIG`, or falls back to defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var("PNR_CONFIG") {
            Ok(p) if !p.is_empty() => Self::load(p),
            _ => Ok(Self::default()),
        }
    }
}
