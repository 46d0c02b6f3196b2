//! Export configuration
//!
//! Loaded from TOML, falls back to defaults if no config file exists.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for transient snapshot files. System temp dir if unset.
    pub temp_dir: Option<PathBuf>,
    /// File name prefix of transient snapshots.
    pub file_prefix: String,
    /// Run `Model::check` before handing the snapshot over. Off by default:
    /// export only requires a valid assignment.
    pub check_model: bool,
    /// External evaluator command.
    pub evaluator: EvaluatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Program to run. Receives the snapshot path and the JSON assignment
    /// after `args`.
    pub program: String,
    /// Leading arguments.
    pub args: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            file_prefix: "hera-model-".into(),
            check_model: false,
            evaluator: EvaluatorConfig::default(),
        }
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            program: "hera-evaluate".into(),
            args: Vec::new(),
        }
    }
}

impl ExportConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded export config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No export config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Render as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
