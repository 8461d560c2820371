//! @ai:module:intent Configuration structs for the report CLI
//! @ai:module:layer infrastructure
//! @ai:module:public_api AppConfig, OutputConfig, DefaultsConfig, Destination
//! @ai:module:stateless true

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Main configuration for report generation
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// @ai:intent Where generated reports are written
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
}

/// @ai:intent Values used when the command line omits them
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_report_type")]
    pub report_type: String,
}

/// @ai:intent Target of a generated report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File { dir: PathBuf, stem: String },
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            file_stem: default_file_stem(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            report_type: default_report_type(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_file_stem() -> String {
    "report".to_string()
}

fn default_report_type() -> String {
    "csv".to_string()
}

impl AppConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// @ai:intent Load configuration if a path is given, else use defaults
    /// @ai:effects fs:read
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// @ai:intent Pick the report type, falling back to the configured default
    /// @ai:effects pure
    pub fn resolve_report_type(&self, given: Option<String>) -> String {
        given.unwrap_or_else(|| self.defaults.report_type.clone())
    }

    /// @ai:intent Decide where a generated report goes
    /// @ai:post print yields Stdout; otherwise given dir and stem override config
    /// @ai:effects pure
    pub fn resolve_destination(
        &self,
        print: bool,
        dir: Option<PathBuf>,
        stem: Option<String>,
    ) -> Destination {
        if print {
            return Destination::Stdout;
        }

        Destination::File {
            dir: dir.unwrap_or_else(|| self.output.dir.clone()),
            stem: stem.unwrap_or_else(|| self.output.file_stem.clone()),
        }
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
