use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::Pipeline;
use crate::error::StepError;

/// Environment variable naming the presets file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "FILTERPLAY_CONFIG";

/// Gallery configuration loaded from a presets YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Presets in the order the gallery renders them
    #[serde(default)]
    pub presets: Vec<PresetConfig>,
}

/// A named pipeline
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PresetConfig {
    pub name: String,

    /// Step strings, e.g. `sepia:level=0.34`
    #[serde(default)]
    pub steps: Vec<String>,
}

impl PresetConfig {
    fn new(name: &str, steps: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            steps: steps.iter().map(|step| step.to_string()).collect(),
        }
    }

    pub fn pipeline(&self) -> Result<Pipeline, StepError> {
        Pipeline::parse(&self.steps)
    }

    /// Output file name for this preset, `<name>.png` with anything outside
    /// `[A-Za-z0-9_-]` replaced by `_`.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{stem}.png")
    }
}

impl GalleryConfig {
    /// Load from `path` if given, else from `$FILTERPLAY_CONFIG`, else use
    /// the built-in presets.
    pub fn load(path: Option<&Path>) -> Self {
        match Self::resolve_path(path) {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("No presets file configured, using built-in presets");
                Self::default()
            }
        }
    }

    /// The presets file [`load`](Self::load) would read, if any.
    pub fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
        path.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Load configuration from a YAML file, falling back to the built-in
    /// presets when it cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) if config.presets.is_empty() => {
                    tracing::warn!(path = %path.display(), "Config has no presets, using defaults");
                    Self::default()
                }
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        presets = config.presets.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        %e,
                        "Failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    %e,
                    "Failed to read config, using defaults"
                );
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn preset(&self, name: &str) -> Option<&PresetConfig> {
        self.presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            presets: vec![
                PresetConfig::new("sepia", &["sepia:level=0.34"]),
                PresetConfig::new("tint", &["tint:red=0.5,blue=0.5,threshold=0.01"]),
                PresetConfig::new("shading", &["shading:green=-0.8,blue=0.9,threshold=0.01"]),
                PresetConfig::new("gamma", &["gamma:level=0.8"]),
                PresetConfig::new("atkinson", &["dither:atkinson", "binary:level=0.335"]),
                PresetConfig::new(
                    "solarize",
                    &["solarize:red=0.2,green=0.2,blue=0.1,threshold=0.01"],
                ),
                PresetConfig::new(
                    "stencil",
                    &[
                        "dither:jarvis-judice-ninke",
                        "binary:level=0.98,transparent=true",
                        "tint:red=0.5,blue=0.5",
                    ],
                ),
            ],
        }
    }
}
