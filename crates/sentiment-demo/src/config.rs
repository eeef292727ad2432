//! Demo configuration
//!
//! Loaded from a YAML file when present, otherwise defaults, then CLI
//! overrides are applied and the result validated.

use crate::cli::ArtifactArgs;
use regex::Regex;
use sentiment_classifiers::{DeviceType, PaddingConfig, Side, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Demo configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Artifact locations
    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    /// Encoding and inference settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Page appearance
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl DemoConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: impl AsRef<Path>, args: &ArtifactArgs) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            tracing::debug!("No configuration at {}, using defaults", config_path.display());
            Self::default()
        };

        if let Some(model) = &args.model {
            config.artifacts.model_path = model.clone();
        }

        if let Some(tokenizer) = &args.tokenizer {
            config.artifacts.tokenizer_path = tokenizer.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.inference.max_length == 0 {
            anyhow::bail!("inference.max_length must be at least 1");
        }

        if !(0.0..=1.0).contains(&self.inference.threshold) {
            anyhow::bail!(
                "inference.threshold must be within [0, 1], got {}",
                self.inference.threshold
            );
        }

        let color = Regex::new(r"^#[0-9a-fA-F]{6}$")?;
        for (field, value) in [
            ("theme.background_color", &self.theme.background_color),
            ("theme.text_color", &self.theme.text_color),
        ] {
            if !color.is_match(value) {
                anyhow::bail!("{} must be a #rrggbb colour, got '{}'", field, value);
            }
        }

        Ok(())
    }
}

/// Artifact locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    #[serde(default = "default_tokenizer_path")]
    pub tokenizer_path: PathBuf,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            tokenizer_path: default_tokenizer_path(),
        }
    }
}

/// Encoding and inference settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Length every input is padded or truncated to
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Probability at or above which text is Positive
    #[serde(default = "default_threshold")]
    pub threshold: f32,

    /// Device to run on (cpu, cuda, metal)
    #[serde(default)]
    pub device: DeviceType,

    #[serde(default)]
    pub padding: Side,

    #[serde(default)]
    pub truncating: Side,
}

impl InferenceConfig {
    pub fn padding_config(&self) -> PaddingConfig {
        PaddingConfig::new(self.max_length)
            .with_padding(self.padding)
            .with_truncating(self.truncating)
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            threshold: default_threshold(),
            device: DeviceType::Cpu,
            padding: Side::Pre,
            truncating: Side::Pre,
        }
    }
}

/// Page appearance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_page_title")]
    pub page_title: String,

    #[serde(default = "default_background_color")]
    pub background_color: String,

    #[serde(default = "default_text_color")]
    pub text_color: String,

    #[serde(default)]
    pub layout: Layout,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            page_title: default_page_title(),
            background_color: default_background_color(),
            text_color: default_text_color(),
            layout: Layout::Centered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Narrow centred column
    #[default]
    Centered,
    /// Full page width
    Wide,
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/model.safetensors")
}

fn default_tokenizer_path() -> PathBuf {
    PathBuf::from("models/tokenizer.json")
}

fn default_max_length() -> usize {
    100
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_page_title() -> String {
    "Sentiment Analysis".to_string()
}

fn default_background_color() -> String {
    "#151B54".to_string()
}

fn default_text_color() -> String {
    "#FFFFFF".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(config: impl Into<PathBuf>) -> ArtifactArgs {
        ArtifactArgs {
            config: config.into(),
            model: None,
            tokenizer: None,
        }
    }

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let config = DemoConfig::load(&path, &args("")).unwrap();

        assert_eq!(config.artifacts.model_path, PathBuf::from("models/model.safetensors"));
        assert_eq!(config.artifacts.tokenizer_path, PathBuf::from("models/tokenizer.json"));
        assert_eq!(config.inference.max_length, 100);
        assert_eq!(config.inference.threshold, 0.5);
        assert_eq!(config.theme.background_color, "#151B54");
        assert_eq!(config.theme.layout, Layout::Centered);
    }

    #[test]
    fn test_partial_yaml_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment.yaml");
        std::fs::write(
            &path,
            r#"
artifacts:
  model_path: /srv/models/imdb.safetensors
inference:
  max_length: 200
  padding: post
theme:
  layout: wide
"#,
        )
        .unwrap();

        let mut cli = args(&path);
        cli.tokenizer = Some(PathBuf::from("/srv/models/vocab.json"));
        let config = DemoConfig::load(&cli.config, &cli).unwrap();

        assert_eq!(
            config.artifacts.model_path,
            PathBuf::from("/srv/models/imdb.safetensors")
        );
        assert_eq!(config.artifacts.tokenizer_path, PathBuf::from("/srv/models/vocab.json"));
        assert_eq!(config.inference.max_length, 200);
        assert_eq!(config.inference.threshold, 0.5);
        assert_eq!(config.theme.layout, Layout::Wide);

        let padding = config.inference.padding_config();
        assert_eq!(padding.max_length, 200);
        assert_eq!(padding.padding, Side::Post);
        assert_eq!(padding.truncating, Side::Pre);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = DemoConfig::default();
        config.inference.max_length = 0;
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.inference.threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.theme.background_color = "red; } body { display: none".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "inference: [not, a, map").unwrap();
        assert!(DemoConfig::load(&path, &args("")).is_err());
    }
}
