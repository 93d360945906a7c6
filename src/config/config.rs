use std::path::Path;
use anyhow::{Context, Error};
use serde::{Deserialize, Serialize};

pub const SMILE_THRESHOLD: f64 = 0.35;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// mouth aspect ratio above which a face counts as smiling
    pub smile_threshold: f64,
}

impl ClassifierConfig {
    pub(crate) fn new() -> Self {
        ClassifierConfig {
            smile_threshold: SMILE_THRESHOLD,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub smile_image: String,
    pub serious_image: String,
    pub eureca_image: String,
    /// shown while no gesture has been classified
    pub placeholder_image: String,
}

impl DisplayConfig {
    pub(crate) fn new() -> Self {
        DisplayConfig {
            smile_image: "/MonkeyFacer/images/smile.png".to_string(),
            serious_image: "/MonkeyFacer/images/xd.png".to_string(),
            eureca_image: "/MonkeyFacer/images/eureca.png".to_string(),
            placeholder_image: "/MonkeyFacer/images/ahhh.png".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub classifier: ClassifierConfig,
    pub display: DisplayConfig,
    /// capacity of the frame queue between the detector and the pipeline
    pub frame_queue_size: usize,
}

impl PipelineConfig {
    pub(crate) fn new() -> Self {
        PipelineConfig {
            classifier: ClassifierConfig::new(),
            display: DisplayConfig::new(),
            frame_queue_size: 32,
        }
    }

    /// from_json_str parses a pipeline configuration, missing fields keep their defaults.
    ///
    /// # Arguments
    /// * `s` - JSON document
    ///
    /// # Returns
    /// * `Result<PipelineConfig, Error>`
    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        let config: PipelineConfig = serde_json::from_str(s)?;
        if config.frame_queue_size == 0 {
            return Err(Error::msg("frame_queue_size must be greater than 0"))
        }
        Ok(config)
    }

    /// from_json_file reads and parses a pipeline configuration file.
    ///
    /// # Arguments
    /// * `path` - path of the JSON file
    ///
    /// # Returns
    /// * `Result<PipelineConfig, Error>`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::config::{PipelineConfig, SMILE_THRESHOLD};

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.classifier.smile_threshold, SMILE_THRESHOLD);
        assert_eq!(config.display.placeholder_image, "/MonkeyFacer/images/ahhh.png");
        assert_eq!(config.frame_queue_size, 32);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PipelineConfig::from_json_str(
            r#"{"classifier":{"smile_threshold":0.5},"display":{"smile_image":"happy.png"}}"#
        ).unwrap();
        assert_eq!(config.classifier.smile_threshold, 0.5);
        assert_eq!(config.display.smile_image, "happy.png");
        assert_eq!(config.display.serious_image, "/MonkeyFacer/images/xd.png");
        assert_eq!(config.frame_queue_size, 32);

        assert_eq!(PipelineConfig::from_json_str("{}").unwrap(), PipelineConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(PipelineConfig::from_json_str(r#"{"frame_queue_size":0}"#).is_err());
        assert!(PipelineConfig::from_json_str("not json").is_err());
        assert!(PipelineConfig::from_json_file("/nonexistent/gesture.json").is_err());
    }
}
