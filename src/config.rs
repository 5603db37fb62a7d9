use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Samples per emitted input frame. 24000 would be one frame per second at 24 kHz.
pub const DEFAULT_FRAME_SIZE: usize = 128;
/// Attenuation applied to every playback sample. Kept in f64 like the host's literal.
pub const DEFAULT_PLAYBACK_GAIN: f64 = 0.8;
/// Name the processor registers under in the worklet global scope.
pub const PROCESSOR_NAME: &str = "stream_processor";

/// Options handed to the processor at construction time.
///
/// Field names follow the JS `processorOptions` object, so the same payload
/// can be deserialized on either side of the worklet boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessorConfig {
    pub frame_size: usize,
    pub playback_gain: f64,
    pub processor_name: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            frame_size: DEFAULT_FRAME_SIZE,
            playback_gain: DEFAULT_PLAYBACK_GAIN,
            processor_name: PROCESSOR_NAME.to_string(),
        }
    }
}

impl ProcessorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ProcessorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_frame_size(mut self, frame_size: usize) -> Self {
        self.frame_size = frame_size;
        self
    }

    pub fn with_playback_gain(mut self, gain: f64) -> Self {
        self.playback_gain = gain;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_size == 0 {
            return Err(ConfigError::ZeroFrameSize);
        }
        if !self.playback_gain.is_finite() || self.playback_gain < 0.0 {
            return Err(ConfigError::InvalidGain(self.playback_gain));
        }
        if self.processor_name.is_empty() {
            return Err(ConfigError::EmptyProcessorName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_use_worklet_defaults() {
        let config = ProcessorConfig::from_json("{}").unwrap();
        assert_eq!(config, ProcessorConfig::default());
        assert_eq!(config.frame_size, 128);
        assert_eq!(config.playback_gain, 0.8);
        assert_eq!(config.processor_name, "stream_processor");
    }

    #[test]
    fn camel_case_options_override_defaults() {
        let config =
            ProcessorConfig::from_json(r#"{"frameSize": 24000, "playbackGain": 1.0}"#).unwrap();
        assert_eq!(config.frame_size, 24000);
        assert_eq!(config.playback_gain, 1.0);
        assert_eq!(config.processor_name, PROCESSOR_NAME);
    }

    #[test]
    fn rejects_unusable_options() {
        assert!(matches!(
            ProcessorConfig::from_json(r#"{"frameSize": 0}"#),
            Err(ConfigError::ZeroFrameSize)
        ));
        assert!(matches!(
            ProcessorConfig::default().with_playback_gain(-0.5).validate(),
            Err(ConfigError::InvalidGain(_))
        ));
        assert!(matches!(
            ProcessorConfig::from_json(r#"{"processorName": ""}"#),
            Err(ConfigError::EmptyProcessorName)
        ));
        assert!(matches!(
            ProcessorConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
