use thiserror::Error;

/// Substring the worklet host puts in its duplicate-name failure.
const ALREADY_REGISTERED_MARKER: &str = "is already registered";

/// Failure reported by a processor registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("processor '{name}' is already registered")]
    AlreadyRegistered { name: String },

    #[error("invalid processor name '{name}'")]
    InvalidName { name: String },

    #[error("host rejected processor '{name}': {message}")]
    Host { name: String, message: String },
}

impl RegistrationError {
    /// Classify a raw failure message coming back from the host runtime.
    pub fn from_host_message(name: &str, message: &str) -> Self {
        if message.contains(ALREADY_REGISTERED_MARKER) {
            RegistrationError::AlreadyRegistered {
                name: name.to_string(),
            }
        } else {
            RegistrationError::Host {
                name: name.to_string(),
                message: message.to_string(),
            }
        }
    }

    pub fn is_already_registered(&self) -> bool {
        matches!(self, RegistrationError::AlreadyRegistered { .. })
    }
}

/// Invalid processor options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("frame size must be at least one sample")]
    ZeroFrameSize,

    #[error("playback gain must be finite and non-negative, got {0}")]
    InvalidGain(f64),

    #[error("processor name must not be empty")]
    EmptyProcessorName,

    #[error("malformed processor options: {0}")]
    Parse(#[from] serde_json::Error),
}
