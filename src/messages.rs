use serde::{Deserialize, Serialize};

use crate::codec::PcmFrame;

/// Inbound control traffic from the main thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlMessage {
    /// Queue a float buffer for playback.
    Playback { audio: Vec<f32> },
    /// Drop all queued playback immediately.
    StopPlayback,
}

/// Outbound notifications posted back to the main thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProcessorEvent {
    /// A completed microphone frame as 16-bit PCM.
    Input { audio: PcmFrame },
    /// Playback ran dry or was stopped.
    Done,
}

impl ControlMessage {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ProcessorEvent {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, ProcessorEvent::Done)
    }

    pub fn pcm(&self) -> Option<&[i16]> {
        match self {
            ProcessorEvent::Input { audio } => Some(audio),
            ProcessorEvent::Done => None,
        }
    }
}
