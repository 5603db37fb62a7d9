#![cfg_attr(feature = "simd", feature(portable_simd))]

pub mod audio;
pub mod codec;
pub mod config;
pub mod error;
pub mod frame;
pub mod log;
pub mod messages;
pub mod playback;
pub mod port;
pub mod processing;
pub mod processor;
pub mod registry;
pub mod utils;
pub mod worklet;

pub use audio::{split_planar, AudioInput, AudioOutput};
pub use codec::{encode_frame, f32_to_pcm16, pcm16_to_f32, PcmFrame};
pub use config::{ProcessorConfig, DEFAULT_FRAME_SIZE, DEFAULT_PLAYBACK_GAIN, PROCESSOR_NAME};
pub use error::{ConfigError, RegistrationError};
pub use frame::InputAccumulator;
pub use messages::{ControlMessage, ProcessorEvent};
pub use playback::{PlaybackQueue, RenderOutcome};
pub use port::{CallbackSink, EventSink};
pub use processing::{AudioProcessor, ProcessContext};
pub use processor::StreamProcessor;
pub use registry::{register_processor, InMemoryRegistry, ProcessorRegistry};

#[cfg(feature = "wasm")]
pub use worklet::{register_stream_processor, WasmStreamProcessor};
