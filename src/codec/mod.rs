mod pcm;

pub use pcm::{encode_frame, f32_to_pcm16, pcm16_to_f32, PcmFrame, PCM16_SCALE};
