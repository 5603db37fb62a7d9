mod buffer;

pub use buffer::{split_planar, AudioInput, AudioOutput};
