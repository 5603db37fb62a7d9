// src/processing/mod.rs
use crate::audio::{AudioInput, AudioOutput};

/// Buffers for one render quantum: the first input and the first output of
/// the worklet node, each as a list of channels.
pub struct ProcessContext<'a, 'b> {
    pub input: AudioInput<'a>,
    pub output: AudioOutput<'a, 'b>,
}

impl<'a, 'b> ProcessContext<'a, 'b> {
    pub fn new(inputs: &'a [&'a [f32]], outputs: &'a mut [&'b mut [f32]]) -> Self {
        Self {
            input: AudioInput::new(inputs),
            output: AudioOutput::new(outputs),
        }
    }

    /// Frames in this quantum as seen by the output.
    pub fn buffer_size(&self) -> usize {
        self.output.frames()
    }
}

pub trait AudioProcessor {
    /// Handle one render quantum. Returning `false` asks the host to stop
    /// calling this processor.
    fn process(&mut self, context: &mut ProcessContext) -> bool;
    fn reset(&mut self);
}
