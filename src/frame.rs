use crate::codec::{encode_frame, PcmFrame};

/// Collects microphone samples until a full frame is available.
///
/// `offset` never exceeds `capacity`; the buffer is flushed and zeroed the
/// moment it fills, so a partial frame is never emitted.
#[derive(Debug, Clone)]
pub struct InputAccumulator {
    buffer: Vec<f32>,
    offset: usize,
}

impl InputAccumulator {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: vec![0.0; capacity],
            offset: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Samples held since the last flush.
    pub fn len(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }

    /// Append one sample, returning the quantized frame if it completed one.
    pub fn push(&mut self, sample: f32) -> Option<PcmFrame> {
        self.buffer[self.offset] = sample;
        self.offset += 1;

        if self.offset >= self.buffer.len() {
            let frame = encode_frame(&self.buffer);
            self.reset();
            Some(frame)
        } else {
            None
        }
    }

    /// Append a whole block, handing every completed frame to `emit` in order.
    pub fn ingest<F>(&mut self, samples: &[f32], mut emit: F)
    where
        F: FnMut(PcmFrame),
    {
        for &sample in samples {
            if let Some(frame) = self.push(sample) {
                emit(frame);
            }
        }
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.offset = 0;
    }
}
