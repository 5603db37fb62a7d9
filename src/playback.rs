use std::collections::VecDeque;

use crate::audio::AudioOutput;

/// Result of one render pass over the playback queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Nothing queued or playback stopped; output untouched.
    Idle,
    /// Samples were written and more remain queued.
    Playing,
    /// The last queued buffer finished during this pass.
    Drained,
}

#[derive(Debug, Clone)]
struct QueuedBuffer {
    samples: Vec<f32>,
    cursor: usize,
}

impl QueuedBuffer {
    fn remaining(&self) -> &[f32] {
        &self.samples[self.cursor..]
    }
}

/// FIFO of float buffers waiting to be played, plus the playing flag.
#[derive(Debug, Clone)]
pub struct PlaybackQueue {
    buffers: VecDeque<QueuedBuffer>,
    playing: bool,
    gain: f64,
}

impl PlaybackQueue {
    pub fn new(gain: f64) -> Self {
        Self {
            buffers: VecDeque::new(),
            playing: false,
            gain,
        }
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of buffers still queued, including a partially played head.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Unplayed samples across every queued buffer.
    pub fn queued_samples(&self) -> usize {
        self.buffers.iter().map(|b| b.remaining().len()).sum()
    }

    pub fn enqueue(&mut self, samples: Vec<f32>) {
        self.buffers.push_back(QueuedBuffer { samples, cursor: 0 });
        self.playing = true;
    }

    /// Drop everything queued and mark playback inactive.
    pub fn stop(&mut self) {
        self.buffers.clear();
        self.playing = false;
    }

    /// Play from the head buffer into every output channel.
    ///
    /// At most one buffer is touched per call. A head that outlasts the block
    /// keeps its place and resumes where it stopped on the next call.
    pub fn render(&mut self, output: &mut AudioOutput) -> RenderOutcome {
        if output.is_empty() || !self.playing {
            return RenderOutcome::Idle;
        }

        if let Some(head) = self.buffers.front_mut() {
            let written = output.fill_from(head.remaining(), self.gain);
            head.cursor += written;
            if head.remaining().is_empty() {
                self.buffers.pop_front();
            }
        }

        if self.buffers.is_empty() {
            self.playing = false;
            RenderOutcome::Drained
        } else {
            RenderOutcome::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_block(
        queue: &mut PlaybackQueue,
        frames: usize,
        channels: usize,
    ) -> (RenderOutcome, Vec<Vec<f32>>) {
        let mut buffers = vec![vec![0.0_f32; frames]; channels];
        let mut slices: Vec<&mut [f32]> = buffers.iter_mut().map(|b| b.as_mut_slice()).collect();
        let outcome = queue.render(&mut AudioOutput::new(&mut slices));
        drop(slices);
        (outcome, buffers)
    }

    #[test]
    fn drains_across_calls_with_gain() {
        let mut queue = PlaybackQueue::new(0.8);
        queue.enqueue(vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let (outcome, out) = render_block(&mut queue, 3, 2);
        assert_eq!(outcome, RenderOutcome::Playing);
        assert_eq!(out[0], vec![-0.8, -0.4, 0.0]);
        assert_eq!(out[1], vec![-0.8, -0.4, 0.0]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.queued_samples(), 2);

        let (outcome, out) = render_block(&mut queue, 2, 2);
        assert_eq!(outcome, RenderOutcome::Drained);
        assert_eq!(out[0], vec![0.4, 0.8]);
        assert_eq!(out[1], vec![0.4, 0.8]);
        assert!(!queue.is_playing());
        assert!(queue.is_empty());
    }

    #[test]
    fn one_buffer_per_block_even_if_block_is_larger() {
        let mut queue = PlaybackQueue::new(1.0);
        queue.enqueue(vec![0.25, 0.25]);
        queue.enqueue(vec![0.5]);

        let (outcome, out) = render_block(&mut queue, 4, 1);
        assert_eq!(outcome, RenderOutcome::Playing);
        assert_eq!(out[0], vec![0.25, 0.25, 0.0, 0.0]);
        assert_eq!(queue.len(), 1);

        let (outcome, out) = render_block(&mut queue, 4, 1);
        assert_eq!(outcome, RenderOutcome::Drained);
        assert_eq!(out[0], vec![0.5, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn idle_queue_leaves_output_untouched() {
        let mut queue = PlaybackQueue::new(0.8);
        let mut mono = vec![0.3_f32; 2];
        let mut slices: [&mut [f32]; 1] = [&mut mono[..]];
        assert_eq!(
            queue.render(&mut AudioOutput::new(&mut slices)),
            RenderOutcome::Idle
        );
        assert_eq!(mono, vec![0.3, 0.3]);
        assert!(!queue.is_playing());
    }

    #[test]
    fn no_output_channels_does_not_drain() {
        let mut queue = PlaybackQueue::new(0.8);
        queue.enqueue(vec![1.0]);
        let mut none: [&mut [f32]; 0] = [];
        assert_eq!(
            queue.render(&mut AudioOutput::new(&mut none)),
            RenderOutcome::Idle
        );
        assert_eq!(queue.len(), 1);
        assert!(queue.is_playing());
    }

    #[test]
    fn empty_buffer_drains_without_writing() {
        let mut queue = PlaybackQueue::new(0.8);
        queue.enqueue(Vec::new());
        let (outcome, out) = render_block(&mut queue, 2, 1);
        assert_eq!(outcome, RenderOutcome::Drained);
        assert_eq!(out[0], vec![0.0, 0.0]);
    }

    #[test]
    fn stop_clears_everything() {
        let mut queue = PlaybackQueue::new(0.8);
        queue.enqueue(vec![0.1, 0.2, 0.3]);
        queue.enqueue(vec![0.4, 0.5]);
        assert_eq!(queue.len(), 2);
        assert!(queue.is_playing());

        queue.stop();
        assert_eq!(queue.len(), 0);
        assert!(!queue.is_playing());
        assert_eq!(render_block(&mut queue, 2, 1).0, RenderOutcome::Idle);
    }
}
