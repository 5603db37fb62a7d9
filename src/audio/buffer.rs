use crate::utils::apply_gain;

/// Read-only view over the channels of one worklet input.
#[derive(Clone, Copy)]
pub struct AudioInput<'a> {
    channels: &'a [&'a [f32]],
}

impl<'a> AudioInput<'a> {
    pub fn new(channels: &'a [&'a [f32]]) -> Self {
        Self { channels }
    }

    pub fn empty() -> Self {
        Self { channels: &[] }
    }

    pub fn channel(&self, index: usize) -> Option<&'a [f32]> {
        self.channels.get(index).copied()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// Mutable view over the channels of one worklet output.
pub struct AudioOutput<'a, 'b> {
    pub(crate) channels: &'a mut [&'b mut [f32]],
}

impl<'a, 'b> AudioOutput<'a, 'b> {
    pub fn new(channels: &'a mut [&'b mut [f32]]) -> Self {
        Self { channels }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Frames per channel, taken from the first channel.
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, |c| c.len())
    }

    /// Write `source * gain` into the head of every channel.
    ///
    /// Returns the number of frames written, which is bounded by both the
    /// source length and the block size. Frames past that are left untouched.
    pub fn fill_from(&mut self, source: &[f32], gain: f64) -> usize {
        let count = source.len().min(self.frames());
        for channel in self.channels.iter_mut() {
            let n = count.min(channel.len());
            apply_gain(&source[..n], gain, &mut channel[..n]);
        }
        count
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(|c| &**c)
    }
}

/// Split a planar buffer (channel 0 frames, then channel 1, ...) into one
/// slice per channel. Trailing samples that do not fill a whole channel are
/// ignored; zero channels or fewer samples than channels yield no slices.
pub fn split_planar(buffer: &mut [f32], channels: usize) -> Vec<&mut [f32]> {
    if channels == 0 {
        return Vec::new();
    }
    let frames = buffer.len() / channels;
    if frames == 0 {
        return Vec::new();
    }
    buffer.chunks_exact_mut(frames).take(channels).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_channel_lookup() {
        let left = [0.1, 0.2];
        let channels: [&[f32]; 1] = [&left];
        let input = AudioInput::new(&channels);
        assert_eq!(input.channel_count(), 1);
        assert_eq!(input.channel(0), Some(&left[..]));
        assert_eq!(input.channel(1), None);
        assert!(AudioInput::empty().is_empty());
    }

    #[test]
    fn fill_from_fans_out_and_leaves_tail() {
        let mut left = vec![9.0_f32; 4];
        let mut right = vec![9.0_f32; 4];
        let mut channels: [&mut [f32]; 2] = [&mut left[..], &mut right[..]];
        let mut output = AudioOutput::new(&mut channels);

        let written = output.fill_from(&[1.0, -1.0], 0.5);

        assert_eq!(written, 2);
        assert_eq!(left, vec![0.5, -0.5, 9.0, 9.0]);
        assert_eq!(right, vec![0.5, -0.5, 9.0, 9.0]);
    }

    #[test]
    fn split_planar_yields_one_slice_per_channel() {
        let mut planar = vec![0.0_f32; 9];
        let mut channels = split_planar(&mut planar, 3);
        assert_eq!(channels.len(), 3);
        assert!(channels.iter().all(|c| c.len() == 3));

        let mut output = AudioOutput::new(&mut channels);
        assert_eq!(output.fill_from(&[1.0, 1.0, 1.0], 0.5), 3);
        drop(channels);
        assert_eq!(planar, vec![0.5; 9]);

        assert!(split_planar(&mut planar, 0).is_empty());
        assert!(split_planar(&mut [0.0; 2], 3).is_empty());
        assert_eq!(split_planar(&mut [0.0; 7], 2).len(), 2);
    }

    #[test]
    fn fill_from_is_bounded_by_block_size() {
        let mut mono = vec![0.0_f32; 2];
        let mut channels: [&mut [f32]; 1] = [&mut mono[..]];
        let mut output = AudioOutput::new(&mut channels);

        assert_eq!(output.frames(), 2);
        assert_eq!(output.fill_from(&[1.0, 1.0, 1.0], 1.0), 2);
        assert_eq!(mono, vec![1.0, 1.0]);
    }
}
