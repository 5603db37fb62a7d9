/// Full-scale value for 16-bit output. -1.0 maps to -32767, never -32768.
pub const PCM16_SCALE: f64 = 32767.0;

/// One completed input frame, quantized to signed 16-bit PCM.
pub type PcmFrame = Vec<i16>;

/// Clamp to [-1, 1], scale, and truncate toward zero.
///
/// The product is formed in f64 so results are bit-exact with a host that
/// does the same arithmetic in doubles. NaN becomes 0.
#[inline]
pub fn f32_to_pcm16(sample: f32) -> i16 {
    let clamped = f64::from(sample).clamp(-1.0, 1.0);
    (clamped * PCM16_SCALE) as i16
}

#[inline]
pub fn pcm16_to_f32(sample: i16) -> f32 {
    (f64::from(sample) / PCM16_SCALE) as f32
}

pub fn encode_frame(samples: &[f32]) -> PcmFrame {
    samples.iter().map(|&s| f32_to_pcm16(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        let encoded = encode_frame(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(encoded, vec![-32767, -32767, 0, 32767, 32767]);
    }

    #[test]
    fn truncates_toward_zero() {
        // 0.5 * 32767 = 16383.5
        assert_eq!(f32_to_pcm16(0.5), 16383);
        assert_eq!(f32_to_pcm16(-0.5), -16383);
        // Just under one step stays at zero.
        assert_eq!(f32_to_pcm16(1.0 / 40000.0), 0);
        assert_eq!(f32_to_pcm16(-1.0 / 40000.0), 0);
    }

    #[test]
    fn nan_and_infinities() {
        assert_eq!(f32_to_pcm16(f32::NAN), 0);
        assert_eq!(f32_to_pcm16(f32::INFINITY), 32767);
        assert_eq!(f32_to_pcm16(f32::NEG_INFINITY), -32767);
    }

    #[test]
    fn decode_hits_full_scale() {
        assert_eq!(pcm16_to_f32(32767), 1.0);
        assert_eq!(pcm16_to_f32(-32767), -1.0);
        assert_eq!(pcm16_to_f32(0), 0.0);
    }
}
