#[cfg(feature = "simd")]
use std::simd::{f32x4, f64x4, num::SimdFloat, Simd};

/// Writes `input[i] * gain` into `output[i]`.
///
/// The product is taken in f64 and rounded once to f32, the same result a
/// host gets when it multiplies a float sample by a double gain and stores
/// it into a `Float32Array`. The gain must stay a double: widening `0.8f32`
/// is off by one ulp for a fifth of all samples.
#[cfg(not(feature = "simd"))]
pub fn apply_gain(input: &[f32], gain: f64, output: &mut [f32]) {
    debug_assert!(input.len() >= output.len());

    for (out, &sample) in output.iter_mut().zip(input) {
        *out = (f64::from(sample) * gain) as f32;
    }
}

#[cfg(feature = "simd")]
pub fn apply_gain(input: &[f32], gain: f64, output: &mut [f32]) {
    debug_assert!(input.len() >= output.len());

    let chunks = output.len() / 4;
    let remainder = output.len() % 4;
    let gain_v = f64x4::splat(gain);

    // Process 4 elements at a time using SIMD
    for i in 0..chunks {
        let offset = i * 4;
        let a: f32x4 = Simd::from_slice(&input[offset..offset + 4]);
        let result: f32x4 = (a.cast::<f64>() * gain_v).cast::<f32>();
        result.copy_to_slice(&mut output[offset..offset + 4]);
    }

    let start = chunks * 4;
    for i in 0..remainder {
        output[start + i] = (f64::from(input[start + i]) * gain) as f32;
    }
}
