//! Elementwise vector kernels for embedded DSP workloads.
//!
//! Every kernel reads `src`, writes the first `src.len()` elements of `dst`,
//! and treats each element independently:
//!
//! - [`negate_f32`] / [`negate_f32_in_place`]: `dst[n] = -src[n]`
//! - [`q7_to_q15`]: `dst[n] = (src[n] as Q15) << 8`
//!
//! Two strategies implement the same contract. [`simd::packed`] handles four
//! elements per iteration (the widening kernel does it with packed-word bit
//! manipulation) and hands the `len % 4` tail to [`simd::scalar`], which is
//! also the sole path on cores without packed halfword instructions. The
//! build script picks one of them once per build; see [`Backend`].
//!
//! The kernels allocate nothing, never fail and do not validate lengths. A
//! destination shorter than the source panics on the slice operation. Use
//! [`checked`] for entry points that report mismatched lengths instead.
//!
//! ```
//! let src = [1.5f32, -2.0, 0.0, 3.25];
//! let mut dst = [0.0f32; 4];
//! tinydsp::negate_f32(&src, &mut dst);
//! assert_eq!(dst, [-1.5, 2.0, -0.0, -3.25]);
//!
//! let src = [1i8, -1, 127, -128];
//! let mut dst = [0i16; 4];
//! tinydsp::q7_to_q15(&src, &mut dst);
//! assert_eq!(dst, [256, -256, 32512, -32768]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod checked;
pub mod error;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod simd;
pub mod types;

pub use simd::{Backend, ByteOrder, SelectedKernel};
pub use types::{Float32, Q15, Q7, Q7_TO_Q15_SHIFT};

use simd::traits::Kernel;

/// Negates every element of a floating-point vector.
///
/// `dst[n] = -src[n]` for `0 <= n < src.len()`.
#[inline]
pub fn negate_f32(src: &[Float32], dst: &mut [Float32]) {
    SelectedKernel::negate_f32(src, dst);
}

/// Negates every element of a floating-point vector, overwriting it.
#[inline]
pub fn negate_f32_in_place(buf: &mut [Float32]) {
    SelectedKernel::negate_f32_in_place(buf);
}

/// Converts a Q7 vector to Q15.
///
/// `dst[n] = (src[n] as Q15) << 8` for `0 <= n < src.len()`.
#[inline]
pub fn q7_to_q15(src: &[Q7], dst: &mut [Q15]) {
    SelectedKernel::q7_to_q15(src, dst);
}
