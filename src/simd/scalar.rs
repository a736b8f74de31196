//! Portable one-element-per-iteration kernels.
//!
//! This is the whole implementation on cores without packed halfword
//! instructions, the tail handler for [`super::packed`], and the reference
//! the packed path is tested against.

use crate::simd::traits::Kernel;
use crate::simd::Backend;
use crate::types::{Float32, Q15, Q7, Q7_TO_Q15_SHIFT};

pub struct ScalarKernel;

/// Rescales one Q7 value to Q15. Sign extension happens in the widening
/// conversion, before the shift.
#[inline(always)]
pub const fn q7_to_q15_sample(x: Q7) -> Q15 {
    (x as Q15) << Q7_TO_Q15_SHIFT
}

impl Kernel for ScalarKernel {
    const BACKEND: Backend = Backend::Scalar;

    #[inline]
    fn negate_f32(src: &[Float32], dst: &mut [Float32]) {
        let dst = &mut dst[..src.len()];

        for (d, s) in dst.iter_mut().zip(src) {
            *d = -*s;
        }
    }

    #[inline]
    fn negate_f32_in_place(buf: &mut [Float32]) {
        buf.iter_mut().for_each(|x| *x = -*x);
    }

    #[inline]
    fn q7_to_q15(src: &[Q7], dst: &mut [Q15]) {
        let dst = &mut dst[..src.len()];

        for (d, &s) in dst.iter_mut().zip(src) {
            *d = q7_to_q15_sample(s);
        }
    }
}
