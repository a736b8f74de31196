use crate::simd::Backend;
use crate::types::{Float32, Q15, Q7};

/// One execution strategy for the elementwise kernels.
///
/// Every implementation honours the same contract: `dst[n]` depends on
/// `src[n]` alone, the first `src.len()` elements of `dst` are overwritten
/// and nothing past them is touched. `dst` must hold at least `src.len()`
/// elements; a shorter one panics on the slice operation.
pub trait Kernel {
    const BACKEND: Backend;

    /// `dst[n] = -src[n]`
    fn negate_f32(src: &[Float32], dst: &mut [Float32]);

    /// `buf[n] = -buf[n]`
    fn negate_f32_in_place(buf: &mut [Float32]);

    /// `dst[n] = (src[n] as Q15) << 8`
    fn q7_to_q15(src: &[Q7], dst: &mut [Q15]);
}

pub trait SimdNegate<Rhs = Self> {
    type Output;

    fn simd_negate(self) -> Self::Output;
    fn par_simd_negate(self) -> Self::Output;
    fn scalar_negate(self) -> Self::Output;
}

pub trait SimdWiden<Rhs = Self> {
    type Output;

    fn simd_q7_to_q15(self) -> Self::Output;
    fn par_simd_q7_to_q15(self) -> Self::Output;
    fn scalar_q7_to_q15(self) -> Self::Output;
}
