//! Allocating conveniences over the kernels for host-side code.
//!
//! Each method returns a freshly allocated `Vec` holding the result. The
//! kernels underneath still allocate nothing themselves.

use crate::simd::scalar::ScalarKernel;
use crate::simd::traits::{Kernel, SimdNegate, SimdWiden};
use crate::simd::SelectedKernel;
use crate::types::{Float32, Q15, Q7};

// Without the rayon pool the parallel variants run on the calling thread
#[cfg(feature = "parallel")]
use crate::parallel::{par_negate_f32 as par_negate, par_q7_to_q15};

#[cfg(not(feature = "parallel"))]
use crate::{negate_f32 as par_negate, q7_to_q15 as par_q7_to_q15};

impl SimdNegate<&[Float32]> for &[Float32] {
    type Output = Vec<Float32>;

    #[inline(always)]
    fn simd_negate(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        SelectedKernel::negate_f32(self, &mut c);
        c
    }

    #[inline(always)]
    fn par_simd_negate(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        par_negate(self, &mut c);
        c
    }

    #[inline(always)]
    fn scalar_negate(self) -> Self::Output {
        let mut c = vec![0.0; self.len()];
        ScalarKernel::negate_f32(self, &mut c);
        c
    }
}

impl SimdWiden<&[Q7]> for &[Q7] {
    type Output = Vec<Q15>;

    #[inline(always)]
    fn simd_q7_to_q15(self) -> Self::Output {
        let mut c = vec![0; self.len()];
        SelectedKernel::q7_to_q15(self, &mut c);
        c
    }

    #[inline(always)]
    fn par_simd_q7_to_q15(self) -> Self::Output {
        let mut c = vec![0; self.len()];
        par_q7_to_q15(self, &mut c);
        c
    }

    #[inline(always)]
    fn scalar_q7_to_q15(self) -> Self::Output {
        let mut c = vec![0; self.len()];
        ScalarKernel::q7_to_q15(self, &mut c);
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_methods_agree() {
        let a: Vec<f32> = (0..1031).map(|i| (i as f32 - 500.0) * 0.25).collect();

        let scalar = a.as_slice().scalar_negate();
        assert_eq!(a.as_slice().simd_negate(), scalar);
        assert_eq!(a.as_slice().par_simd_negate(), scalar);
        assert_eq!(scalar[0], 125.0);
    }

    #[test]
    fn test_widen_methods_agree() {
        let a: Vec<i8> = (0..1031).map(|i| (i % 256) as u8 as i8).collect();

        let scalar = a.as_slice().scalar_q7_to_q15();
        assert_eq!(a.as_slice().simd_q7_to_q15(), scalar);
        assert_eq!(a.as_slice().par_simd_q7_to_q15(), scalar);
        assert_eq!(scalar[255], -256);
    }

    #[test]
    fn test_empty_slices() {
        let a: &[f32] = &[];
        assert!(a.simd_negate().is_empty());

        let b: &[i8] = &[];
        assert!(b.par_simd_q7_to_q15().is_empty());
    }
}
