use crate::simd::packed::LANE_COUNT;
use crate::simd::scalar::ScalarKernel;
use crate::simd::traits::Kernel;
use crate::types::Float32;

#[inline(always)]
fn negate_block(a: &[Float32], c: &mut [Float32]) {
    // Assumes lengths are LANE_COUNT
    let (in1, in2, in3, in4) = (a[0], a[1], a[2], a[3]);

    c[0] = -in1;
    c[1] = -in2;
    c[2] = -in3;
    c[3] = -in4;
}

#[inline(always)]
fn negate_block_in_place(c: &mut [Float32]) {
    let (in1, in2, in3, in4) = (c[0], c[1], c[2], c[3]);

    c[0] = -in1;
    c[1] = -in2;
    c[2] = -in3;
    c[3] = -in4;
}

pub(crate) fn negate_f32(a: &[Float32], c: &mut [Float32]) {
    let c = &mut c[..a.len()];

    let mut a_blocks = a.chunks_exact(LANE_COUNT);
    let mut c_blocks = c.chunks_exact_mut(LANE_COUNT);

    for (a_block, c_block) in (&mut a_blocks).zip(&mut c_blocks) {
        negate_block(a_block, c_block);
    }

    ScalarKernel::negate_f32(a_blocks.remainder(), c_blocks.into_remainder());
}

pub(crate) fn negate_f32_in_place(c: &mut [Float32]) {
    let mut blocks = c.chunks_exact_mut(LANE_COUNT);

    for block in &mut blocks {
        negate_block_in_place(block);
    }

    ScalarKernel::negate_f32_in_place(blocks.into_remainder());
}
