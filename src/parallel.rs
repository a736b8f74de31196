//! Multi-threaded entry points for large host-side buffers.
//!
//! The buffers are cut into chunks of [`PAR_CHUNK_LEN`] elements and each
//! chunk runs through the selected kernel on the rayon pool. Elements are
//! independent, so the result is identical to the sequential kernels. The
//! chunk length is a multiple of the packed lane count, so only the final
//! chunk can reach the scalar tail.

use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

use crate::simd::packed::LANE_COUNT;
use crate::simd::traits::Kernel;
use crate::simd::SelectedKernel;
use crate::types::{Float32, Q15, Q7};

/// Elements handed to one rayon task.
pub const PAR_CHUNK_LEN: usize = 16 * 1024;

const _: () = assert!(PAR_CHUNK_LEN % LANE_COUNT == 0);

fn log_split(op: &str, len: usize) {
    log::trace!(
        "{op}: {len} elements in {} chunks on the {} backend",
        len.div_ceil(PAR_CHUNK_LEN),
        SelectedKernel::BACKEND
    );
}

/// Parallel [`crate::negate_f32`].
pub fn par_negate_f32(src: &[Float32], dst: &mut [Float32]) {
    let dst = &mut dst[..src.len()];
    log_split("par_negate_f32", src.len());

    dst.par_chunks_mut(PAR_CHUNK_LEN)
        .zip(src.par_chunks(PAR_CHUNK_LEN))
        .for_each(|(c_chunk, a_chunk)| SelectedKernel::negate_f32(a_chunk, c_chunk));
}

/// Parallel [`crate::negate_f32_in_place`].
pub fn par_negate_f32_in_place(buf: &mut [Float32]) {
    log_split("par_negate_f32_in_place", buf.len());

    buf.par_chunks_mut(PAR_CHUNK_LEN)
        .for_each(SelectedKernel::negate_f32_in_place);
}

/// Parallel [`crate::q7_to_q15`].
pub fn par_q7_to_q15(src: &[Q7], dst: &mut [Q15]) {
    let dst = &mut dst[..src.len()];
    log_split("par_q7_to_q15", src.len());

    dst.par_chunks_mut(PAR_CHUNK_LEN)
        .zip(src.par_chunks(PAR_CHUNK_LEN))
        .for_each(|(c_chunk, a_chunk)| SelectedKernel::q7_to_q15(a_chunk, c_chunk));
}
