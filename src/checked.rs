//! Entry points that validate buffer lengths before running a kernel.
//!
//! The kernels trust the caller: a destination shorter than the source is
//! misuse and panics. These wrappers turn that case into a
//! [`TinyDspError::LengthMismatch`](crate::error::TinyDspError::LengthMismatch)
//! and leave the destination untouched.

use crate::error::{length_mismatch, Result};
use crate::types::{Float32, Q15, Q7};

#[inline]
fn check_lengths(op: &str, source_len: usize, destination_len: usize) -> Result<()> {
    if destination_len < source_len {
        log::debug!(
            "{op}: rejected, destination holds {destination_len} elements for {source_len} source elements"
        );
        return Err(length_mismatch(source_len, destination_len));
    }

    Ok(())
}

/// [`crate::negate_f32`], returning an error instead of panicking when `dst`
/// is shorter than `src`.
pub fn try_negate_f32(src: &[Float32], dst: &mut [Float32]) -> Result<()> {
    check_lengths("try_negate_f32", src.len(), dst.len())?;
    crate::negate_f32(src, dst);
    Ok(())
}

/// [`crate::q7_to_q15`], returning an error instead of panicking when `dst`
/// is shorter than `src`.
pub fn try_q7_to_q15(src: &[Q7], dst: &mut [Q15]) -> Result<()> {
    check_lengths("try_q7_to_q15", src.len(), dst.len())?;
    crate::q7_to_q15(src, dst);
    Ok(())
}
