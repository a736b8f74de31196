//! Four-elements-per-iteration kernels.
//!
//! Negation is a plain unrolled block of four. Q7 to Q15 widening loads four
//! lanes as one 32-bit word and rebuilds two packed output words with the
//! bit operations in [`word`]; there is no per-element branching. Both hand
//! the `len % LANE_COUNT` tail to [`ScalarKernel`](super::scalar::ScalarKernel).
//!
//! # Byte order
//!
//! How the loaded word is split back into halfwords depends on the target's
//! byte order. It is a type parameter here ([`LittleEndian`] or
//! [`BigEndian`]) so both conventions can be exercised on any host;
//! [`NativeOrder`] is the one the target actually uses.

use core::marker::PhantomData;

use crate::simd::traits::Kernel;
use crate::simd::{Backend, ByteOrder};
use crate::types::{Float32, Q15, Q7};

pub mod negate;
pub mod q7x4;
pub mod widen;
pub mod word;

pub use q7x4::{Q7x4, LANE_COUNT};

/// A byte-ordering convention for packed words.
pub trait PackOrder {
    const BYTE_ORDER: ByteOrder;

    /// Builds the word four consecutive bytes form in memory.
    fn load_word(bytes: [u8; 4]) -> u32;

    /// Re-packs the intermediate pairs from [`word::widen_pairs`].
    fn pack(rotated: u32, direct: u32) -> [u32; 2];

    /// Splits a packed output word into its two halfwords, in memory order.
    fn store_halves(word: u32) -> [Q15; 2];
}

#[derive(Debug, Clone, Copy)]
pub struct LittleEndian;

#[derive(Debug, Clone, Copy)]
pub struct BigEndian;

impl PackOrder for LittleEndian {
    const BYTE_ORDER: ByteOrder = ByteOrder::Little;

    #[inline(always)]
    fn load_word(bytes: [u8; 4]) -> u32 {
        u32::from_le_bytes(bytes)
    }

    #[inline(always)]
    fn pack(rotated: u32, direct: u32) -> [u32; 2] {
        word::pack_little_endian(rotated, direct)
    }

    #[inline(always)]
    fn store_halves(word: u32) -> [Q15; 2] {
        [word as u16 as Q15, (word >> 16) as u16 as Q15]
    }
}

impl PackOrder for BigEndian {
    const BYTE_ORDER: ByteOrder = ByteOrder::Big;

    #[inline(always)]
    fn load_word(bytes: [u8; 4]) -> u32 {
        u32::from_be_bytes(bytes)
    }

    #[inline(always)]
    fn pack(rotated: u32, direct: u32) -> [u32; 2] {
        word::pack_big_endian(rotated, direct)
    }

    #[inline(always)]
    fn store_halves(word: u32) -> [Q15; 2] {
        [(word >> 16) as u16 as Q15, word as u16 as Q15]
    }
}

#[cfg(target_endian = "little")]
pub type NativeOrder = LittleEndian;

#[cfg(target_endian = "big")]
pub type NativeOrder = BigEndian;

/// Packed kernels for the byte order `O`.
pub struct PackedKernel<O: PackOrder = NativeOrder> {
    _order: PhantomData<O>,
}

impl<O: PackOrder> Kernel for PackedKernel<O> {
    const BACKEND: Backend = Backend::Packed;

    #[inline]
    fn negate_f32(src: &[Float32], dst: &mut [Float32]) {
        negate::negate_f32(src, dst);
    }

    #[inline]
    fn negate_f32_in_place(buf: &mut [Float32]) {
        negate::negate_f32_in_place(buf);
    }

    #[inline]
    fn q7_to_q15(src: &[Q7], dst: &mut [Q15]) {
        widen::q7_to_q15::<O>(src, dst);
    }
}
