//! Packed-word primitives for the Q7 to Q15 widening.
//!
//! A `u32` holds two 16-bit halves. These are portable equivalents of the
//! rotate, dual sign-extend and halfword-pack instructions found on DSP
//! cores, written so the compiler can lower them to those instructions where
//! they exist.
//!
//! Widening four Q7 lanes `[b0, b1, b2, b3]` (lane 0 in the low byte of a
//! little-endian word) goes through two intermediate words:
//!
//! ```text
//! direct  = sxtb16(word)         << 8 & 0xFF00_FF00    high: b2 << 8, low: b0 << 8
//! rotated = sxtb16(ror(word, 8)) << 8 & 0xFF00_FF00    high: b3 << 8, low: b1 << 8
//! ```
//!
//! and is then re-packed into two output words of two Q15 halves each. Which
//! half lands in which output word depends on the byte order, see
//! [`pack_little_endian`] and [`pack_big_endian`].

/// Bits of each 16-bit half that survive the `<< 8`: the high byte.
pub const HIGH_BYTE_MASK: u32 = 0xFF00_FF00;

/// Shift that moves a sign-extended byte into the high byte of its half.
pub const HALF_SHIFT: u32 = 8;

/// Rotates `word` right by `shift` bits.
#[inline(always)]
pub const fn ror(word: u32, shift: u32) -> u32 {
    word.rotate_right(shift)
}

/// Sign-extends bytes 0 and 2 of `word` into the low and high 16-bit halves.
#[inline(always)]
pub const fn sxtb16(word: u32) -> u32 {
    let low = word as u8 as i8 as i16 as u16 as u32;
    let high = (word >> 16) as u8 as i8 as i16 as u16 as u32;

    (high << 16) | low
}

/// Packs the bottom half of `bottom` with the bottom half of `top << SHIFT`
/// placed in the top half.
#[inline(always)]
pub const fn pkhbt<const SHIFT: u32>(bottom: u32, top: u32) -> u32 {
    (bottom & 0x0000_FFFF) | ((top << SHIFT) & 0xFFFF_0000)
}

/// Packs the top half of `top` with the bottom half of `bottom >> SHIFT`
/// (arithmetic shift) placed in the bottom half.
#[inline(always)]
pub const fn pkhtb<const SHIFT: u32>(top: u32, bottom: u32) -> u32 {
    (top & 0xFFFF_0000) | (((bottom as i32) >> SHIFT) as u32 & 0x0000_FFFF)
}

/// Sign-extends and rescales all four lanes of a loaded word.
///
/// Returns `(rotated, direct)`: `direct` carries the lanes at bytes 0 and 2
/// of the word, `rotated` the lanes at bytes 1 and 3, each as a Q15 value in
/// its half.
#[inline(always)]
pub const fn widen_pairs(word: u32) -> (u32, u32) {
    let rotated = (sxtb16(ror(word, 8)) << HALF_SHIFT) & HIGH_BYTE_MASK;
    let direct = (sxtb16(word) << HALF_SHIFT) & HIGH_BYTE_MASK;

    (rotated, direct)
}

/// Re-packs the intermediate pairs for a little-endian target.
///
/// The word was loaded with lane 0 at byte 0, so `direct` holds lanes 0 and 2
/// and `rotated` holds lanes 1 and 3. Each output word keeps its first lane
/// in the low half.
#[inline(always)]
pub const fn pack_little_endian(rotated: u32, direct: u32) -> [u32; 2] {
    let out1 = pkhbt::<16>(direct, rotated);
    let out2 = pkhtb::<16>(rotated, direct);

    [out1, out2]
}

/// Re-packs the intermediate pairs for a big-endian target.
///
/// The word was loaded with lane 0 at byte 3, so `rotated` holds lanes 0 and
/// 2 and `direct` holds lanes 1 and 3. Each output word keeps its first lane
/// in the high half.
#[inline(always)]
pub const fn pack_big_endian(rotated: u32, direct: u32) -> [u32; 2] {
    let out1 = pkhtb::<16>(rotated, direct);
    let out2 = pkhbt::<16>(direct, rotated);

    [out1, out2]
}
