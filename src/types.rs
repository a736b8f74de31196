//! Element types shared by the kernels.
//!
//! Fixed-point values are plain signed integers read with an implicit scale:
//! a `Q7` holds 7 fractional bits, a `Q15` holds 15. Both cover `[-1, 1)`.

/// 8-bit fixed-point value, 1 sign bit and 7 fractional bits.
pub type Q7 = i8;

/// 16-bit fixed-point value, 1 sign bit and 15 fractional bits.
pub type Q15 = i16;

/// 32-bit floating-point sample.
pub type Float32 = f32;

/// Left shift applied when a sign-extended `Q7` is rescaled to `Q15`.
pub const Q7_TO_Q15_SHIFT: u32 = Q15::BITS - Q7::BITS;
