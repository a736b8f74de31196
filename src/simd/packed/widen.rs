use crate::simd::packed::{PackOrder, Q7x4, LANE_COUNT};
use crate::simd::scalar::ScalarKernel;
use crate::simd::traits::Kernel;
use crate::types::{Q15, Q7};

#[inline(always)]
fn q7_to_q15_block<O: PackOrder>(a: &[Q7], c: &mut [Q15]) {
    // Assumes lengths are LANE_COUNT
    let [out1, out2] = Q7x4::load::<O>(a).widen::<O>();

    let [c0, c1] = O::store_halves(out1);
    let [c2, c3] = O::store_halves(out2);

    c[0] = c0;
    c[1] = c1;
    c[2] = c2;
    c[3] = c3;
}

pub(crate) fn q7_to_q15<O: PackOrder>(a: &[Q7], c: &mut [Q15]) {
    let c = &mut c[..a.len()];

    let mut a_blocks = a.chunks_exact(LANE_COUNT);
    let mut c_blocks = c.chunks_exact_mut(LANE_COUNT);

    for (a_block, c_block) in (&mut a_blocks).zip(&mut c_blocks) {
        q7_to_q15_block::<O>(a_block, c_block);
    }

    ScalarKernel::q7_to_q15(a_blocks.remainder(), c_blocks.into_remainder());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::packed::{BigEndian, LittleEndian};
    use crate::simd::scalar::q7_to_q15_sample;

    #[test]
    fn test_concrete_both_orders() {
        let a = [1i8, -1, 127, -128];
        let expected = [256i16, -256, 32512, -32768];

        let mut c = [0i16; 4];
        q7_to_q15::<LittleEndian>(&a, &mut c);
        assert_eq!(c, expected);

        let mut c = [0i16; 4];
        q7_to_q15::<BigEndian>(&a, &mut c);
        assert_eq!(c, expected);
    }

    #[test]
    fn test_full_range_through_blocks() {
        // all 256 values, 64 full blocks
        let mut a = [0i8; 256];
        for (slot, v) in a.iter_mut().zip(Q7::MIN..=Q7::MAX) {
            *slot = v;
        }
        let expected = a.map(q7_to_q15_sample);

        let mut c = [0i16; 256];
        q7_to_q15::<LittleEndian>(&a, &mut c);
        assert_eq!(c, expected);

        let mut c = [0i16; 256];
        q7_to_q15::<BigEndian>(&a, &mut c);
        assert_eq!(c, expected);
    }

    #[test]
    fn test_tail_lengths() {
        let a = [-128i8, 127, -1, 1, 0, -64, 64, 3, -3];
        for len in 0..=a.len() {
            let mut c = [0x1234i16; 11];
            q7_to_q15::<LittleEndian>(&a[..len], &mut c);

            for i in 0..len {
                assert_eq!(c[i], q7_to_q15_sample(a[i]), "len {len}, index {i}");
            }
            assert!(c[len..].iter().all(|&x| x == 0x1234), "len {len} wrote past the source");
        }
    }
}
