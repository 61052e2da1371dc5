use fixedbitset::FixedBitSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    gf2poly::PolyBits,
    ntt::{big, small},
};

// ======================================================================
// FUNCTIONS - CRATE

pub(crate) fn random_bits(len: usize, seed: u8) -> FixedBitSet {
    let mut rng = ChaCha8Rng::from_seed([seed; 32]);
    let mut bits = FixedBitSet::with_capacity(len);
    for i in 0..len {
        bits.set(i, rng.gen());
    }
    bits
}

pub(crate) fn random_small_vec(len: usize, seed: u8) -> Vec<u32> {
    let mut rng = ChaCha8Rng::from_seed([seed; 32]);
    (0..len).map(|_| rng.gen_range(0..small::P)).collect()
}

pub(crate) fn random_big_vec(len: usize, seed: u8) -> Vec<u64> {
    let mut rng = ChaCha8Rng::from_seed([seed; 32]);
    (0..len).map(|_| rng.gen_range(0..big::P)).collect()
}

pub(crate) fn random_poly(degree: usize, seed: u8) -> PolyBits {
    let mut rng = ChaCha8Rng::from_seed([seed; 32]);
    let mut poly = PolyBits::ZERO;
    for i in 0..degree {
        poly.set_bit(i, rng.gen());
    }
    poly
}
