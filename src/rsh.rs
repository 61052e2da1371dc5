//! The Reed-Solomon-Hadamard one-bit extractor.

use fixedbitset::FixedBitSet;

use crate::{
    gf2poly::{GF2Poly, PolyBits},
    Error,
};

// ======================================================================
// RshExtractor - PUBLIC

/// One-bit extractor over GF(2^l): a Reed-Solomon outer layer composed
/// with a Hadamard inner layer.
///
/// The `2l`-bit seed splits into halves `alpha` and `beta`. The input
/// is cut into `s = ceil(n / l)` chunks of `l` bits which become the
/// coefficients of a polynomial over GF(2^l), highest degree first;
/// the polynomial is evaluated at `alpha` and the output bit is the
/// inner product of the evaluation with `beta`.
pub struct RshExtractor {
    n: usize,
    l: usize,
    /// Number of Reed-Solomon coefficient chunks, `ceil(n / l)`.
    s: usize,
    field: GF2Poly,
}

impl RshExtractor {
    /// Creates an extractor for `n`-bit inputs and `2l`-bit seeds.
    ///
    /// `n` must be nonzero; `l` must be a valid [`GF2Poly`] degree.
    pub fn new(n: usize, l: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::UnsupportedSourceLength { n });
        }
        let field = GF2Poly::new(l)?;

        Ok(Self {
            n,
            l,
            s: (n + l - 1) / l,
            field,
        })
    }

    /// Input length in bits.
    pub fn input_len(&self) -> usize {
        self.n
    }

    /// Seed length in bits, `2l`.
    pub fn seed_len(&self) -> usize {
        2 * self.l
    }

    /// Extracts one bit from `input` using the `2l`-bit `seed`.
    ///
    /// `input` may be given either at its nominal length `n` or already
    /// zero-padded to `s * l` bits; in the former case the missing pad
    /// bits are read as zero, leaving the caller's buffer untouched.
    pub fn extract(&self, input: &FixedBitSet, seed: &FixedBitSet) -> Result<bool, Error> {
        if seed.len() != 2 * self.l {
            return Err(Error::DifferentSeedLength {
                expected: 2 * self.l,
                got: seed.len(),
            });
        }
        if input.len() != self.n && input.len() != self.s * self.l {
            return Err(Error::DifferentSourceLength {
                expected: self.n,
                got: input.len(),
            });
        }

        let r = self.reed_solomon_step(input, seed);
        Ok(self.hadamard_step(r, seed))
    }
}

// ======================================================================
// RshExtractor - PRIVATE

impl RshExtractor {
    /// Evaluates the input polynomial at `alpha` (the low `l` seed
    /// bits). Chunk `i` of the input is the coefficient of
    /// `x^(s - 1 - i)`: the first chunk is the highest-degree
    /// coefficient.
    fn reed_solomon_step(&self, input: &FixedBitSet, seed: &FixedBitSet) -> PolyBits {
        let mut coeffs = vec![PolyBits::ZERO; self.s];
        for i in 0..self.s {
            let coeff = &mut coeffs[self.s - 1 - i];
            for j in 0..self.l {
                let bit = i * self.l + j;
                if bit < input.len() && input.contains(bit) {
                    coeff.set_bit(j, true);
                }
            }
        }

        let mut alpha = PolyBits::ZERO;
        for j in 0..self.l {
            if seed.contains(j) {
                alpha.set_bit(j, true);
            }
        }

        self.field.horner_method(&coeffs, alpha)
    }

    /// Inner product of the evaluation with `beta` (the high `l` seed
    /// bits). The evaluation lives in GF(2^l), so its bits at or above
    /// `l` are zero and the product can stop there.
    fn hadamard_step(&self, r: PolyBits, seed: &FixedBitSet) -> bool {
        let mut b = false;
        for i in 0..self.l {
            b ^= r.bit(i) & seed.contains(self.l + i);
        }
        b
    }
}

// ======================================================================
// TESTS
