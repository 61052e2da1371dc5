//! Arithmetic in GF(2^log_t) represented as GF(2)[x] modulo a
//! minimum-weight primitive polynomial.
//!
//! Elements are [`PolyBits`], 256-bit polynomials over GF(2) with the
//! constant term at bit 0. [`GF2Poly`] fixes the field degree and the
//! modulus and provides carry-less multiplication with inline reduction
//! plus Horner evaluation, which is all the weak designs and the
//! Reed-Solomon step need.

use std::fmt;
use std::ops::{BitXor, BitXorAssign};

use crate::Error;

pub mod tables;

// ======================================================================
// CONST - PUBLIC

/// Number of bits in a [`PolyBits`].
pub const POLY_BITS: usize = 256;

const LIMBS: usize = POLY_BITS / 64;

// ======================================================================
// PolyBits - PUBLIC

/// A polynomial over GF(2) of degree below 256, packed into four
/// 64-bit limbs with the constant term at bit 0.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct PolyBits([u64; LIMBS]);

impl PolyBits {
    /// The zero polynomial.
    pub const ZERO: Self = Self([0; LIMBS]);

    /// Polynomial with the low 64 coefficient bits taken from `x`.
    pub fn from_u64(x: u64) -> Self {
        Self([x, 0, 0, 0])
    }

    /// The low 64 coefficient bits as an integer.
    pub fn as_u64(&self) -> u64 {
        self.0[0]
    }

    /// Coefficient of `x^i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 256`.
    #[inline(always)]
    pub fn bit(&self, i: usize) -> bool {
        (self.0[i / 64] >> (i % 64)) & 1 != 0
    }

    /// Sets the coefficient of `x^i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 256`.
    #[inline(always)]
    pub fn set_bit(&mut self, i: usize, value: bool) {
        let mask = 1u64 << (i % 64);
        if value {
            self.0[i / 64] |= mask;
        } else {
            self.0[i / 64] &= !mask;
        }
    }

    /// Multiplication by `x`, i.e. left shift by one bit.
    /// The coefficient of `x^255` is shifted out.
    #[inline(always)]
    pub fn shl1(self) -> Self {
        let limbs = self.0;
        Self([
            limbs[0] << 1,
            (limbs[1] << 1) | (limbs[0] >> 63),
            (limbs[2] << 1) | (limbs[1] >> 63),
            (limbs[3] << 1) | (limbs[2] >> 63),
        ])
    }

    /// `true` if no coefficient is set.
    pub fn is_zero(&self) -> bool {
        self.0 == [0; LIMBS]
    }
}

// ======================================================================
// PolyBits - IMPL BitXor / BitXorAssign

impl BitXor for PolyBits {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, other: Self) -> Self {
        let mut limbs = self.0;
        for (limb, other) in limbs.iter_mut().zip(other.0) {
            *limb ^= other;
        }
        Self(limbs)
    }
}

impl BitXorAssign for PolyBits {
    #[inline(always)]
    fn bitxor_assign(&mut self, other: Self) {
        for (limb, other) in self.0.iter_mut().zip(other.0) {
            *limb ^= other;
        }
    }
}

// ======================================================================
// PolyBits - IMPL Debug

impl fmt::Debug for PolyBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolyBits({:016x}_{:016x}_{:016x}_{:016x})",
            self.0[3], self.0[2], self.0[1], self.0[0]
        )
    }
}

// ======================================================================
// GF2Poly - PUBLIC

/// The field GF(2^log_t) as GF(2)[x] modulo the tabulated
/// minimum-weight primitive polynomial of degree `log_t`.
pub struct GF2Poly {
    log_t: usize,
    irred_poly: PolyBits,
}

impl GF2Poly {
    /// Creates the field of degree `log_t`.
    ///
    /// Returns [`Error::UnsupportedFieldDegree`] unless
    /// `1 <= log_t <= 255`.
    pub fn new(log_t: usize) -> Result<Self, Error> {
        if log_t == 0 || log_t >= POLY_BITS {
            return Err(Error::UnsupportedFieldDegree { log_t });
        }

        let irred_poly = tables::initialize_primitive_polys()[log_t];

        Ok(Self { log_t, irred_poly })
    }

    /// Field degree.
    pub fn degree(&self) -> usize {
        self.log_t
    }

    /// The field modulus.
    pub fn modulus(&self) -> PolyBits {
        self.irred_poly
    }

    /// Field multiplication: shift-and-XOR schoolbook product with the
    /// partial product reduced whenever its degree reaches `log_t`, so
    /// every intermediate (and the result) stays below the modulus.
    pub fn poly_mul(&self, x: PolyBits, y: PolyBits) -> PolyBits {
        let mut x = x;
        let mut result = PolyBits::ZERO;
        for i in 0..POLY_BITS {
            if y.bit(i) {
                result ^= x;
            }
            x = x.shl1();
            if x.bit(self.log_t) {
                x ^= self.irred_poly;
            }
        }
        result
    }

    /// Field addition, i.e. XOR.
    pub fn poly_add(x: PolyBits, y: PolyBits) -> PolyBits {
        x ^ y
    }

    /// Evaluates the polynomial with the given coefficients
    /// (`coeffs[i]` multiplying `x^i`) at the field element `x`,
    /// using one multiplication per coefficient.
    pub fn horner_method(&self, coeffs: &[PolyBits], x: PolyBits) -> PolyBits {
        let mut result = PolyBits::ZERO;
        for &coeff in coeffs.iter().rev() {
            result = self.poly_mul(result, x);
            result = Self::poly_add(result, coeff);
        }
        result
    }
}

// ======================================================================
// TESTS
