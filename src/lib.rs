//! Seeded randomness extractors.
//!
//! A randomness extractor turns a long, weakly random *source* (any
//! `n`-bit distribution with at least `k` bits of min-entropy) plus a
//! short uniform *seed* into output bits that are within `eps` of
//! uniform. This crate provides the [Trevisan] construction — a
//! [weak design](design) selecting per-output-bit sub-seeds for a
//! [Reed-Solomon-Hadamard](RshExtractor) one-bit extractor — together
//! with the [NTT convolution cores](ntt) that hashing-based extractors
//! (Toeplitz, dot-product, circulant) build on.
//!
//! # Simple usage
//!
//! ```rust
//! use fixedbitset::FixedBitSet;
//!
//! let n = 1000;
//! let entropy = 800;
//! let max_eps = 2f64.powi(-32);
//!
//! // the seed length depends on the extractor parameters
//! let seed_bits = randext::seed_length(n, entropy, max_eps)?;
//!
//! let input = FixedBitSet::with_capacity(n); // your weak source bits
//! let seed = FixedBitSet::with_capacity(seed_bits); // uniform bits
//!
//! let output = randext::extract(entropy, max_eps, &input, &seed)?;
//! assert!(output.len() > 0);
//! # Ok::<(), randext::Error>(())
//! ```
//!
//! # Basic usage
//!
//! [`TrevisanConfig`] picks the parameters once; [`Trevisan`] can then
//! extract single bits or the whole output from a loaded source.
//!
//! ```rust
//! use fixedbitset::FixedBitSet;
//! use randext::{Trevisan, TrevisanConfig};
//!
//! let config = TrevisanConfig::new(1000, 800, 2f64.powi(-32))?;
//! let mut trevisan = Trevisan::new(&config)?;
//!
//! let input = FixedBitSet::with_capacity(1000);
//! let seed = FixedBitSet::with_capacity(trevisan.seed_length());
//! trevisan.load_source(&input, &seed)?;
//!
//! let first = trevisan.extract_bit(0)?;
//! let all = trevisan.extract()?;
//! assert_eq!(all.contains(0), first);
//! # Ok::<(), randext::Error>(())
//! ```
//!
//! # Convolution cores
//!
//! The [`ntt`] module is independent of the Trevisan construction: it
//! computes cyclic convolutions over two prime fields in
//! `O(len * log(len))`, for extractors that hash with Toeplitz or
//! circulant matrices.
//!
//! ```rust
//! use randext::ntt::Ntt;
//!
//! let ntt = Ntt::new(3)?;
//! let x = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let unit = vec![1, 0, 0, 0, 0, 0, 0, 0];
//! assert_eq!(ntt.convolve(&x, &unit)?, x);
//! # Ok::<(), randext::Error>(())
//! ```

#![deny(missing_docs)]

use std::fmt;

use fixedbitset::FixedBitSet;

pub use crate::{
    ntt::{BigNtt, Ntt},
    rsh::RshExtractor,
    trevisan::{Trevisan, TrevisanConfig},
};

#[cfg(test)]
mod test_util;

mod rsh;
mod trevisan;

pub mod design;
pub mod gf2poly;
pub mod ntt;

// ======================================================================
// Error - PUBLIC

/// Represents all possible errors that can occur in this library.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// Given seed has different length than the construction requires.
    DifferentSeedLength {
        /// Required seed length in bits.
        expected: usize,
        /// Length of the given seed in bits.
        got: usize,
    },

    /// Given source has different length than the construction requires.
    DifferentSourceLength {
        /// Required source length in bits.
        expected: usize,
        /// Length of the given source in bits.
        got: usize,
    },

    /// Given coefficient vector has different length than the transform.
    DifferentTransformLength {
        /// The transform length.
        expected: usize,
        /// Length of the given vector.
        got: usize,
    },

    /// No output length satisfies the error budget: even a single
    /// output bit extracted from `k` bits of min-entropy would exceed
    /// `max_eps`.
    EntropyTooLow {
        /// Given min-entropy bound.
        k: usize,
        /// Given total error budget.
        max_eps: f64,
    },

    /// Given error budget is not in the open interval `(0, 1)`.
    EpsilonOutOfRange {
        /// Given error budget.
        max_eps: f64,
    },

    /// Weak design subset index (i.e. output bit index) is out of
    /// range, `index >= m`.
    InvalidSubsetIndex {
        /// Number of subsets in the design.
        m: usize,
        /// Given invalid index.
        index: usize,
    },

    /// [`Trevisan::extract_bit`] or [`Trevisan::extract`] called
    /// before [`Trevisan::load_source`].
    SourceNotLoaded,

    /// Weak design with zero subsets requested.
    UnsupportedDesignSize {
        /// Given number of subsets.
        m: usize,
    },

    /// Field degree out of range for GF(2^log_t) arithmetic
    /// (valid range `1 ..= 255`, or `1 ..= 31` where the squared
    /// degree must index a seed).
    UnsupportedFieldDegree {
        /// Given degree.
        log_t: usize,
    },

    /// Source of zero length requested.
    UnsupportedSourceLength {
        /// Given source length.
        n: usize,
    },

    /// Transform size exponent out of range, `l` not in `1 ..= max_l`.
    UnsupportedTransformSize {
        /// Given exponent.
        l: usize,
        /// Largest exponent this engine supports.
        max_l: usize,
    },
}

// ======================================================================
// Error - IMPL DISPLAY

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DifferentSeedLength { expected, got } => {
                write!(
                    f,
                    "different seed length: expected {} bits, got {} bits",
                    expected, got
                )
            }

            Error::DifferentSourceLength { expected, got } => {
                write!(
                    f,
                    "different source length: expected {} bits, got {} bits",
                    expected, got
                )
            }

            Error::DifferentTransformLength { expected, got } => {
                write!(
                    f,
                    "different transform length: expected {} coefficients, got {}",
                    expected, got
                )
            }

            Error::EntropyTooLow { k, max_eps } => {
                write!(
                    f,
                    "entropy too low: no output satisfies error budget {} with min-entropy {}",
                    max_eps, k
                )
            }

            Error::EpsilonOutOfRange { max_eps } => {
                write!(f, "error budget {} is not within (0, 1)", max_eps)
            }

            Error::InvalidSubsetIndex { m, index } => {
                write!(f, "invalid subset index: {} >= design size {}", index, m)
            }

            Error::SourceNotLoaded => {
                write!(f, "source not loaded: call load_source(input, seed) first")
            }

            Error::UnsupportedDesignSize { m } => {
                write!(f, "unsupported design size: {} subsets", m)
            }

            Error::UnsupportedFieldDegree { log_t } => {
                write!(f, "unsupported field degree: {}", log_t)
            }

            Error::UnsupportedSourceLength { n } => {
                write!(f, "unsupported source length: {} bits", n)
            }

            Error::UnsupportedTransformSize { l, max_l } => {
                write!(
                    f,
                    "unsupported transform size: exponent {} not in 1 ..= {}",
                    l, max_l
                )
            }
        }
    }
}

// ======================================================================
// Error - IMPL ERROR

impl std::error::Error for Error {}

// ======================================================================
// FUNCTIONS - PUBLIC

/// Returns the seed length in bits that [`extract`] requires for an
/// `n`-bit source with min-entropy `k` and error budget `max_eps`.
///
/// # Examples
///
/// ```rust
/// let seed_bits = randext::seed_length(1000, 800, 2f64.powi(-32))?;
/// assert_eq!(seed_bits, 393_216);
/// # Ok::<(), randext::Error>(())
/// ```
pub fn seed_length(n: usize, k: usize, max_eps: f64) -> Result<usize, Error> {
    let config = TrevisanConfig::new(n, k, max_eps)?;
    Ok(Trevisan::new(&config)?.seed_length())
}

/// Extracts in one go using [`Trevisan`], returning the output bits.
///
/// - The source length `n` is taken from `input`.
/// - `seed` must be uniformly random and [`seed_length`] bits long.
/// - The output length is chosen as large as the error budget allows.
///
/// See [simple usage](crate#simple-usage) for an example.
pub fn extract(
    k: usize,
    max_eps: f64,
    input: &FixedBitSet,
    seed: &FixedBitSet,
) -> Result<FixedBitSet, Error> {
    let config = TrevisanConfig::new(input.len(), k, max_eps)?;
    let mut trevisan = Trevisan::new(&config)?;
    trevisan.load_source(input, seed)?;
    trevisan.extract()
}

// ======================================================================
// TESTS
