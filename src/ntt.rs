//! Number-theoretic transforms over two prime fields.
//!
//! These are the convolution cores used by linear extractors (Toeplitz,
//! dot-product, circulant hashing): a cyclic convolution of length
//! `2^l` costs `O(l * 2^l)` field operations instead of `O(4^l)`.
//!
//! # Engines
//!
//! - [`Ntt`]
//!     - 32-bit coefficients over the prime `3 * 2^30 + 1`,
//!       lengths up to `2^30`.
//!     - Also provides the GF(2) reduce/squaring pair
//!       ([`Ntt::convolve_and_reduce`], [`Ntt::raz_iteration`]) used by
//!       iterated squaring modulo `x^r + x^s + 1`.
//! - [`BigNtt`]
//!     - 64-bit coefficients over the prime `9 * 2^42 + 1`,
//!       lengths up to `2^40`, with a floating-point assisted
//!       modular multiply.
//!
//! Both engines precompute their root and bit-reversal tables at
//! construction and are immutable afterwards, so a shared reference can
//! be used from any number of threads.
//!
//! The per-field modular arithmetic is exposed as free functions on
//! [`small`] and [`big`] for callers that prepare or post-process
//! coefficient vectors themselves.

pub use self::{big::BigNtt, small::Ntt};

pub mod big;
pub mod small;
