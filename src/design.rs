//! Weak designs: families of subsets that select per-output-bit
//! sub-seeds for the Trevisan extractor.
//!
//! A weak design is a family of `m` size-`t` subsets of `0 .. d` whose
//! pairwise intersections grow slowly; extracting output bit `i` reads
//! the seed only at the positions of subset `i`, which is what lets a
//! short seed serve every output bit.
//!
//! # Designs
//!
//! - [`HartmanRaz`]
//!     - Polynomial evaluation over GF(2^log_t); `d = t^2`.
//! - [`Block`]
//!     - Layers one [`HartmanRaz`] design over disjoint `t^2` ranges;
//!       `d = (layers + 1) * t^2`. This is the design the Trevisan
//!       construction uses, because its overlap constant is 1.

use crate::Error;

pub use self::{block::Block, hartman_raz::HartmanRaz};

mod block;
mod hartman_raz;

// ======================================================================
// WeakDesign - PUBLIC

/// A family of `m` size-`t` subsets of `0 .. d` with slowly growing
/// pairwise intersections.
pub trait WeakDesign {
    /// Number of subsets in the family, i.e. the number of output bits
    /// the design can serve.
    fn num_subsets(&self) -> usize;

    /// Size `t` of every subset.
    fn subset_size(&self) -> usize;

    /// Size `d` of the ground set, i.e. the seed length in bits.
    fn seed_bits(&self) -> usize;

    /// The `i`'th subset, as `t` distinct indices into `0 .. d`.
    ///
    /// Returns [`Error::InvalidSubsetIndex`] if `i` is not below
    /// [`num_subsets`].
    ///
    /// [`num_subsets`]: WeakDesign::num_subsets
    fn subset(&self, i: usize) -> Result<Vec<usize>, Error>;
}
