//! The Trevisan extractor: a weak design selecting per-output-bit
//! sub-seeds for the Reed-Solomon-Hadamard one-bit extractor.

use fixedbitset::FixedBitSet;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use crate::{
    design::{Block, WeakDesign},
    rsh::RshExtractor,
    Error,
};

// ======================================================================
// TrevisanConfig - PUBLIC

/// Extractor parameters derived from the source length `n`, the
/// min-entropy bound `k` and the total error budget `max_eps`.
///
/// Immutable once constructed; [`Trevisan::new`] consumes it by
/// reference.
#[derive(Clone, Debug)]
pub struct TrevisanConfig {
    n: usize,
    m: usize,
    l: usize,
    log_t: usize,
    t: usize,
    log_eps: f64,
}

impl TrevisanConfig {
    /// Selects parameters for an `n`-bit source with at least `k` bits
    /// of min-entropy and total extraction error at most `max_eps`.
    ///
    /// Picks the largest output length `m` whose accumulated per-bit
    /// error stays within `max_eps`, then sizes the one-bit extractor
    /// seed (`2l`) and the weak design subset size (`t = 2^log_t`,
    /// the smallest power of two at or above `2l`) to match.
    ///
    /// Returns [`Error::EntropyTooLow`] when even a single output bit
    /// would exceed the error budget.
    pub fn new(n: usize, k: usize, max_eps: f64) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::UnsupportedSourceLength { n });
        }
        if !(max_eps > 0.0 && max_eps < 1.0) {
            return Err(Error::EpsilonOutOfRange { max_eps });
        }

        // largest m with log2(m) + log2(per-bit eps) <= log2(max_eps),
        // where log2(per-bit eps) = (m * R - k + 6) / 4; the left side
        // is increasing in m, so step-halving finds the boundary
        let r = Block::R;
        let log_max_eps = max_eps.log2();
        let mut m = 0;
        let mut log_eps = 0.0;
        let mut step = 1usize << 30;
        while step > 0 {
            let try_m = m + step;
            let try_log_eps = (try_m as f64 * r - k as f64 + 6.0) / 4.0;
            if (try_m as f64).log2() + try_log_eps <= log_max_eps {
                m = try_m;
                log_eps = try_log_eps;
            }
            step >>= 1;
        }
        if m == 0 {
            return Err(Error::EntropyTooLow { k, max_eps });
        }

        // log_eps < log2(max_eps) < 0, so l >= 3 always holds here
        let l = ((n as f64).log2() + 2.0 * (1.0 - log_eps)).ceil() as usize;
        let log_t = ((2 * l) as f64).log2().ceil() as usize;
        let t = 1usize << log_t;

        debug!(n, k, m, l, log_t, log_eps, "selected extractor parameters");

        Ok(Self {
            n,
            m,
            l,
            log_t,
            t,
            log_eps,
        })
    }

    /// Source length in bits.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Output length in bits.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Half the one-bit extractor seed length.
    pub fn l(&self) -> usize {
        self.l
    }

    /// Log2 of the weak design subset size.
    pub fn log_t(&self) -> usize {
        self.log_t
    }

    /// Weak design subset size.
    pub fn t(&self) -> usize {
        self.t
    }

    /// Log2 of the per-bit extraction error.
    pub fn log_eps(&self) -> f64 {
        self.log_eps
    }
}

// ======================================================================
// Source - PRIVATE

struct Source {
    input: FixedBitSet,
    seed: FixedBitSet,
}

// ======================================================================
// Trevisan - PUBLIC

/// The Trevisan extractor.
///
/// Output bit `i` reads the seed at the positions of subset `i` of a
/// [`Block`] weak design and feeds those `2l` bits together with the
/// cached source into an [`RshExtractor`].
///
/// A source must be loaded with [`load_source`] before extraction.
/// Loading takes `&mut self` while extraction takes `&self`, so a
/// loaded extractor can serve concurrent [`extract_bit`] calls and a
/// load can never race an extraction.
///
/// [`load_source`]: Trevisan::load_source
/// [`extract_bit`]: Trevisan::extract_bit
pub struct Trevisan {
    wd: Block,
    ext: RshExtractor,
    n: usize,
    m: usize,
    l: usize,
    source: Option<Source>,
}

impl Trevisan {
    /// Creates the extractor for the given configuration.
    pub fn new(config: &TrevisanConfig) -> Result<Self, Error> {
        Ok(Self {
            wd: Block::new(config.m, config.log_t)?,
            ext: RshExtractor::new(config.n, config.l)?,
            n: config.n,
            m: config.m,
            l: config.l,
            source: None,
        })
    }

    /// Source length in bits.
    pub fn input_len(&self) -> usize {
        self.n
    }

    /// Output length in bits.
    pub fn output_len(&self) -> usize {
        self.m
    }

    /// Seed length in bits the caller must supply to [`load_source`].
    ///
    /// [`load_source`]: Trevisan::load_source
    pub fn seed_length(&self) -> usize {
        self.wd.seed_bits()
    }

    /// `true` once a source has been loaded.
    pub fn source_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// Caches the weak source and the uniform seed for extraction.
    ///
    /// `input` must be exactly [`input_len`] bits and `seed` exactly
    /// [`seed_length`] bits.
    ///
    /// [`input_len`]: Trevisan::input_len
    /// [`seed_length`]: Trevisan::seed_length
    pub fn load_source(&mut self, input: &FixedBitSet, seed: &FixedBitSet) -> Result<(), Error> {
        if input.len() != self.n {
            return Err(Error::DifferentSourceLength {
                expected: self.n,
                got: input.len(),
            });
        }
        if seed.len() != self.seed_length() {
            return Err(Error::DifferentSeedLength {
                expected: self.seed_length(),
                got: seed.len(),
            });
        }

        self.source = Some(Source {
            input: input.clone(),
            seed: seed.clone(),
        });
        Ok(())
    }

    /// Extracts output bit `i`.
    ///
    /// The design subset has `t >= 2l` elements; the sub-seed takes the
    /// first `2l` of them.
    pub fn extract_bit(&self, i: usize) -> Result<bool, Error> {
        let source = self.source.as_ref().ok_or(Error::SourceNotLoaded)?;

        let positions = self.wd.subset(i)?;

        let mut sub_seed = FixedBitSet::with_capacity(2 * self.l);
        for (j, &position) in positions.iter().take(2 * self.l).enumerate() {
            sub_seed.set(j, source.seed.contains(position));
        }

        self.ext.extract(&source.input, &sub_seed)
    }

    /// Extracts all `m` output bits, in order.
    ///
    /// Bits are independent, so they are computed on parallel workers;
    /// the collected output preserves bit order and any worker failure
    /// propagates.
    pub fn extract(&self) -> Result<FixedBitSet, Error> {
        let bits = (0..self.m)
            .into_par_iter()
            .map(|i| self.extract_bit(i))
            .collect::<Result<Vec<bool>, Error>>()?;

        let mut output = FixedBitSet::with_capacity(self.m);
        for (i, bit) in bits.into_iter().enumerate() {
            output.set(i, bit);
        }
        Ok(output)
    }
}

// ======================================================================
// TESTS
