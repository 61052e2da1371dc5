use tracing::trace;

use crate::{
    design::{HartmanRaz, WeakDesign},
    Error,
};

// ======================================================================
// Block - PUBLIC

/// The recursive block weak design of Mauerer, Portmann and Scholz.
///
/// Splits the `m` subsets into layers whose sizes follow a geometric
/// series, serves every layer from one shared [`HartmanRaz`] design,
/// and offsets layer `j` into its own `t^2` range of the ground set.
/// The layering brings the overlap constant down to [`Block::R`]` = 1`
/// at the cost of a `(layers + 1)`-fold longer seed.
pub struct Block {
    m: usize,
    t: usize,
    d: usize,
    /// Layer count before the tail layer.
    layers: usize,
    /// Prefix sums of the per-layer subset counts, starting at 0;
    /// `sum_ms[j] <= i < sum_ms[j + 1]` places subset `i` in layer `j`.
    sum_ms: Vec<i64>,
    base: HartmanRaz,
}

impl Block {
    /// Overlap constant of this design.
    pub const R: f64 = 1.0;

    /// Creates the design with `m` subsets of size `t = 2^log_t`.
    ///
    /// `m` must be nonzero and `log_t` must be in `1 ..= 31`.
    pub fn new(m: usize, log_t: usize) -> Result<Self, Error> {
        if m == 0 {
            return Err(Error::UnsupportedDesignSize { m });
        }

        if log_t == 0 || log_t > 31 {
            return Err(Error::UnsupportedFieldDegree { log_t });
        }

        let r = HartmanRaz::R;
        let t = 1usize << log_t;

        let base_m = ((m as f64 / r - 1.0).ceil() as i64).max(t as i64) as usize;
        let base = HartmanRaz::new(base_m, log_t)?;

        let layers = ((((m as f64 - r).ln() - (t as f64 - r).ln())
            / (r.ln() - (r - 1.0).ln()))
        .ceil() as i64)
            .max(1) as usize;

        // layer sizes: ceil of the partial sums of the geometric series
        // n_i = (1 - 1/r)^i * (m/r - 1), then one tail layer for the rest
        let mut ms = Vec::with_capacity(layers + 1);
        let mut sum_ms = vec![0i64];
        let mut acc = 0.0;
        let mut total = 0i64;
        for i in 0..layers {
            acc += (1.0 - 1.0 / r).powi(i as i32) * (m as f64 / r - 1.0);
            let m_i = acc.ceil() as i64 - total;
            ms.push(m_i);
            total += m_i;
            sum_ms.push(total);
        }
        let tail = m as i64 - total;
        ms.push(tail);
        sum_ms.push(total + tail);

        let d = (layers + 1) * t * t;

        trace!(m, log_t, layers, d, ?ms, "block design layer sizes");

        Ok(Self {
            m,
            t,
            d,
            layers,
            sum_ms,
            base,
        })
    }
}

// ======================================================================
// Block - IMPL WeakDesign

impl WeakDesign for Block {
    fn num_subsets(&self) -> usize {
        self.m
    }

    fn subset_size(&self) -> usize {
        self.t
    }

    fn seed_bits(&self) -> usize {
        self.d
    }

    fn subset(&self, i: usize) -> Result<Vec<usize>, Error> {
        if i >= self.m {
            return Err(Error::InvalidSubsetIndex {
                m: self.m,
                index: i,
            });
        }

        // step-halving search for the layer: largest ind with
        // sum_ms[ind] <= i
        let mut ind = 0;
        let mut step = 1usize << 30;
        while step > 0 {
            if ind + step <= self.layers && self.sum_ms[ind + step] <= i as i64 {
                ind += step;
            }
            step >>= 1;
        }

        let base_i = i - self.sum_ms[ind] as usize;
        let base_increment = ind * self.t * self.t;

        let mut subset = self.base.subset(base_i)?;
        for element in subset.iter_mut() {
            *element += base_increment;
        }
        Ok(subset)
    }
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_parameters() {
        assert_eq!(
            Block::new(0, 4).err(),
            Some(Error::UnsupportedDesignSize { m: 0 })
        );
        assert_eq!(
            Block::new(100, 0).err(),
            Some(Error::UnsupportedFieldDegree { log_t: 0 })
        );
        assert_eq!(
            Block::new(100, 32).err(),
            Some(Error::UnsupportedFieldDegree { log_t: 32 })
        );
    }

    #[test]
    fn layer_sizes_partition_the_design() {
        let design = Block::new(100, 4).unwrap();

        assert_eq!(*design.sum_ms.first().unwrap(), 0);
        assert_eq!(*design.sum_ms.last().unwrap(), 100);
        assert_eq!(design.sum_ms.len(), design.layers + 2);
        // layer sizes are the prefix sum deltas and never negative
        for pair in design.sum_ms.windows(2) {
            assert!(pair[0] <= pair[1]);
        }

        assert_eq!(design.seed_bits(), (design.layers + 1) * 16 * 16);
    }

    #[test]
    fn subsets_stay_inside_their_layer_range() {
        let design = Block::new(100, 4).unwrap();
        let t2 = design.subset_size() * design.subset_size();

        for i in 0..100 {
            // reference layer lookup: unique j with
            // sum_ms[j] <= i < sum_ms[j + 1]
            let layer = (0..=design.layers)
                .find(|&j| {
                    design.sum_ms[j] <= i as i64 && (i as i64) < design.sum_ms[j + 1]
                })
                .unwrap();

            let subset = design.subset(i).unwrap();
            assert_eq!(subset.len(), design.subset_size());
            for &element in &subset {
                assert!(
                    element >= layer * t2 && element < (layer + 1) * t2,
                    "i {} layer {} element {}",
                    i,
                    layer,
                    element
                );
            }
        }
    }

    #[test]
    fn small_design_puts_everything_in_the_tail_layer() {
        // with m below the overlap constant the geometric series is
        // empty and the tail layer carries all subsets
        let design = Block::new(4, 2).unwrap();
        assert_eq!(design.layers, 1);
        assert_eq!(design.sum_ms, vec![0, 0, 4]);
        assert_eq!(design.subset(0).unwrap(), vec![16, 20, 24, 28]);
    }

    #[test]
    fn subset_rejects_out_of_range_index() {
        let design = Block::new(10, 3).unwrap();
        assert_eq!(
            design.subset(10).err(),
            Some(Error::InvalidSubsetIndex { m: 10, index: 10 })
        );
    }
}
