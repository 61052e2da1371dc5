use crate::{
    design::WeakDesign,
    gf2poly::{GF2Poly, PolyBits},
    Error,
};

// ======================================================================
// HartmanRaz - PUBLIC

/// The weak design of Hartman and Raz.
///
/// Subset `i` encodes the base-`t` digits of `i` as the coefficients of
/// a polynomial over GF(2^log_t) and collects the graph of that
/// polynomial: the pairs `(a, poly(a))` for every field element `a`,
/// packed as `a * t + poly(a)` into the ground set `0 .. t^2`.
pub struct HartmanRaz {
    m: usize,
    log_t: usize,
    t: usize,
    d: usize,
    /// Number of base-t digits needed to encode any index below `m`.
    c: usize,
    mask: usize,
    field: GF2Poly,
}

impl HartmanRaz {
    /// Overlap constant of this design, `2e`.
    pub const R: f64 = 5.43656365691809;

    /// Creates the design with `m` subsets of size `t = 2^log_t`.
    ///
    /// `m` must be nonzero and `log_t` must be in `1 ..= 31` so that
    /// the ground set size `t^2` fits `usize`.
    pub fn new(m: usize, log_t: usize) -> Result<Self, Error> {
        if m == 0 {
            return Err(Error::UnsupportedDesignSize { m });
        }
        if log_t == 0 || log_t > 31 {
            return Err(Error::UnsupportedFieldDegree { log_t });
        }

        let field = GF2Poly::new(log_t)?;

        let mut log_m = 0;
        while (1usize << log_m) < m {
            log_m += 1;
        }

        let t = 1usize << log_t;

        Ok(Self {
            m,
            log_t,
            t,
            d: t * t,
            c: (log_m + log_t - 1) / log_t,
            mask: t - 1,
            field,
        })
    }
}

// ======================================================================
// HartmanRaz - IMPL WeakDesign

impl WeakDesign for HartmanRaz {
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

        let mut coeffs = Vec::with_capacity(self.c);
        for j in 0..self.c {
            coeffs.push(PolyBits::from_u64(
                ((i >> (j * self.log_t)) & self.mask) as u64,
            ));
        }

        let mut subset = Vec::with_capacity(self.t);
        for a in 0..self.t {
            let b = self
                .field
                .horner_method(&coeffs, PolyBits::from_u64(a as u64))
                .as_u64() as usize;
            subset.push((a << self.log_t) | b);
        }
        Ok(subset)
    }
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn new_rejects_invalid_parameters() {
        assert_eq!(
            HartmanRaz::new(0, 2).err(),
            Some(Error::UnsupportedDesignSize { m: 0 })
        );
        assert_eq!(
            HartmanRaz::new(4, 0).err(),
            Some(Error::UnsupportedFieldDegree { log_t: 0 })
        );
        assert_eq!(
            HartmanRaz::new(4, 32).err(),
            Some(Error::UnsupportedFieldDegree { log_t: 32 })
        );
    }

    #[test]
    fn subset_rejects_out_of_range_index() {
        let design = HartmanRaz::new(4, 2).unwrap();
        assert_eq!(
            design.subset(4).err(),
            Some(Error::InvalidSubsetIndex { m: 4, index: 4 })
        );
    }

    #[test]
    fn four_subsets_over_gf4() {
        let design = HartmanRaz::new(4, 2).unwrap();
        assert_eq!(design.subset_size(), 4);
        assert_eq!(design.seed_bits(), 16);
        assert_eq!(design.c, 1);

        // index 0 encodes the zero polynomial: pairs (a, 0)
        assert_eq!(design.subset(0).unwrap(), vec![0, 4, 8, 12]);
        // index 1 encodes the constant polynomial 1: pairs (a, 1)
        assert_eq!(design.subset(1).unwrap(), vec![1, 5, 9, 13]);
    }

    #[test]
    fn subsets_are_in_bounds_and_distinct() {
        for (m, log_t) in [(4, 2), (300, 3), (1000, 4)] {
            let design = HartmanRaz::new(m, log_t).unwrap();
            let t = design.subset_size();
            let d = design.seed_bits();
            for i in (0..m).step_by(17) {
                let subset = design.subset(i).unwrap();
                assert_eq!(subset.len(), t);
                let distinct: HashSet<usize> = subset.iter().copied().collect();
                assert_eq!(distinct.len(), t, "m {} log_t {} i {}", m, log_t, i);
                for &element in &subset {
                    assert!(element < d);
                }
            }
        }
    }

    #[test]
    fn single_subset_design_uses_no_digits() {
        // m = 1 encodes every index with zero digits
        let design = HartmanRaz::new(1, 3).unwrap();
        assert_eq!(design.c, 0);
        assert_eq!(
            design.subset(0).unwrap(),
            (0..8).map(|a| a << 3).collect::<Vec<_>>()
        );
    }
}
