use crate::error::{Result, SpinError};
use crate::opstr::{parse_opstr, OpTerm};
use crate::spin::Spin;
use linalg::{DenseOperator, C64};

/// How spin-1/2 letters map to matrices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Convention {
    /// Spin operators `S^a`.
    #[default]
    Spin,
    /// Pauli matrices: `z, x, y → 2·S^a`, `± → S±`. Spin 1/2 only.
    Pauli,
}

/// `sites` copies of one spin; site 0 is the slowest kron factor.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinBasis {
    sites: usize,
    spin: Spin,
    convention: Convention,
    dim: usize,
}

impl SpinBasis {
    pub fn new(sites: usize, spin: Spin) -> Result<Self> {
        if sites == 0 {
            return Err(SpinError::NoSites);
        }
        let dim = u32::try_from(sites)
            .ok()
            .and_then(|n| spin.local_dim().checked_pow(n))
            .ok_or(SpinError::BasisTooLarge { sites })?;
        Ok(Self {
            sites,
            spin,
            convention: Convention::Spin,
            dim,
        })
    }

    pub fn with_convention(mut self, convention: Convention) -> Result<Self> {
        if convention == Convention::Pauli && self.spin != Spin::HALF {
            return Err(SpinError::PauliSpin(self.spin.to_string()));
        }
        self.convention = convention;
        Ok(self)
    }

    pub fn sites(&self) -> usize {
        self.sites
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    fn letter(&self, c: char) -> DenseOperator {
        let s = self.spin;
        let pauli = self.convention == Convention::Pauli;
        let two = C64::new(2.0, 0.0);
        match c {
            'z' if pauli => s.sz().scale(two),
            'x' if pauli => s.sx().scale(two),
            'y' if pauli => s.sy().scale(two),
            'z' => s.sz(),
            'x' => s.sx(),
            'y' => s.sy(),
            '+' => s.s_plus(),
            '-' => s.s_minus(),
            _ => DenseOperator::identity(s.local_dim()),
        }
    }

    /// Product of single-site letters, applied in written order when several
    /// letters share a site.
    pub fn product(&self, letters: &[char], sites: &[usize]) -> Result<DenseOperator> {
        let d = self.spin.local_dim();
        let mut factors = vec![DenseOperator::identity(d); self.sites];

        for (&c, &site) in letters.iter().zip(sites.iter()) {
            if site >= self.sites {
                return Err(SpinError::SiteOutOfRange {
                    site,
                    sites: self.sites,
                });
            }
            factors[site] = factors[site].matmul(&self.letter(c));
        }

        let mut out = factors[0].clone();
        for f in &factors[1..] {
            out = out.kron(f);
        }
        Ok(out)
    }
}

/// Composite basis `left ⊗ right` of the two coupled subsystems.
#[derive(Clone, Debug, PartialEq)]
pub struct TensorBasis {
    left: SpinBasis,
    right: SpinBasis,
    dim: usize,
}

impl TensorBasis {
    /// Fails when the product dimension, or the entry count of a dense
    /// operator over it, does not fit in `usize`.
    pub fn new(left: SpinBasis, right: SpinBasis) -> Result<Self> {
        let sites = left.sites + right.sites;
        let dim = left
            .dim
            .checked_mul(right.dim)
            .filter(|d| d.checked_mul(*d).is_some())
            .ok_or(SpinError::BasisTooLarge { sites })?;
        Ok(Self { left, right, dim })
    }

    pub fn left(&self) -> &SpinBasis {
        &self.left
    }

    pub fn right(&self) -> &SpinBasis {
        &self.right
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Sums `coeff · left ⊗ right` over every term and coupling.
    pub fn build(&self, terms: &[OpTerm]) -> Result<DenseOperator> {
        let mut out = DenseOperator::zeros(self.dim());

        for term in terms {
            let (left, right) = parse_opstr(&term.opstr)?;
            for coupling in &term.couplings {
                let expected = left.len() + right.len();
                if coupling.sites.len() != expected {
                    return Err(SpinError::OpString {
                        opstr: term.opstr.clone(),
                        reason: format!(
                            "expected {} site indices, got {}",
                            expected,
                            coupling.sites.len()
                        ),
                    });
                }
                let (lsites, rsites) = coupling.sites.split_at(left.len());
                let lop = self.left.product(&left, lsites)?;
                let rop = self.right.product(&right, rsites)?;
                out = out.add(&lop.kron(&rop).scale(coupling.coeff));
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opstr::Coupling;

    #[test]
    fn dimensions() {
        let a = SpinBasis::new(2, Spin::HALF).unwrap();
        let b = SpinBasis::new(1, Spin::ONE).unwrap();
        assert_eq!(a.dim(), 4);
        assert_eq!(TensorBasis::new(a, b).unwrap().dim(), 12);
        assert!(SpinBasis::new(0, Spin::HALF).is_err());
    }

    #[test]
    fn oversized_bases_are_rejected() {
        assert_eq!(
            SpinBasis::new(70, Spin::HALF).unwrap_err(),
            SpinError::BasisTooLarge { sites: 70 }
        );
        assert!(SpinBasis::new(usize::MAX, Spin::HALF).is_err());

        // Each half fits, the dense operator over the product does not.
        let half = SpinBasis::new(20, Spin::HALF).unwrap();
        assert_eq!(half.dim(), 1 << 20);
        assert_eq!(
            TensorBasis::new(half.clone(), half).unwrap_err(),
            SpinError::BasisTooLarge { sites: 40 }
        );
    }

    #[test]
    fn pauli_only_for_spin_half() {
        let half = SpinBasis::new(1, Spin::HALF).unwrap();
        assert!(half.with_convention(Convention::Pauli).is_ok());
        let one = SpinBasis::new(1, Spin::ONE).unwrap();
        assert!(one.with_convention(Convention::Pauli).is_err());
    }

    #[test]
    fn site_index_checked() {
        let b = SpinBasis::new(1, Spin::HALF).unwrap();
        let t = TensorBasis::new(b.clone(), b).unwrap();
        let err = t
            .build(&[OpTerm::single("z|", C64::new(1.0, 0.0), vec![1])])
            .unwrap_err();
        assert_eq!(err, SpinError::SiteOutOfRange { site: 1, sites: 1 });

        let err = t
            .build(&[OpTerm::new("z|z", vec![Coupling::new(C64::new(1.0, 0.0), vec![0])])])
            .unwrap_err();
        assert!(matches!(err, SpinError::OpString { .. }));
    }

    #[test]
    fn zz_coupling_is_diagonal_product() {
        let b = SpinBasis::new(1, Spin::HALF).unwrap();
        let t = TensorBasis::new(b.clone(), b).unwrap();
        let op = t
            .build(&[OpTerm::single("z|z", C64::new(4.0, 0.0), vec![0, 0])])
            .unwrap();
        let diag: Vec<f64> = (0..4).map(|i| op.get(i, i).re).collect();
        assert_eq!(diag, vec![1.0, -1.0, -1.0, 1.0]);
    }
}
