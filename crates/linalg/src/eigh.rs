use crate::dense::DenseOperator;
use crate::state::StateVector;
use crate::C64;
use faer::Side;

/// Eigendecomposition `H = U·diag(E)·U†` of a Hermitian operator.
#[derive(Clone, Debug)]
pub struct Eigh {
    pub values: Vec<f64>,
    /// Eigenvectors stored as columns.
    pub vectors: DenseOperator,
}

impl Eigh {
    pub fn new(h: &DenseOperator) -> Self {
        let n = h.dim();
        let evd = h.mat.selfadjoint_eigendecomposition(Side::Lower);
        let s = evd.s().column_vector();
        let u = evd.u();

        let mut values = Vec::with_capacity(n);
        for k in 0..n {
            values.push(s.read(k).re);
        }

        let mut vectors = DenseOperator::zeros(n);
        for i in 0..n {
            for k in 0..n {
                vectors.set(i, k, u.read(i, k));
            }
        }

        Self { values, vectors }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// Index of the lowest eigenvalue; the first one wins on degeneracy.
    pub fn ground_index(&self) -> usize {
        let mut best = 0;
        for (k, &e) in self.values.iter().enumerate() {
            if e < self.values[best] {
                best = k;
            }
        }
        best
    }

    pub fn eigenvector(&self, k: usize) -> StateVector {
        let n = self.dim();
        let mut out = StateVector::zeros(n);
        for i in 0..n {
            out.amps[i] = self.vectors.get(i, k);
        }
        out
    }

    pub fn ground_state(&self) -> StateVector {
        self.eigenvector(self.ground_index())
    }

    /// Coefficients `c_k = ⟨k|ψ⟩` in the eigenbasis.
    pub fn project(&self, psi: &StateVector) -> Vec<C64> {
        assert!(psi.dim() == self.dim(), "project: dimension mismatch");
        let n = self.dim();
        let mut coeffs = vec![C64::new(0.0, 0.0); n];
        for k in 0..n {
            let mut acc = C64::new(0.0, 0.0);
            for i in 0..n {
                acc += self.vectors.get(i, k).conj() * psi.amps[i];
            }
            coeffs[k] = acc;
        }
        coeffs
    }

    /// `Σ_k c_k·e^{-i E_k dt}·|k⟩`
    pub fn propagate(&self, coeffs: &[C64], dt: f64) -> StateVector {
        assert!(coeffs.len() == self.dim(), "propagate: dimension mismatch");
        let n = self.dim();
        let phased: Vec<C64> = coeffs
            .iter()
            .zip(self.values.iter())
            .map(|(c, &e)| c * C64::new(0.0, -e * dt).exp())
            .collect();

        let mut out = StateVector::zeros(n);
        for i in 0..n {
            let mut acc = C64::new(0.0, 0.0);
            for k in 0..n {
                acc += self.vectors.get(i, k) * phased[k];
            }
            out.amps[i] = acc;
        }
        out
    }
}
