use crate::state::StateVector;
use crate::C64;
use faer::Mat;

/// Square complex matrix acting on a finite Hilbert space.
#[derive(Clone, Debug)]
pub struct DenseOperator {
    pub mat: Mat<C64>,
}

impl DenseOperator {
    pub fn zeros(dim: usize) -> Self {
        Self {
            mat: Mat::<C64>::zeros(dim, dim),
        }
    }

    pub fn identity(dim: usize) -> Self {
        let mut out = Self::zeros(dim);
        for i in 0..dim {
            out.set(i, i, C64::new(1.0, 0.0));
        }
        out
    }

    /// Builds a matrix from row-major entries.
    pub fn from_rows(rows: &[Vec<C64>]) -> Self {
        let dim = rows.len();
        let mut out = Self::zeros(dim);
        for (i, row) in rows.iter().enumerate() {
            assert!(row.len() == dim, "from_rows expects a square matrix");
            for (j, &v) in row.iter().enumerate() {
                out.set(i, j, v);
            }
        }
        out
    }

    pub fn diagonal(values: &[f64]) -> Self {
        let mut out = Self::zeros(values.len());
        for (i, &v) in values.iter().enumerate() {
            out.set(i, i, C64::new(v, 0.0));
        }
        out
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.mat.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> C64 {
        self.mat.read(i, j)
    }

    pub fn set(&mut self, i: usize, j: usize, v: C64) {
        self.mat.write(i, j, v);
    }

    pub fn add(&self, other: &Self) -> Self {
        assert!(self.dim() == other.dim(), "add: dimension mismatch");
        let n = self.dim();
        let mut out = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                out.set(i, j, self.get(i, j) + other.get(i, j));
            }
        }
        out
    }

    pub fn scale(&self, k: C64) -> Self {
        let n = self.dim();
        let mut out = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                out.set(i, j, k * self.get(i, j));
            }
        }
        out
    }

    /// Matrix product `self · other`.
    pub fn matmul(&self, other: &Self) -> Self {
        assert!(self.dim() == other.dim(), "matmul: dimension mismatch");
        let n = self.dim();
        let mut out = Self::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let a = self.get(i, k);
                if a == C64::new(0.0, 0.0) {
                    continue;
                }
                for j in 0..n {
                    let cur = out.get(i, j);
                    out.set(i, j, cur + a * other.get(k, j));
                }
            }
        }
        out
    }

    /// Kronecker product `self ⊗ other`; `self` indexes the slow (left) factor.
    pub fn kron(&self, other: &Self) -> Self {
        let a = self.dim();
        let b = other.dim();
        let mut out = Self::zeros(a * b);
        for i in 0..a {
            for j in 0..a {
                let aval = self.get(i, j);
                if aval == C64::new(0.0, 0.0) {
                    continue;
                }
                for k in 0..b {
                    for l in 0..b {
                        out.set(i * b + k, j * b + l, aval * other.get(k, l));
                    }
                }
            }
        }
        out
    }

    pub fn adjoint(&self) -> Self {
        let n = self.dim();
        let mut out = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                out.set(j, i, self.get(i, j).conj());
            }
        }
        out
    }

    /// `[self, other] = self·other - other·self`
    pub fn commutator(&self, other: &Self) -> Self {
        let ab = self.matmul(other);
        let ba = other.matmul(self);
        ab.add(&ba.scale(C64::new(-1.0, 0.0)))
    }

    /// Largest entrywise modulus of `self - other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        assert!(self.dim() == other.dim(), "max_abs_diff: dimension mismatch");
        let n = self.dim();
        let mut worst = 0.0f64;
        for i in 0..n {
            for j in 0..n {
                worst = worst.max((self.get(i, j) - other.get(i, j)).norm());
            }
        }
        worst
    }

    /// Largest entry modulus.
    pub fn max_abs(&self) -> f64 {
        let n = self.dim();
        let mut worst = 0.0f64;
        for i in 0..n {
            for j in 0..n {
                worst = worst.max(self.get(i, j).norm());
            }
        }
        worst
    }

    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.max_abs_diff(&self.adjoint()) <= tol
    }

    pub fn apply(&self, psi: &StateVector) -> StateVector {
        assert!(self.dim() == psi.dim(), "apply: dimension mismatch");
        let n = self.dim();
        let mut out = StateVector::zeros(n);
        for i in 0..n {
            let mut acc = C64::new(0.0, 0.0);
            for j in 0..n {
                acc += self.get(i, j) * psi.amps[j];
            }
            out.amps[i] = acc;
        }
        out
    }

    /// ⟨ψ|O|ψ⟩, kept complex so non-Hermitian operators are reported faithfully.
    pub fn expectation(&self, psi: &StateVector) -> C64 {
        psi.inner(&self.apply(psi))
    }
}
