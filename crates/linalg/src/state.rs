use crate::C64;

#[derive(Clone, Debug)]
pub struct StateVector {
    pub amps: Vec<C64>,
}

impl StateVector {
    pub fn zeros(dim: usize) -> Self {
        Self {
            amps: vec![C64::new(0.0, 0.0); dim],
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.amps.len()
    }

    /// ⟨self|other⟩
    pub fn inner(&self, other: &Self) -> C64 {
        assert!(self.dim() == other.dim(), "inner: dimension mismatch");
        let mut acc = C64::new(0.0, 0.0);
        for (a, b) in self.amps.iter().zip(other.amps.iter()) {
            acc += a.conj() * b;
        }
        acc
    }

    pub fn norm(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Scales to unit norm. A zero vector is left untouched.
    pub fn normalize(&mut self) {
        let n = self.norm();
        if n == 0.0 {
            return;
        }
        for a in self.amps.iter_mut() {
            *a /= n;
        }
    }
}
