use crate::error::{Result, SpinError};
use linalg::{DenseOperator, C64};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spin magnitude, stored as a number of halves (1/2 → 1, 1 → 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Spin {
    halves: u32,
}

impl Spin {
    pub const HALF: Spin = Spin { halves: 1 };
    pub const ONE: Spin = Spin { halves: 2 };

    pub fn from_halves(halves: u32) -> Result<Self> {
        if halves == 0 {
            return Err(SpinError::InvalidSpin("0".into()));
        }
        Ok(Self { halves })
    }

    pub fn halves(self) -> u32 {
        self.halves
    }

    pub fn value(self) -> f64 {
        self.halves as f64 / 2.0
    }

    /// Number of `m` levels, `2S + 1`.
    pub fn local_dim(self) -> usize {
        self.halves as usize + 1
    }

    /// Projection `m` of local level `k`; levels run `S, S-1, …, -S`.
    pub fn projection(self, k: usize) -> f64 {
        self.value() - k as f64
    }

    pub fn sz(self) -> DenseOperator {
        let values: Vec<f64> = (0..self.local_dim()).map(|k| self.projection(k)).collect();
        DenseOperator::diagonal(&values)
    }

    /// S+|m⟩ = sqrt(S(S+1) - m(m+1)) |m+1⟩
    pub fn s_plus(self) -> DenseOperator {
        let s = self.value();
        let d = self.local_dim();
        let mut out = DenseOperator::zeros(d);
        for k in 1..d {
            let m = self.projection(k);
            let amp = (s * (s + 1.0) - m * (m + 1.0)).sqrt();
            out.set(k - 1, k, C64::new(amp, 0.0));
        }
        out
    }

    pub fn s_minus(self) -> DenseOperator {
        self.s_plus().adjoint()
    }

    pub fn sx(self) -> DenseOperator {
        self.s_plus().add(&self.s_minus()).scale(C64::new(0.5, 0.0))
    }

    pub fn sy(self) -> DenseOperator {
        let diff = self.s_plus().add(&self.s_minus().scale(C64::new(-1.0, 0.0)));
        diff.scale(C64::new(0.0, -0.5))
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.halves % 2 == 0 {
            write!(f, "{}", self.halves / 2)
        } else {
            write!(f, "{}/2", self.halves)
        }
    }
}

impl FromStr for Spin {
    type Err = SpinError;

    /// Accepts "1/2", "3/2", "1", "2", "0.5", "1.5".
    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let bad = || SpinError::InvalidSpin(s.to_string());

        if let Some((num, den)) = t.split_once('/') {
            let num: u32 = num.trim().parse().map_err(|_| bad())?;
            let den: u32 = den.trim().parse().map_err(|_| bad())?;
            return match den {
                1 => Spin::from_halves(2 * num).map_err(|_| bad()),
                2 => Spin::from_halves(num).map_err(|_| bad()),
                _ => Err(bad()),
            };
        }

        let v: f64 = t.parse().map_err(|_| bad())?;
        let halves = 2.0 * v;
        if !halves.is_finite() || halves < 0.0 || (halves - halves.round()).abs() > 1e-12 {
            return Err(bad());
        }
        Spin::from_halves(halves.round() as u32).map_err(|_| bad())
    }
}

impl TryFrom<String> for Spin {
    type Error = SpinError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Spin> for String {
    fn from(s: Spin) -> String {
        s.to_string()
    }
}
