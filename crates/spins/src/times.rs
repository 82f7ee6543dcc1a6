use crate::error::{Result, SpinError};
use serde::{Deserialize, Serialize};

/// Evenly spaced samples from `start` to `stop`, both included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    pub start: f64,
    pub stop: f64,
    pub steps: usize,
}

impl TimeGrid {
    pub fn new(start: f64, stop: f64, steps: usize) -> Self {
        Self { start, stop, steps }
    }

    pub fn samples(&self) -> Result<Vec<f64>> {
        match self.steps {
            0 => Err(SpinError::EmptyTimeGrid),
            1 => Ok(vec![self.start]),
            n => {
                let dt = (self.stop - self.start) / (n - 1) as f64;
                Ok((0..n).map(|i| self.start + dt * i as f64).collect())
            }
        }
    }
}
