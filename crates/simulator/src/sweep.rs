use crate::config::RunConfig;
use crate::error::SimError;
use crate::run::{simulate, SimulationOutput};
use rayon::prelude::*;
use tracing::info;

/// Scalar of the dynamic Hamiltonian varied across a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepParam {
    /// z-z coupling `V`.
    Coupling,
    /// Anisotropy `L1`.
    Anisotropy1,
    /// Anisotropy `L2`.
    Anisotropy2,
}

impl SweepParam {
    pub fn apply(self, config: &mut RunConfig, value: f64) {
        match self {
            SweepParam::Coupling => config.dynamic.coupling = value,
            SweepParam::Anisotropy1 => config.dynamic.anisotropy[0] = value,
            SweepParam::Anisotropy2 => config.dynamic.anisotropy[1] = value,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SweepParam::Coupling => "coupling",
            SweepParam::Anisotropy1 => "anisotropy1",
            SweepParam::Anisotropy2 => "anisotropy2",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepRow {
    pub value: f64,
    pub z1_final: f64,
    pub z2_final: f64,
    pub z1_mean: f64,
    pub z2_mean: f64,
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

impl SweepRow {
    pub fn summarize(value: f64, out: &SimulationOutput) -> Self {
        let s = &out.spherical;
        Self {
            value,
            z1_final: s.z1.last().copied().unwrap_or(f64::NAN),
            z2_final: s.z2.last().copied().unwrap_or(f64::NAN),
            z1_mean: mean(&s.z1),
            z2_mean: mean(&s.z2),
        }
    }
}

/// Runs one independent simulation per value; rows keep the input order.
pub fn sweep(
    base: &RunConfig,
    param: SweepParam,
    values: &[f64],
) -> Result<Vec<SweepRow>, SimError> {
    let rows = values
        .par_iter()
        .map(|&v| -> Result<SweepRow, SimError> {
            let mut config = base.clone();
            param.apply(&mut config, v);
            let out = simulate(&config)?;
            Ok(SweepRow::summarize(v, &out))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(param = param.name(), points = rows.len(), "sweep finished");
    Ok(rows)
}

/// `count` evenly spaced values from `start` to `stop`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
