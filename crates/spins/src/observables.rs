use crate::backend::SolverBackend;
use crate::error::{Result, SpinError};
use linalg::C64;

pub const OBSERVABLE_NAMES: [&str; 6] = ["Jx_1", "Jy_1", "Jz_1", "Jx_2", "Jy_2", "Jz_2"];

/// ⟨Jx⟩, ⟨Jy⟩, ⟨Jz⟩ of one subsystem over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartesianTrajectory {
    pub x: Vec<C64>,
    pub y: Vec<C64>,
    pub z: Vec<C64>,
}

impl CartesianTrajectory {
    pub fn new(x: Vec<C64>, y: Vec<C64>, z: Vec<C64>) -> Self {
        Self { x, y, z }
    }

    /// The same vector at every one of `len` samples.
    pub fn constant(v: [f64; 3], len: usize) -> Self {
        let c = |a: f64| vec![C64::new(a, 0.0); len];
        Self::new(c(v[0]), c(v[1]), c(v[2]))
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    fn check(&self) -> Result<usize> {
        let n = self.x.len();
        for other in [self.y.len(), self.z.len()] {
            if other != n {
                return Err(SpinError::TrajectoryLength(n, other));
            }
        }
        Ok(n)
    }

    /// Real parts at sample `i`.
    pub fn real_at(&self, i: usize) -> [f64; 3] {
        [self.x[i].re, self.y[i].re, self.z[i].re]
    }
}

/// Cartesian trajectories of both subsystems, plus the evolved states when
/// they were requested.
#[derive(Clone, Debug)]
pub struct Observables<S> {
    pub times: Vec<f64>,
    pub j1: CartesianTrajectory,
    pub j2: CartesianTrajectory,
    pub states: Option<Vec<S>>,
}

/// Evolves `state` under `hamiltonian` and regroups the six named
/// trajectories into one triple per subsystem.
pub fn extract_observables<B: SolverBackend>(
    backend: &B,
    state: &B::State,
    hamiltonian: &B::Operator,
    times: &[f64],
    j1: &[B::Operator; 3],
    j2: &[B::Operator; 3],
    return_state: bool,
) -> Result<Observables<B::State>> {
    let ops = [&j1[0], &j1[1], &j1[2], &j2[0], &j2[1], &j2[2]];
    let named: Vec<(&str, &B::Operator)> = OBSERVABLE_NAMES.iter().copied().zip(ops).collect();

    let m = backend.evolve_and_measure(state, hamiltonian, times, &named, return_state)?;
    let take = |name: &str| m.trajectory(name).map(|t| t.to_vec());

    let j1 = CartesianTrajectory::new(take("Jx_1")?, take("Jy_1")?, take("Jz_1")?);
    let j2 = CartesianTrajectory::new(take("Jx_2")?, take("Jy_2")?, take("Jz_2")?);

    Ok(Observables {
        times: m.times,
        j1,
        j2,
        states: m.states,
    })
}

/// Spherical `(z, phi)` of both subsystems per time sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SphericalTrajectories {
    pub z1: Vec<f64>,
    pub phi1: Vec<f64>,
    pub z2: Vec<f64>,
    pub phi2: Vec<f64>,
}

impl SphericalTrajectories {
    pub fn len(&self) -> usize {
        self.z1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z1.is_empty()
    }
}

fn spherical_series(j: &CartesianTrajectory) -> (Vec<f64>, Vec<f64>) {
    let n = j.len();
    let mut z = Vec::with_capacity(n);
    let mut phi = Vec::with_capacity(n);
    for i in 0..n {
        // The norm keeps imaginary parts, the angle uses real parts only.
        let norm = (j.x[i].norm_sqr() + j.y[i].norm_sqr() + j.z[i].norm_sqr()).sqrt();
        z.push(j.z[i].re / norm);
        phi.push(j.y[i].re.atan2(j.x[i].re));
    }
    (z, phi)
}

pub fn to_spherical_trajectory(
    j1: &CartesianTrajectory,
    j2: &CartesianTrajectory,
) -> Result<SphericalTrajectories> {
    let n1 = j1.check()?;
    let n2 = j2.check()?;
    if n1 != n2 {
        return Err(SpinError::TrajectoryLength(n1, n2));
    }

    let (z1, phi1) = spherical_series(j1);
    let (z2, phi2) = spherical_series(j2);
    Ok(SphericalTrajectories { z1, phi1, z2, phi2 })
}
