use crate::config::RunConfig;
use crate::error::SimError;
use spins::{
    hamiltonian::initial_hamiltonian,
    observables::{
        extract_observables, to_spherical_trajectory, CartesianTrajectory, SphericalTrajectories,
    },
    operators::build_angular_momentum_operators,
    ExactDiagonalization, OperatorAlgebra, SolverBackend,
};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct SimulationOutput {
    pub times: Vec<f64>,
    pub j1: CartesianTrajectory,
    pub j2: CartesianTrajectory,
    pub spherical: SphericalTrajectories,
    /// ⟨H_dyn⟩ in the initial state.
    pub energy: f64,
}

pub fn backend_for(config: &RunConfig) -> ExactDiagonalization {
    if config.pauli {
        ExactDiagonalization::pauli()
    } else {
        ExactDiagonalization::new()
    }
}

pub fn simulate(config: &RunConfig) -> Result<SimulationOutput, SimError> {
    simulate_with(&backend_for(config), config)
}

/// Prepares the ground state of the initial Zeeman Hamiltonian, evolves it
/// under the dynamic Hamiltonian and converts ⟨J⟩(t) to `(z, phi)`.
pub fn simulate_with<B: SolverBackend>(
    backend: &B,
    config: &RunConfig,
) -> Result<SimulationOutput, SimError> {
    let start = Instant::now();
    let times = config.times.samples()?;
    let (h1, h2) = config.initial.fields();

    let ops = build_angular_momentum_operators(
        backend,
        config.sites,
        config.spin1,
        config.spin2,
        h1,
        h2,
    )?;
    debug!(
        dim = ops.j1[0].dim(),
        spin1 = %config.spin1,
        spin2 = %config.spin2,
        "assembled angular momentum operators"
    );

    let h_ini = initial_hamiltonian(h1, h2, &ops.j1, &ops.j2)?;
    let psi0 = backend.ground_state(&h_ini)?;

    let h_dyn = config.dynamic.hamiltonian(&ops)?;
    let energy = backend.expectation(&h_dyn, &psi0)?.re;

    let obs = extract_observables(backend, &psi0, &h_dyn, &times, &ops.j1, &ops.j2, false)?;
    let spherical = to_spherical_trajectory(&obs.j1, &obs.j2)?;

    info!(
        samples = times.len(),
        energy,
        elapsed_s = start.elapsed().as_secs_f64(),
        "simulation finished"
    );

    Ok(SimulationOutput {
        times: obs.times,
        j1: obs.j1,
        j2: obs.j2,
        spherical,
        energy,
    })
}
