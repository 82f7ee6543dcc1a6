use crate::backend::{Measurement, SolverBackend};
use crate::basis::{Convention, SpinBasis, TensorBasis};
use crate::error::{Result, SpinError};
use crate::opstr::OpTerm;
use crate::spin::Spin;
use linalg::{DenseOperator, Eigh, StateVector, C64};
use std::collections::{BTreeMap, BTreeSet};

/// Allowed `|H - H†|` per unit of the largest entry modulus.
const HERMITIAN_TOL: f64 = 1e-9;

/// Full exact diagonalization on dense matrices.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactDiagonalization {
    pub convention: Convention,
}

impl ExactDiagonalization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauli() -> Self {
        Self {
            convention: Convention::Pauli,
        }
    }

    fn decompose(&self, h: &DenseOperator) -> Result<Eigh> {
        let dev = h.max_abs_diff(&h.adjoint());
        if dev > HERMITIAN_TOL * h.max_abs().max(1.0) {
            return Err(SpinError::NotHermitian(dev));
        }
        Ok(Eigh::new(h))
    }
}

fn check_dim(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(SpinError::DimensionMismatch { expected, found });
    }
    Ok(())
}

impl SolverBackend for ExactDiagonalization {
    type Basis = TensorBasis;
    type Operator = DenseOperator;
    type State = StateVector;

    fn build_basis(&self, sites: usize, spin1: Spin, spin2: Spin) -> Result<TensorBasis> {
        let left = SpinBasis::new(sites, spin1)?.with_convention(self.convention)?;
        let right = SpinBasis::new(sites, spin2)?.with_convention(self.convention)?;
        TensorBasis::new(left, right)
    }

    fn build_operator(&self, terms: &[OpTerm], basis: &TensorBasis) -> Result<DenseOperator> {
        basis.build(terms)
    }

    fn ground_state(&self, hamiltonian: &DenseOperator) -> Result<StateVector> {
        let mut g = self.decompose(hamiltonian)?.ground_state();
        g.normalize();
        Ok(g)
    }

    fn expectation(&self, op: &DenseOperator, state: &StateVector) -> Result<C64> {
        check_dim(op.dim(), state.dim())?;
        Ok(op.expectation(state))
    }

    fn evolve_and_measure(
        &self,
        state: &StateVector,
        hamiltonian: &DenseOperator,
        times: &[f64],
        observables: &[(&str, &DenseOperator)],
        return_state: bool,
    ) -> Result<Measurement<StateVector>> {
        let t0 = *times.first().ok_or(SpinError::EmptyTimeGrid)?;
        check_dim(hamiltonian.dim(), state.dim())?;
        let mut seen = BTreeSet::new();
        for (name, op) in observables {
            if !seen.insert(*name) {
                return Err(SpinError::DuplicateObservable(name.to_string()));
            }
            check_dim(hamiltonian.dim(), op.dim())?;
        }

        let eig = self.decompose(hamiltonian)?;
        let coeffs = eig.project(state);

        let mut trajectories: BTreeMap<String, Vec<C64>> = observables
            .iter()
            .map(|(name, _)| (name.to_string(), Vec::with_capacity(times.len())))
            .collect();
        let mut states = Vec::new();

        for &t in times {
            let psi = eig.propagate(&coeffs, t - t0);
            for (name, op) in observables {
                if let Some(traj) = trajectories.get_mut(*name) {
                    traj.push(op.expectation(&psi));
                }
            }
            if return_state {
                states.push(psi);
            }
        }

        Ok(Measurement {
            times: times.to_vec(),
            trajectories,
            states: return_state.then_some(states),
        })
    }
}
