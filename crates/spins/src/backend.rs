//! Seam between the transform/assembly layer and a many-body solver.

use crate::error::{Result, SpinError};
use crate::opstr::OpTerm;
use crate::spin::Spin;
use linalg::{DenseOperator, C64};
use std::collections::BTreeMap;

/// The operator arithmetic Hamiltonian construction needs.
pub trait OperatorAlgebra: Clone {
    fn dim(&self) -> usize;
    fn add(&self, other: &Self) -> Result<Self>;
    fn scale(&self, k: C64) -> Self;
    /// Operator product `self · other`.
    fn compose(&self, other: &Self) -> Result<Self>;

    fn scale_real(&self, k: f64) -> Self {
        self.scale(C64::new(k, 0.0))
    }
}

fn check_dims(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(SpinError::DimensionMismatch { expected, found });
    }
    Ok(())
}

impl OperatorAlgebra for DenseOperator {
    fn dim(&self) -> usize {
        DenseOperator::dim(self)
    }

    fn add(&self, other: &Self) -> Result<Self> {
        check_dims(DenseOperator::dim(self), DenseOperator::dim(other))?;
        Ok(DenseOperator::add(self, other))
    }

    fn scale(&self, k: C64) -> Self {
        DenseOperator::scale(self, k)
    }

    fn compose(&self, other: &Self) -> Result<Self> {
        check_dims(DenseOperator::dim(self), DenseOperator::dim(other))?;
        Ok(self.matmul(other))
    }
}

/// Per-name expectation trajectories over a time grid.
#[derive(Clone, Debug)]
pub struct Measurement<S> {
    pub times: Vec<f64>,
    pub trajectories: BTreeMap<String, Vec<C64>>,
    /// Evolved states, one per time sample, when requested.
    pub states: Option<Vec<S>>,
}

impl<S> Measurement<S> {
    pub fn trajectory(&self, name: &str) -> Result<&[C64]> {
        self.trajectories
            .get(name)
            .map(|v| v.as_slice())
            .ok_or_else(|| SpinError::UnknownObservable(name.to_string()))
    }
}

/// Capability set of a solver: bases, operators, ground states, evolution.
pub trait SolverBackend {
    type Basis;
    type Operator: OperatorAlgebra;
    type State: Clone;

    /// Tensor basis of two subsystems of `sites` spins each.
    fn build_basis(&self, sites: usize, spin1: Spin, spin2: Spin) -> Result<Self::Basis>;

    fn build_operator(&self, terms: &[OpTerm], basis: &Self::Basis) -> Result<Self::Operator>;

    /// Lowest-energy eigenstate of `hamiltonian`.
    fn ground_state(&self, hamiltonian: &Self::Operator) -> Result<Self::State>;

    fn expectation(&self, op: &Self::Operator, state: &Self::State) -> Result<C64>;

    /// Evolves `state` from `times[0]` under `hamiltonian` and records
    /// ⟨O⟩(t) for every named observable.
    fn evolve_and_measure(
        &self,
        state: &Self::State,
        hamiltonian: &Self::Operator,
        times: &[f64],
        observables: &[(&str, &Self::Operator)],
        return_state: bool,
    ) -> Result<Measurement<Self::State>>;
}
