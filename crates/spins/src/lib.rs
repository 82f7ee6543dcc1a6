pub mod backend;
pub mod basis;
pub mod coords;
pub mod error;
pub mod exact;
pub mod field;
pub mod hamiltonian;
pub mod observables;
pub mod operators;
pub mod opstr;
pub mod spin;
pub mod times;

pub use backend::{Measurement, OperatorAlgebra, SolverBackend};
pub use error::{Result, SpinError};
pub use exact::ExactDiagonalization;
pub use spin::Spin;
