pub mod dense;
pub mod eigh;
pub mod state;

pub use dense::DenseOperator;
pub use eigh::Eigh;
pub use state::StateVector;

pub type C64 = num_complex::Complex64;
