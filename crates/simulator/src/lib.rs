pub mod config;
mod error;
pub mod output;
pub mod run;
pub mod sweep;

pub use config::{InitialOrientation, RunConfig};
pub use error::SimError;
pub use run::{simulate, simulate_with, SimulationOutput};
pub use sweep::{sweep, SweepParam, SweepRow};
