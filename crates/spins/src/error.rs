use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpinError {
    #[error("invalid spin magnitude `{0}` (expected e.g. \"1/2\", \"1\", \"3/2\")")]
    InvalidSpin(String),

    #[error("malformed operator string `{opstr}`: {reason}")]
    OpString { opstr: String, reason: String },

    #[error("site {site} out of range for a basis of {sites} sites")]
    SiteOutOfRange { site: usize, sites: usize },

    #[error("a spin basis needs at least one site")]
    NoSites,

    #[error("basis of {sites} sites is too large to represent")]
    BasisTooLarge { sites: usize },

    #[error("pauli convention is only defined for spin 1/2, got {0}")]
    PauliSpin(String),

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("operator is not Hermitian (max deviation {0:e})")]
    NotHermitian(f64),

    #[error("time grid needs at least one sample")]
    EmptyTimeGrid,

    #[error("observable `{0}` requested more than once")]
    DuplicateObservable(String),

    #[error("unknown observable `{0}`")]
    UnknownObservable(String),

    #[error("trajectory length mismatch: {0} vs {1}")]
    TrajectoryLength(usize, usize),
}

pub type Result<T> = std::result::Result<T, SpinError>;
