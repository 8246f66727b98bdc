use crate::input::{MAX_MERIDIAN, MAX_PARALLEL, MIN_MERIDIAN, MIN_PARALLEL};

/// Reasons a calculation is abandoned. None of them are recoverable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("meridians must be between {} and {} (got {value})", MIN_MERIDIAN, MAX_MERIDIAN)]
    InvalidMeridian { value: f64 },

    #[error("parallels must be between {} and {} (got {value})", MIN_PARALLEL, MAX_PARALLEL)]
    InvalidParallel { value: f64 },

    #[error("radius must be a positive number (got {value})")]
    InvalidRadius { value: f64 },

    #[error("degenerate triangle: two of its corners coincide")]
    DegenerateTriangle,
}

impl Error {
    /// Process exit status for this error.
    ///
    /// The meridian and parallel codes are -1 and -2 as seen by a POSIX shell.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidMeridian { .. } => 255,
            Error::InvalidParallel { .. } => 254,
            Error::InvalidRadius { .. } => 253,
            Error::DegenerateTriangle => 252,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
