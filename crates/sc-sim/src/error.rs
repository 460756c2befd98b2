//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered during a capacitor simulation run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },

    #[error("{what} must be positive, got {value}")]
    NotPositive { what: &'static str, value: f64 },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<sc_core::ScError> for SimError {
    fn from(e: sc_core::ScError) -> Self {
        match e {
            sc_core::ScError::InvalidArg { what } => SimError::InvalidArg { what },
            sc_core::ScError::NonFinite { what, .. } => SimError::NonFinite { what },
            sc_core::ScError::NotPositive { what, value } => {
                SimError::NotPositive { what, value }
            }
        }
    }
}
