use crate::Violations;
use std::result::Result as StdResult;
use thiserror::Error;

/// Possible errors that can occur while working with LAS point records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// One or more fields of a point are outside the range allowed by the LAS format.
    /// The bitmask tells which rules were violated.
    #[error("Invalid point data: {reason} ({violations})")]
    InvalidPointData {
        reason: String,
        violations: Violations,
    },
}

impl Error {
    /// Creates an invalid point data error from text and the violated rules.
    pub fn invalid_point_data<T>(reason: &str, violations: Violations) -> Result<T> {
        Err(Error::InvalidPointData {
            reason: reason.to_string(),
            violations,
        })
    }

    /// Returns the violated rules carried by the error.
    pub fn violations(&self) -> Violations {
        match self {
            Error::InvalidPointData { violations, .. } => *violations,
        }
    }
}

pub type Result<T> = StdResult<T, Error>;
