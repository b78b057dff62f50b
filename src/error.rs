use std::io;

/// Planning and mission-serialization errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Footprint cannot be planned (wrong vertex count, regularity test
    /// failed, or the scan covered no ground)
    #[error("Invalid footprint: {0}")]
    InvalidFootprint(String),

    /// Overlap parameters collapse line or point spacing below the floor
    #[error("Invalid spacing: {0}")]
    InvalidSpacing(String),

    /// Numeric parameter outside its documented bounds
    #[error("{field} out of range: {value} (expected {expected})")]
    InputOutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
