use thiserror::Error;

/// Decode failures for geometric records.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeomError {
    #[error("corrupt geometry data: {0}")]
    CorruptData(String),
}
