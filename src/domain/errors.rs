/// Failure conditions surfaced to the user as a page notice.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DinoError {
    #[error("could not load dinosaur data, try again ({0})")]
    DataUnavailable(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("cannot compare: {0}")]
    InvalidComparison(String),
    #[error("saved session is unreadable ({0})")]
    StorageCorrupt(String),
}

impl DinoError {
    pub fn kind(&self) -> &'static str {
        match self {
            DinoError::DataUnavailable(_) => "data_unavailable",
            DinoError::InvalidInput(_) => "invalid_input",
            DinoError::InvalidComparison(_) => "invalid_comparison",
            DinoError::StorageCorrupt(_) => "storage_corrupt",
        }
    }
}
