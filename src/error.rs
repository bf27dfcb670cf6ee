use thiserror::Error;

/// Reasons a region could not be put under observation.
///
/// These never reach the page: the tracker logs them and stays hidden.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObserveError {
    #[error("region is not mounted")]
    Unmounted,
    #[error("intersection observer unavailable: {0}")]
    Unsupported(String),
}
