use thiserror::Error;

/// Failures a strategy reports instead of producing a tour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("{strategy} needs at least {required} points, got {actual}")]
    InsufficientNodes {
        strategy: &'static str,
        required: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, SolveError>;
