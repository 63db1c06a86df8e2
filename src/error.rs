#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token size {requested} is below the minimum of {minimum}")]
    SizeBelowMinimum { requested: usize, minimum: usize },

    #[error("entropy source failure: {reason}")]
    EntropyFailure { reason: String },
}

pub type Result<T> = std::result::Result<T, TokenError>;
