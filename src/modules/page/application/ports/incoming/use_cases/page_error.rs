#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// The record does not exist or could not be fetched. Detail pages make
    /// no distinction between the two.
    #[error("Not found")]
    NotFound,
}
