use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("action decode failed: {0}")]
    DecodeAction(#[source] serde_json::Error),
    #[error("state decode failed: {0}")]
    DecodeState(#[source] serde_json::Error),
    #[error("state encode failed: {0}")]
    Encode(#[source] serde_json::Error),
}
