use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuiasError {
    #[error("Tutorial not found: {0}")]
    TutorialNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Reserved for TutorialStore backends that can actually fail; the
    // in-memory store never constructs it
    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, GuiasError>;
