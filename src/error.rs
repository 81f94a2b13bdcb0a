pub type ScratchResult<T> = Result<T, ScratchError>;

#[derive(thiserror::Error, Debug)]
pub enum ScratchError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

impl ScratchError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
