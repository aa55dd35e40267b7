pub type VersegridResult<T> = Result<T, VersegridError>;

#[derive(thiserror::Error, Debug)]
pub enum VersegridError {
    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("source error: {0}")]
    Source(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VersegridError {
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
