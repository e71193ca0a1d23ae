pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] svggraph_core::Error),

    #[error("Invalid graph options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("Invalid drawing area: {reason}")]
    InvalidDimensions { reason: String },

    #[error("Invalid graph option `{key}`: {reason}")]
    InvalidOptionValue { key: &'static str, reason: String },

    #[error("No graph bound to element: {id}")]
    UnknownGraph { id: String },
}
