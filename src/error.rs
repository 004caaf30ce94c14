pub type ArcmarkResult<T> = Result<T, ArcmarkError>;

#[derive(thiserror::Error, Debug)]
pub enum ArcmarkError {
    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),

    #[error("icon container needs at least one entry")]
    EmptyEntryList,

    #[error("icon container is {0} bytes, which overflows its u32 length field")]
    OversizedContainer(u64),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArcmarkError {
    pub fn invalid_size(msg: impl Into<String>) -> Self {
        Self::InvalidSize(msg.into())
    }

    pub fn invalid_canvas(msg: impl Into<String>) -> Self {
        Self::InvalidCanvas(msg.into())
    }
}
