/// Errors surfaced to the caller. Provider failures never reach this level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("请输入词语")]
    InvalidInput,

    #[error("不支持的模型类型: {0}")]
    UnsupportedModel(String),
}

impl ServiceError {
    /// HTTP-style status for the inbound response
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::InvalidInput | ServiceError::UnsupportedModel(_) => 400,
        }
    }
}
