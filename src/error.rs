use thiserror::Error;

/// 库错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input did not match any known level token
    #[error("could not match a level for `{original}` to a valid severity level")]
    InvalidLevel {
        /// 调用方传入的原始值（未做任何归一化）
        original: String,
        /// 实际参与匹配的归一化值（去除首尾空白并转小写）
        sanitized: String,
    },
}

impl Error {
    /// 返回错误中保存的原始输入
    #[must_use]
    pub fn original(&self) -> &str {
        match self {
            Error::InvalidLevel { original, .. } => original,
        }
    }

    /// 返回实际参与匹配的归一化输入
    #[must_use]
    pub fn sanitized(&self) -> &str {
        match self {
            Error::InvalidLevel { sanitized, .. } => sanitized,
        }
    }
}

/// 库 Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;
