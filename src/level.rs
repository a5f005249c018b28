//! 日志严重级别枚举
//! 提供：
//! - 七个级别常量（按严重程度递增，NoLevel/Disabled 为特殊值）
//! - 规范 token 与 Display/FromStr
//! - 到 log::LevelFilter 的映射

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 日志严重级别
///
/// `Debug` 到 `Fatal` 按严重程度递增排序；`NoLevel` 表示未设置级别的哨兵值，
/// `Disabled` 表示完全关闭日志，两者不参与严重程度比较语义。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    /// 未设置/未知级别的哨兵值
    #[serde(rename = "no")]
    NoLevel,
    /// 完全关闭日志
    Disabled,
}

impl Level {
    /// 返回级别的规范 token（resolver 接受的标准小写写法）
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::NoLevel => "no",
            Level::Disabled => "disabled",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::resolver::as_level(s)
    }
}

/// 映射到 log 门面的过滤级别
///
/// log 没有 Fatal，收敛为 Error；NoLevel 与 Disabled 均视为关闭输出。
impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => log::LevelFilter::Debug,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error | Level::Fatal => log::LevelFilter::Error,
            Level::NoLevel | Level::Disabled => log::LevelFilter::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_level_filter_clamps_fatal() {
        assert_eq!(log::LevelFilter::from(Level::Fatal), log::LevelFilter::Error);
    }
}
