//! 级别解析器
//! 将字符串形式的日志级别归一化（去空白、转小写）后映射为 [`Level`]

use crate::error::{Error, Result};
use crate::level::Level;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// 使用 once_cell 缓存级别映射表，避免每次查找时重新构建
static LEVEL_MAP: Lazy<HashMap<&'static str, Level>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("debug", Level::Debug);
    map.insert("info", Level::Info);
    map.insert("warn", Level::Warn);
    map.insert("error", Level::Error);
    map.insert("fatal", Level::Fatal);
    map.insert("no", Level::NoLevel);
    map.insert("disabled", Level::Disabled);
    map
});

/// 严格解析：将字符串形式的级别转换为 [`Level`]
///
/// 匹配不区分大小写，且忽略首尾空白。无法匹配时返回
/// [`Error::InvalidLevel`]，其中同时保存原始输入与归一化后的输入。
///
/// 注意：输入 `"no"` 会得到 `Ok(Level::NoLevel)`，这与解析失败（`Err`）
/// 是两种不同的结果，调用方不应把 `NoLevel` 当作失败标记使用。
pub fn as_level(value: impl AsRef<str>) -> Result<Level> {
    let original = value.as_ref();
    let sanitized = original.trim().to_lowercase();
    LEVEL_MAP
        .get(sanitized.as_str())
        .copied()
        .ok_or_else(|| Error::InvalidLevel {
            original: original.to_string(),
            sanitized,
        })
}

/// 宽松解析：无法匹配时返回调用方提供的 `fallback`，绝不返回错误
pub fn as_level_or(value: impl AsRef<str>, fallback: Level) -> Level {
    as_level(value).unwrap_or(fallback)
}
