//! 公共常量
//! 提供：
//! - 合法日志级别 token 常量 LEVEL_TOKENS

/// 合法的日志级别 token（统一来源，与 resolver 的查找表保持一致）
pub const LEVEL_TOKENS: &[&str] = &[
    "debug", "info", "warn", "error", "fatal", "no", "disabled",
];
