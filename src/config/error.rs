// ==========================================
// 灌装线产量报表 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 数据库错误 =====
    #[error("数据库查询失败: {0}")]
    DatabaseQueryError(String),

    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    // ===== 配置值错误 =====
    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueFormat {
        key: String,
        value: String,
        message: String,
    },

    #[error("配置快照解析失败: {0}")]
    SnapshotError(String),
}

impl From<rusqlite::Error> for ConfigError {
    fn from(err: rusqlite::Error) -> Self {
        ConfigError::DatabaseQueryError(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SnapshotError(err.to_string())
    }
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
