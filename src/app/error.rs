// ==========================================
// 灌装线产量报表 - 应用层错误类型
// ==========================================

use crate::config::ConfigError;
use crate::domain::DomainError;
use crate::engine::EngineError;
use crate::report::ReportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("请求文件读取失败: {0}")]
    RequestRead(String),

    #[error("请求解析失败: {0}")]
    RequestParse(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::RequestRead(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::RequestParse(err.to_string())
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
