// ==========================================
// 灌装线产量报表 - 配置层
// ==========================================
// 职责: 班次默认值、报表语言等配置管理
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod error;
pub mod shift_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use shift_config_trait::ShiftConfigReader;
