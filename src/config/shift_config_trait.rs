// ==========================================
// 灌装线产量报表 - 班次配置读取 Trait
// ==========================================
// 职责: 定义班次默认值读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigResult;
use crate::domain::shift::ShiftConfig;
use async_trait::async_trait;
use chrono::NaiveTime;

// ==========================================
// ShiftConfigReader Trait
// ==========================================
// 用途: 报表周期未自带班次配置时提供默认值
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait ShiftConfigReader: Send + Sync {
    /// 获取上班时间
    ///
    /// # 默认值
    /// - 08:00
    async fn get_shift_start_time(&self) -> ConfigResult<NaiveTime>;

    /// 获取下班时间
    ///
    /// # 默认值
    /// - 17:00
    async fn get_shift_end_time(&self) -> ConfigResult<NaiveTime>;

    /// 周六是否按休息日处理
    ///
    /// # 默认值
    /// - false
    async fn get_treat_saturday_as_non_working(&self) -> ConfigResult<bool>;

    /// 组装默认班次配置
    async fn get_default_shift_config(&self) -> ConfigResult<ShiftConfig> {
        Ok(ShiftConfig {
            shift_start_time: self.get_shift_start_time().await?,
            shift_end_time: self.get_shift_end_time().await?,
            treat_saturday_as_non_working: self.get_treat_saturday_as_non_working().await?,
        })
    }
}
