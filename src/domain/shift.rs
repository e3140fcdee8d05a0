// ==========================================
// 灌装线产量报表 - 班次配置
// ==========================================
// 每个报表周期显式携带,不依赖全局状态
// ==========================================

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// 上班时间（仅展示,不参与分摊）
    #[serde(default = "default_shift_start")]
    pub shift_start_time: NaiveTime,

    /// 下班时间（工作时间的结束）
    pub shift_end_time: NaiveTime,

    /// 周六是否按休息日处理
    #[serde(default)]
    pub treat_saturday_as_non_working: bool,
}

fn default_shift_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default()
}

fn default_shift_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default()
}

impl ShiftConfig {
    pub fn new(shift_end_time: NaiveTime, treat_saturday_as_non_working: bool) -> Self {
        Self {
            shift_start_time: default_shift_start(),
            shift_end_time,
            treat_saturday_as_non_working,
        }
    }

    /// 该日期是否为休息日（仅周六规则）
    pub fn is_non_working_day(&self, date: NaiveDate) -> bool {
        self.treat_saturday_as_non_working && date.weekday() == Weekday::Sat
    }
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self::new(default_shift_end(), false)
    }
}
