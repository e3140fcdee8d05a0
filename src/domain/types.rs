// ==========================================
// 灌装线产量报表 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 灌装线 ID（数据库中的稳定数字标识）
pub type LineId = i64;

// ==========================================
// 分摊规则 (Allocation Rule)
// ==========================================
// 红线: 按固定优先级匹配,先命中者生效
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationRule {
    LateStart,          // 首次启动晚于下班时间,全部计为加班
    NonWorkingSaturday, // 周六按休息日处理,全部计为加班
    BoundaryDelta,      // 按承接快照计算加班增量
    NoBoundary,         // 无承接快照,全部计为工作时间
}

impl AllocationRule {
    /// 规则优先级（从高到低）
    pub const PRECEDENCE: [AllocationRule; 4] = [
        AllocationRule::LateStart,
        AllocationRule::NonWorkingSaturday,
        AllocationRule::BoundaryDelta,
        AllocationRule::NoBoundary,
    ];

    /// 转换为字符串标识
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationRule::LateStart => "LATE_START",
            AllocationRule::NonWorkingSaturday => "NON_WORKING_SATURDAY",
            AllocationRule::BoundaryDelta => "BOUNDARY_DELTA",
            AllocationRule::NoBoundary => "NO_BOUNDARY",
        }
    }
}

impl fmt::Display for AllocationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
