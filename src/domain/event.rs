// ==========================================
// 灌装线产量报表 - 生产事件领域模型
// ==========================================
// 来源: 外部事件库（按 线 × 日期 提供有序事件）
// 红线: 只读快照,引擎不修改
// ==========================================

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionEvent - 生产事件
// ==========================================
// 一条灌装线在报表日期内的一次生产记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionEvent {
    pub volume_alcohol: Decimal,  // 本次酒精体积
    pub bottle_count: i64,        // 本次瓶数
    pub begin_time: NaiveDateTime, // 启动时间（可能在前一天）
    pub start_time: NaiveTime,    // 报表日内的开始时刻
    pub end_time: NaiveTime,      // 报表日内的结束时刻

    // ===== 累计加班 (截至本事件,单调不减) =====
    pub cumulative_overtime_volume: Decimal,
    pub cumulative_overtime_bottles: i64,

    pub create_time: NaiveDateTime, // 记录写入时间
}

impl ProductionEvent {
    /// 事件是否跨越下班时间（开始早于、结束晚于）
    pub fn straddles(&self, boundary: NaiveTime) -> bool {
        self.start_time < boundary && self.end_time > boundary
    }

    /// 截至本事件结束时的累计加班体积（溢出时 None）
    pub fn overtime_volume_through(&self) -> Option<Decimal> {
        self.cumulative_overtime_volume
            .checked_add(self.volume_alcohol)
    }

    /// 截至本事件结束时的累计加班瓶数（溢出时 None）
    pub fn overtime_bottles_through(&self) -> Option<i64> {
        self.cumulative_overtime_bottles
            .checked_add(self.bottle_count)
    }
}

// ==========================================
// BoundaryRecord - 承接快照 (interv_data)
// ==========================================
// 上一报表窗口末尾的累计加班快照,用于计算本日加班增量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRecord {
    pub overtime_volume: Decimal,
    pub overtime_bottles: i64,
    pub create_time: NaiveDateTime,
}
