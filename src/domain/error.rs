// ==========================================
// 灌装线产量报表 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 只覆盖周期构造与事件桶写入时的不变量
// ==========================================

use crate::domain::types::LineId;
use chrono::NaiveDate;
use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("无效的报表周期: period_id={period_id}, start={start}, end={end}")]
    InvalidPeriod {
        period_id: u32,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("日期不在报表周期内: period_id={period_id}, date={date}, 周期 {start}..={end}")]
    DateOutOfPeriod {
        period_id: u32,
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("事件产量为负: line_id={line_id}, date={date}, event_index={event_index}")]
    NegativeOutput {
        line_id: LineId,
        date: NaiveDate,
        event_index: usize,
    },
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
