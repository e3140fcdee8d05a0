// ==========================================
// 灌装线产量报表 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 业务异常以 AllocationWarning 形式挂在结果上,
//       这里只保留调用方错误与运行时错误
// ==========================================

use crate::domain::types::LineId;
use chrono::NaiveDate;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 前置条件违反 =====
    #[error("事件列表为空: line_id={line_id}, date={date}（空桶应由调用方跳过）")]
    EmptyBucket { line_id: LineId, date: NaiveDate },

    // ===== 数值错误 =====
    #[error("数值溢出: line_id={line_id}, date={date}, field={field}")]
    ArithmeticOverflow {
        line_id: LineId,
        date: NaiveDate,
        field: &'static str,
    },

    // ===== 运行时错误 =====
    #[error("并发分摊任务失败: {0}")]
    TaskJoin(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
