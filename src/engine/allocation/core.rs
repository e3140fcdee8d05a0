// ==========================================
// 灌装线产量报表 - 分摊引擎
// ==========================================
// 红线: 事件列表非空且按发生顺序排列（调用方保证）
// 红线: 业务异常只产出告警,不中断计算
// ==========================================

use crate::domain::allocation::AllocationResult;
use crate::domain::event::{BoundaryRecord, ProductionEvent};
use crate::domain::period::LineInfo;
use crate::domain::shift::ShiftConfig;
use crate::engine::error::{EngineError, EngineResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::rules::{self, AllocationContext};

// ==========================================
// AllocationEngine - 分摊引擎
// ==========================================
// 无状态引擎,班次配置通过参数传入
#[derive(Debug, Default, Clone, Copy)]
pub struct AllocationEngine {}

impl AllocationEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算单线单日的工作/加班分摊
    ///
    /// # 参数
    /// - `line`: 灌装线
    /// - `date`: 报表日期
    /// - `events`: 当日有序事件（不可为空）
    /// - `boundary`: 上一窗口的承接快照
    /// - `shift`: 班次配置
    ///
    /// # 返回
    /// - `Ok(AllocationResult)`: 分摊结果,可能带告警
    /// - `Err(EngineError::EmptyBucket)`: 事件列表为空
    /// - `Err(EngineError::ArithmeticOverflow)`: 合计或增量超出数值范围
    pub fn allocate(
        &self,
        line: &LineInfo,
        date: NaiveDate,
        events: &[ProductionEvent],
        boundary: Option<&BoundaryRecord>,
        shift: &ShiftConfig,
    ) -> EngineResult<AllocationResult> {
        let (Some(first), Some(last)) = (events.first(), events.last()) else {
            return Err(EngineError::EmptyBucket {
                line_id: line.line_id,
                date,
            });
        };

        let overflow = |field| EngineError::ArithmeticOverflow {
            line_id: line.line_id,
            date,
            field,
        };

        let total_volume = events
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.volume_alcohol))
            .ok_or_else(|| overflow("total_volume"))?;
        let total_bottles = events
            .iter()
            .try_fold(0i64, |acc, e| acc.checked_add(e.bottle_count))
            .ok_or_else(|| overflow("total_bottles"))?;

        let ctx = AllocationContext {
            line,
            date,
            events,
            first,
            last,
            boundary,
            shift,
            total_volume,
            total_bottles,
        };

        let rule = rules::select(&ctx);
        let split = rules::apply(rule, &ctx)?;

        debug!(
            line_id = line.line_id,
            date = %date,
            rule = %rule,
            events = events.len(),
            total_volume = %ctx.total_volume,
            overtime_volume = %split.overtime_volume,
            "分摊完成"
        );

        if let Some(warning) = &split.warning {
            warn!(
                line_id = line.line_id,
                line_name = %line.line_name,
                date = %date,
                warning = warning.message_key(),
                work_volume = %split.work_volume,
                overtime_volume = %split.overtime_volume,
                "分摊结果带告警"
            );
        }

        let mut result =
            AllocationResult::totals_only(line, date, ctx.total_volume, ctx.total_bottles, rule);
        result.work_volume = split.work_volume;
        result.overtime_volume = split.overtime_volume;
        result.work_bottles = split.work_bottles;
        result.overtime_bottles = split.overtime_bottles;
        result.warning = split.warning;

        Ok(result)
    }
}
