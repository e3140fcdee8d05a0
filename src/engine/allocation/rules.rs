// ==========================================
// 分摊规则: 判定 + 结果构造
// ==========================================
// 每条规则 = (matches, apply),按 AllocationRule::PRECEDENCE 顺序评估
// NoBoundary 恒命中,保证链条有兜底
// ==========================================

use crate::domain::allocation::AllocationWarning;
use crate::domain::event::{BoundaryRecord, ProductionEvent};
use crate::domain::period::LineInfo;
use crate::domain::shift::ShiftConfig;
use crate::domain::types::AllocationRule;
use crate::engine::error::{EngineError, EngineResult};
use chrono::{NaiveDate, Timelike};
use rust_decimal::Decimal;
use tracing::debug;

// ==========================================
// AllocationContext - 单桶计算上下文
// ==========================================
pub(super) struct AllocationContext<'a> {
    pub line: &'a LineInfo,
    pub date: NaiveDate,
    pub events: &'a [ProductionEvent],
    pub first: &'a ProductionEvent,
    pub last: &'a ProductionEvent,
    pub boundary: Option<&'a BoundaryRecord>,
    pub shift: &'a ShiftConfig,
    pub total_volume: Decimal,
    pub total_bottles: i64,
}

// ==========================================
// Split - 规则输出
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Split {
    pub work_volume: Decimal,
    pub overtime_volume: Decimal,
    pub work_bottles: i64,
    pub overtime_bottles: i64,
    pub warning: Option<AllocationWarning>,
}

impl Split {
    fn all_overtime(ctx: &AllocationContext<'_>) -> Self {
        Self {
            work_volume: Decimal::ZERO,
            overtime_volume: ctx.total_volume,
            work_bottles: 0,
            overtime_bottles: ctx.total_bottles,
            warning: None,
        }
    }

    fn all_work(ctx: &AllocationContext<'_>) -> Self {
        Self {
            work_volume: ctx.total_volume,
            overtime_volume: Decimal::ZERO,
            work_bottles: ctx.total_bottles,
            overtime_bottles: 0,
            warning: None,
        }
    }

    /// 无法拆分: 工作/加班字段保持为零,只挂告警
    fn unresolved(warning: AllocationWarning) -> Self {
        Self {
            work_volume: Decimal::ZERO,
            overtime_volume: Decimal::ZERO,
            work_bottles: 0,
            overtime_bottles: 0,
            warning: Some(warning),
        }
    }
}

// ==========================================
// 规则判定
// ==========================================

/// 规则是否命中当前上下文
pub(super) fn matches(rule: AllocationRule, ctx: &AllocationContext<'_>) -> bool {
    match rule {
        // 只看首个事件启动时刻（日期部分忽略）
        AllocationRule::LateStart => ctx.first.begin_time.time() > ctx.shift.shift_end_time,
        AllocationRule::NonWorkingSaturday => ctx.shift.is_non_working_day(ctx.date),
        AllocationRule::BoundaryDelta => ctx.boundary.is_some(),
        AllocationRule::NoBoundary => true,
    }
}

/// 按优先级选出第一条命中的规则
pub(super) fn select(ctx: &AllocationContext<'_>) -> AllocationRule {
    AllocationRule::PRECEDENCE
        .into_iter()
        .find(|rule| matches(*rule, ctx))
        .unwrap_or(AllocationRule::NoBoundary)
}

// ==========================================
// 结果构造
// ==========================================

pub(super) fn apply(rule: AllocationRule, ctx: &AllocationContext<'_>) -> EngineResult<Split> {
    match rule {
        AllocationRule::LateStart | AllocationRule::NonWorkingSaturday => {
            Ok(Split::all_overtime(ctx))
        }
        AllocationRule::BoundaryDelta => match ctx.boundary {
            Some(boundary) => boundary_delta(ctx, boundary),
            None => Ok(Split::all_work(ctx)),
        },
        AllocationRule::NoBoundary => Ok(Split::all_work(ctx)),
    }
}

fn overflow(ctx: &AllocationContext<'_>, field: &'static str) -> EngineError {
    EngineError::ArithmeticOverflow {
        line_id: ctx.line.line_id,
        date: ctx.date,
        field,
    }
}

/// 承接增量规则
///
/// 1. 快照写入小时晚于下班小时时做缺口检查: 任一事件跨越下班时间即无法拆分
/// 2. 加班 = (末事件累计加班 + 末事件产量) - 快照累计加班; 工作 = 合计 - 加班
/// 3. 负值原样保留,挂 InconsistentDelta 告警
/// 4. 任一步溢出返回 ArithmeticOverflow
fn boundary_delta(
    ctx: &AllocationContext<'_>,
    boundary: &BoundaryRecord,
) -> EngineResult<Split> {
    let shift_end = ctx.shift.shift_end_time;

    if boundary.create_time.hour() > shift_end.hour() {
        if let Some(event) = ctx.events.iter().find(|e| e.straddles(shift_end)) {
            debug!(
                line_id = ctx.line.line_id,
                date = %ctx.date,
                start_time = %event.start_time,
                end_time = %event.end_time,
                "事件跨越下班时间且缺少中间数据"
            );
            return Ok(Split::unresolved(
                AllocationWarning::MissingIntermediateData,
            ));
        }
    }

    let overtime_volume = ctx
        .last
        .overtime_volume_through()
        .and_then(|through| through.checked_sub(boundary.overtime_volume))
        .ok_or_else(|| overflow(ctx, "overtime_volume"))?;
    let overtime_bottles = ctx
        .last
        .overtime_bottles_through()
        .and_then(|through| through.checked_sub(boundary.overtime_bottles))
        .ok_or_else(|| overflow(ctx, "overtime_bottles"))?;
    let work_volume = ctx
        .total_volume
        .checked_sub(overtime_volume)
        .ok_or_else(|| overflow(ctx, "work_volume"))?;
    let work_bottles = ctx
        .total_bottles
        .checked_sub(overtime_bottles)
        .ok_or_else(|| overflow(ctx, "work_bottles"))?;

    let inconsistent = overtime_volume < Decimal::ZERO
        || overtime_bottles < 0
        || work_volume < Decimal::ZERO
        || work_bottles < 0;

    Ok(Split {
        work_volume,
        overtime_volume,
        work_bottles,
        overtime_bottles,
        warning: inconsistent.then_some(AllocationWarning::InconsistentDelta {
            overtime_volume,
            overtime_bottles,
        }),
    })
}
