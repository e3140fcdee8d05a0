// ==========================================
// ReportTotals - 合计行
// ==========================================
// 口径: 所有输出行逐列求和（含带告警的行）
// 红线: 溢出报错,不回绕、不截断
// ==========================================

use crate::domain::allocation::AllocationResult;
use crate::report::error::{ReportError, ReportResult};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportTotals {
    pub work_volume: Decimal,
    pub overtime_volume: Decimal,
    pub total_volume: Decimal,
    pub work_bottles: i64,
    pub overtime_bottles: i64,
    pub total_bottles: i64,
    pub warning_count: usize,
}

impl ReportTotals {
    pub fn from_results(results: &[AllocationResult]) -> ReportResult<Self> {
        let mut acc = Self::default();

        for row in results {
            acc.work_volume = add_volume(acc.work_volume, row.work_volume, "work_volume")?;
            acc.overtime_volume =
                add_volume(acc.overtime_volume, row.overtime_volume, "overtime_volume")?;
            acc.total_volume = add_volume(acc.total_volume, row.total_volume, "total_volume")?;
            acc.work_bottles = add_bottles(acc.work_bottles, row.work_bottles, "work_bottles")?;
            acc.overtime_bottles =
                add_bottles(acc.overtime_bottles, row.overtime_bottles, "overtime_bottles")?;
            acc.total_bottles =
                add_bottles(acc.total_bottles, row.total_bottles, "total_bottles")?;
            if row.has_warning() {
                acc.warning_count += 1;
            }
        }

        Ok(acc)
    }
}

fn add_volume(acc: Decimal, value: Decimal, field: &'static str) -> ReportResult<Decimal> {
    acc.checked_add(value)
        .ok_or(ReportError::TotalsOverflow { field })
}

fn add_bottles(acc: i64, value: i64, field: &'static str) -> ReportResult<i64> {
    acc.checked_add(value)
        .ok_or(ReportError::TotalsOverflow { field })
}
