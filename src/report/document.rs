// ==========================================
// ReportDocument - 一次报表生成的输出包
// ==========================================

use crate::domain::allocation::AllocationResult;
use crate::report::error::ReportResult;
use crate::report::totals::ReportTotals;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub report_id: Uuid,
    pub generated_at: NaiveDateTime,

    /// 告警文本与表头语言
    pub locale: String,

    /// 生成时使用的配置快照 (JSON)
    pub config_snapshot: Option<String>,

    /// 有序分摊结果（周期 → 日期 → 灌装线）
    pub rows: Vec<AllocationResult>,

    pub totals: ReportTotals,
}

impl ReportDocument {
    /// 组装报表并计算合计行
    ///
    /// # 返回
    /// - `Err(ReportError::TotalsOverflow)`: 合计超出数值范围
    pub fn new(rows: Vec<AllocationResult>, locale: impl Into<String>) -> ReportResult<Self> {
        let totals = ReportTotals::from_results(&rows)?;
        Ok(Self {
            report_id: Uuid::new_v4(),
            generated_at: Local::now().naive_local(),
            locale: locale.into(),
            config_snapshot: None,
            rows,
            totals,
        })
    }

    pub fn with_config_snapshot(mut self, snapshot: String) -> Self {
        self.config_snapshot = Some(snapshot);
        self
    }

    /// 全部告警文本（按行顺序）
    pub fn warning_messages(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.warning_message(&self.locale))
            .collect()
    }
}
