// ==========================================
// 灌装线产量报表 - 报表请求
// ==========================================
// 输入: 已从事件库取出的 JSON 包（周期 + 单线单日桶）
// 输出: ReportingPeriod 列表
// 红线: 周期未带班次配置时使用配置库默认值
// ==========================================

use crate::app::error::AppResult;
use crate::domain::event::{BoundaryRecord, ProductionEvent};
use crate::domain::period::{LineBucket, LineInfo, ReportingPeriod};
use crate::domain::shift::ShiftConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub periods: Vec<PeriodRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    pub period_id: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub shift: Option<ShiftConfig>,
    #[serde(default)]
    pub buckets: Vec<BucketRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketRequest {
    pub date: NaiveDate,
    pub line: LineInfo,
    #[serde(default)]
    pub events: Vec<ProductionEvent>,
    #[serde(default)]
    pub boundary: Option<BoundaryRecord>,
}

impl ReportRequest {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let request = Self::from_json(&raw)?;
        info!(
            path = %path.as_ref().display(),
            periods = request.periods.len(),
            "报表请求已加载"
        );
        Ok(request)
    }

    /// 转换为报表周期（保留输入顺序）
    ///
    /// 周期外日期、负产量直接报错,不会在汇总时被丢弃
    pub fn into_periods(self, default_shift: &ShiftConfig) -> AppResult<Vec<ReportingPeriod>> {
        let mut periods = Vec::with_capacity(self.periods.len());

        for request in self.periods {
            let shift = request.shift.unwrap_or(*default_shift);
            let mut period =
                ReportingPeriod::new(request.period_id, shift, request.start_date, request.end_date)?;

            for bucket in request.buckets {
                period.insert_bucket(
                    bucket.date,
                    LineBucket {
                        line: bucket.line,
                        events: bucket.events,
                        boundary: bucket.boundary,
                    },
                )?;
            }

            periods.push(period);
        }

        Ok(periods)
    }
}
