// ==========================================
// 灌装线产量报表 - 周期汇总器
// ==========================================
// 职责: 周期 × 日期 × 灌装线 逐桶调用分摊引擎
// 红线: 输出顺序 = 周期输入顺序 → 日期升序 → 灌装线插入顺序
// 红线: 空桶不输出; 告警原样透传,不因单桶告警中断
// ==========================================

use crate::domain::allocation::AllocationResult;
use crate::domain::period::{LineBucket, ReportingPeriod};
use crate::domain::shift::ShiftConfig;
use crate::engine::allocation::AllocationEngine;
use crate::engine::error::{EngineError, EngineResult};
use crate::perf::PerfGuard;
use chrono::NaiveDate;
use futures::future::try_join_all;
use tracing::{debug, info};

/// 待分摊的单个桶（借用周期数据）
struct BucketRef<'a> {
    date: NaiveDate,
    shift: &'a ShiftConfig,
    bucket: &'a LineBucket,
}

// ==========================================
// PeriodAggregator - 周期汇总器
// ==========================================
#[derive(Debug, Default, Clone)]
pub struct PeriodAggregator {
    engine: AllocationEngine,
}

impl PeriodAggregator {
    pub fn new() -> Self {
        Self {
            engine: AllocationEngine::new(),
        }
    }

    /// 按稳定顺序列出所有非空桶
    ///
    /// 桶日期已由 `ReportingPeriod::insert_bucket` 限定在周期内; 空桶跳过
    fn ordered_buckets(periods: &[ReportingPeriod]) -> Vec<BucketRef<'_>> {
        let mut buckets = Vec::new();

        for period in periods {
            for (date, lines) in period.dates() {
                for bucket in lines {
                    if bucket.is_empty() {
                        debug!(
                            period_id = period.period_id(),
                            line_id = bucket.line.line_id,
                            date = %date,
                            "空桶,跳过"
                        );
                        continue;
                    }

                    buckets.push(BucketRef {
                        date: *date,
                        shift: period.shift(),
                        bucket,
                    });
                }
            }
        }

        buckets
    }

    /// 顺序汇总
    ///
    /// # 返回
    /// 按 周期 → 日期 → 灌装线 排列的分摊结果
    pub fn aggregate(&self, periods: &[ReportingPeriod]) -> EngineResult<Vec<AllocationResult>> {
        let perf = PerfGuard::new("aggregate");
        let buckets = Self::ordered_buckets(periods);
        perf.record_buckets(buckets.len() as u64);

        let results = buckets
            .iter()
            .map(|item| {
                self.engine.allocate(
                    &item.bucket.line,
                    item.date,
                    &item.bucket.events,
                    item.bucket.boundary.as_ref(),
                    item.shift,
                )
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Self::log_summary(periods.len(), &results);
        Ok(results)
    }

    /// 并发汇总
    ///
    /// 每个桶在阻塞线程池上独立计算,完成后按原顺序重排,
    /// 输出与 `aggregate` 完全一致
    pub async fn aggregate_concurrent(
        &self,
        periods: &[ReportingPeriod],
    ) -> EngineResult<Vec<AllocationResult>> {
        let perf = PerfGuard::new("aggregate_concurrent");
        let buckets = Self::ordered_buckets(periods);
        perf.record_buckets(buckets.len() as u64);

        let handles = buckets.into_iter().enumerate().map(|(seq, item)| {
            let engine = self.engine;
            let date = item.date;
            let shift = *item.shift;
            let bucket = item.bucket.clone();

            tokio::task::spawn_blocking(move || {
                engine
                    .allocate(
                        &bucket.line,
                        date,
                        &bucket.events,
                        bucket.boundary.as_ref(),
                        &shift,
                    )
                    .map(|result| (seq, result))
            })
        });

        let joined = try_join_all(handles)
            .await
            .map_err(|e| EngineError::TaskJoin(e.to_string()))?;

        let mut indexed = joined.into_iter().collect::<EngineResult<Vec<_>>>()?;
        indexed.sort_by_key(|(seq, _)| *seq);

        let results: Vec<AllocationResult> =
            indexed.into_iter().map(|(_, result)| result).collect();

        Self::log_summary(periods.len(), &results);
        Ok(results)
    }

    /// 挑出带告警的结果（供报表侧审计展示）
    pub fn warnings(results: &[AllocationResult]) -> Vec<&AllocationResult> {
        results.iter().filter(|r| r.has_warning()).collect()
    }

    fn log_summary(period_count: usize, results: &[AllocationResult]) {
        info!(
            periods = period_count,
            results = results.len(),
            warnings = Self::warnings(results).len(),
            "周期汇总完成"
        );
    }
}
