// ==========================================
// 性能统计
// ==========================================
// 开关: `BOTTLING_OVERTIME_PERF=0` 关闭（默认开启）
// 输出: target = "perf"
// ==========================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

fn is_enabled() -> bool {
    match std::env::var("BOTTLING_OVERTIME_PERF") {
        Ok(v) => matches!(
            v.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "y" | "on"
        ),
        Err(_) => true,
    }
}

/// 性能统计 Guard：记录 elapsed_ms + 处理的分摊桶数
///
/// 使用方式：
/// ```ignore
/// let perf = bottling_overtime::perf::PerfGuard::new("aggregate");
/// perf.record_buckets(12);
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    buckets: AtomicU64,
    enabled: bool,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            buckets: AtomicU64::new(0),
            enabled: is_enabled(),
        }
    }

    /// 累加已处理的桶数
    pub fn record_buckets(&self, count: u64) {
        self.buckets.fetch_add(count, Ordering::Relaxed);
    }

    pub fn bucket_count(&self) -> u64 {
        self.buckets.load(Ordering::Relaxed)
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }

        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            bucket_count = self.bucket_count(),
            "done"
        );
    }
}
