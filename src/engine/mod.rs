// ==========================================
// 灌装线产量报表 - 引擎层
// ==========================================
// 职责: 工作时间/加班时间分摊,按周期汇总
// 红线: 纯计算,无 I/O,无共享可变状态
// ==========================================

pub mod aggregator;
pub mod allocation;
pub mod error;

// 重导出核心引擎
pub use aggregator::PeriodAggregator;
pub use allocation::AllocationEngine;
pub use error::{EngineError, EngineResult};
