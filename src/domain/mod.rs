// ==========================================
// 灌装线产量报表 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、不变量检查
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod allocation;
pub mod error;
pub mod event;
pub mod period;
pub mod shift;
pub mod types;

// 重导出核心类型
pub use allocation::{AllocationResult, AllocationWarning};
pub use error::{DomainError, DomainResult};
pub use event::{BoundaryRecord, ProductionEvent};
pub use period::{LineBucket, LineInfo, ReportingPeriod};
pub use shift::ShiftConfig;
pub use types::{AllocationRule, LineId};
