// ==========================================
// 灌装线产量报表 - 应用层
// ==========================================
// 职责: 请求加载、默认路径、错误汇总
// ==========================================

pub mod error;
pub mod paths;
pub mod request;

pub use error::{AppError, AppResult};
pub use paths::get_default_db_path;
pub use request::{BucketRequest, PeriodRequest, ReportRequest};
