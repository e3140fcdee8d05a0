// ==========================================
// 灌装线产量报表 - 核心库
// ==========================================
// 职责: 按 灌装线 × 日期 拆分工作时间与加班时间的产量
// 系统定位: 纯计算引擎 + 报表数据输出
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分摊与汇总
pub mod engine;

// 配置层 - 班次默认值
pub mod config;

// 数据库基础设施（配置库连接）
pub mod db;

// 报表输出层
pub mod report;

// 应用层 - 请求加载
pub mod app;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    AllocationResult, AllocationRule, AllocationWarning, BoundaryRecord, DomainError,
    DomainResult, LineBucket, LineId, LineInfo, ProductionEvent, ReportingPeriod, ShiftConfig,
};

pub use engine::{AllocationEngine, EngineError, EngineResult, PeriodAggregator};

pub use report::{CsvReportSink, JsonReportSink, ReportDocument, ReportSink, ReportTotals};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
