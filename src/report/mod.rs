// ==========================================
// 灌装线产量报表 - 报表输出层
// ==========================================
// 职责: 把有序分摊结果交给外部输出（CSV / JSON）
// 红线: 告警必须可见,不得静默丢弃
// 说明: 不负责样式、版式
// ==========================================

pub mod csv_sink;
pub mod document;
pub mod error;
pub mod json_sink;
pub mod sink;
pub mod totals;

pub use csv_sink::CsvReportSink;
pub use document::ReportDocument;
pub use error::{ReportError, ReportResult};
pub use json_sink::JsonReportSink;
pub use sink::ReportSink;
pub use totals::ReportTotals;
