use crate::report::document::ReportDocument;
use crate::report::error::ReportResult;

/// 报表输出接口
///
/// 实现者: CsvReportSink, JsonReportSink
pub trait ReportSink {
    /// 写出整份报表（按 document.rows 原顺序）
    fn write_report(&mut self, document: &ReportDocument) -> ReportResult<()>;
}
