// ==========================================
// 灌装线产量报表 - JSON 输出
// ==========================================
// 整份 ReportDocument 序列化,小数以字符串保留精度
// ==========================================

use crate::report::document::ReportDocument;
use crate::report::error::ReportResult;
use crate::report::sink::ReportSink;
use std::io::Write;
use tracing::info;

pub struct JsonReportSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonReportSink<W> {
    fn write_report(&mut self, document: &ReportDocument) -> ReportResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, document)?;
        } else {
            serde_json::to_writer(&mut self.writer, document)?;
        }
        self.writer.flush()?;

        info!(
            report_id = %document.report_id,
            rows = document.rows.len(),
            "JSON 报表已写出"
        );
        Ok(())
    }
}
