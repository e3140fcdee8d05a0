// ==========================================
// 灌装线产量报表 - CSV 输出
// ==========================================
// 列顺序: 灌装线, 工作体积, 加班体积, 总体积,
//         工作瓶数, 加班瓶数, 总瓶数, 日期(含本地化星期), 告警
// 末行: 合计
// ==========================================

use crate::i18n::t_in;
use crate::report::document::ReportDocument;
use crate::report::error::{ReportError, ReportResult};
use crate::report::sink::ReportSink;
use chrono::{Datelike, NaiveDate, Weekday};
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

const HEADER_KEYS: [&str; 9] = [
    "report.line",
    "report.volume_work",
    "report.volume_overtime",
    "report.volume_total",
    "report.bottles_work",
    "report.bottles_overtime",
    "report.bottles_total",
    "report.date",
    "report.warning",
];

/// 日期列格式（日.月.年）,星期按报表语言追加
const DATE_FORMAT: &str = "%d.%m.%Y";

fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "weekday.mon",
        Weekday::Tue => "weekday.tue",
        Weekday::Wed => "weekday.wed",
        Weekday::Thu => "weekday.thu",
        Weekday::Fri => "weekday.fri",
        Weekday::Sat => "weekday.sat",
        Weekday::Sun => "weekday.sun",
    }
}

fn format_date(date: NaiveDate, locale: &str) -> String {
    format!(
        "{} {}",
        date.format(DATE_FORMAT),
        t_in(weekday_key(date.weekday()), locale)
    )
}

pub struct CsvReportSink<W: Write> {
    writer: Writer<W>,
}

impl CsvReportSink<File> {
    /// 写入文件
    pub fn from_path<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let writer = WriterBuilder::new().from_path(path)?;
        Ok(Self { writer })
    }
}

impl<W: Write> CsvReportSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: WriterBuilder::new().from_writer(inner),
        }
    }

    /// 取回底层 writer（已 flush）
    pub fn into_inner(self) -> ReportResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Io(e.to_string()))
    }
}

impl<W: Write> ReportSink for CsvReportSink<W> {
    fn write_report(&mut self, document: &ReportDocument) -> ReportResult<()> {
        let locale = document.locale.as_str();

        let headers: Vec<String> = HEADER_KEYS.iter().map(|key| t_in(key, locale)).collect();
        self.writer.write_record(&headers)?;

        for row in &document.rows {
            self.writer.write_record([
                row.line_name.clone(),
                row.work_volume.to_string(),
                row.overtime_volume.to_string(),
                row.total_volume.to_string(),
                row.work_bottles.to_string(),
                row.overtime_bottles.to_string(),
                row.total_bottles.to_string(),
                format_date(row.date, locale),
                row.warning_message(locale).unwrap_or_default(),
            ])?;
        }

        let totals = &document.totals;
        self.writer.write_record([
            t_in("report.totals", locale),
            totals.work_volume.to_string(),
            totals.overtime_volume.to_string(),
            totals.total_volume.to_string(),
            totals.work_bottles.to_string(),
            totals.overtime_bottles.to_string(),
            totals.total_bottles.to_string(),
            String::new(),
            String::new(),
        ])?;

        self.writer.flush()?;

        info!(
            report_id = %document.report_id,
            rows = document.rows.len(),
            warnings = totals.warning_count,
            "CSV 报表已写出"
        );
        Ok(())
    }
}
