// ==========================================
// 灌装线产量报表 - 命令行入口
// ==========================================
// 用法: bottling-overtime <request.json> [output.csv|output.json]
// 不指定输出时 CSV 写到标准输出
// ==========================================

use anyhow::{anyhow, Context};
use bottling_overtime::app::{get_default_db_path, ReportRequest};
use bottling_overtime::config::{ConfigManager, ShiftConfigReader};
use bottling_overtime::report::{CsvReportSink, JsonReportSink, ReportDocument, ReportSink};
use bottling_overtime::{logging, PeriodAggregator};
use std::fs::File;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match std::env::var(logging::LOG_FORMAT_ENV) {
        Ok(format) if format.trim().eq_ignore_ascii_case("json") => logging::init_json(),
        _ => logging::init(),
    }

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .ok_or_else(|| anyhow!("用法: bottling-overtime <request.json> [output.csv|output.json]"))?;
    let output = args.next();

    tracing::info!("灌装线产量报表 v{}", bottling_overtime::VERSION);

    let db_path = get_default_db_path();
    tracing::info!("使用配置库: {}", db_path);
    let config = ConfigManager::new(&db_path).context("配置库初始化失败")?;
    let default_shift = config.get_default_shift_config().await?;
    let locale = config.get_report_locale()?;

    let periods = ReportRequest::from_path(&input)?.into_periods(&default_shift)?;
    let results = PeriodAggregator::new()
        .aggregate_concurrent(&periods)
        .await?;

    let document =
        ReportDocument::new(results, locale)?.with_config_snapshot(config.get_config_snapshot()?);

    for message in document.warning_messages() {
        tracing::warn!(report_id = %document.report_id, "{}", message);
    }

    match output {
        Some(path) if is_json(&path) => {
            let file = File::create(&path).with_context(|| format!("无法创建 {}", path))?;
            JsonReportSink::new(file).write_report(&document)?;
        }
        Some(path) => {
            CsvReportSink::from_path(&path)?.write_report(&document)?;
        }
        None => {
            let stdout = std::io::stdout();
            CsvReportSink::new(stdout.lock()).write_report(&document)?;
        }
    }

    Ok(())
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
