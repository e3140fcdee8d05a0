// ==========================================
// 报表端到端测试
// ==========================================
// 流程: JSON 请求 → 周期 → 并发汇总 → CSV / JSON 输出
// ==========================================


use bottling_overtime::app::request::ReportRequest;
use bottling_overtime::domain::{AllocationRule, ShiftConfig};
use bottling_overtime::{
    logging, CsvReportSink, JsonReportSink, PeriodAggregator, ReportDocument, ReportSink,
};
use rust_decimal_macros::dec;
use std::fs;
use tempfile::tempdir;

const REQUEST: &str = r#"{
    "periods": [
        {
            "period_id": 1,
            "start_date": "2024-03-01",
            "end_date": "2024-03-31",
            "buckets": [
                {
                    "date": "2024-03-04",
                    "line": { "line_id": 1, "line_name": "Линия 1" },
                    "events": [
                        {
                            "volume_alcohol": "20",
                            "bottle_count": 40,
                            "begin_time": "2024-03-04T08:00:00",
                            "start_time": "08:00:00",
                            "end_time": "12:00:00",
                            "cumulative_overtime_volume": "10",
                            "cumulative_overtime_bottles": 20,
                            "create_time": "2024-03-04T12:00:00"
                        },
                        {
                            "volume_alcohol": "30",
                            "bottle_count": 60,
                            "begin_time": "2024-03-04T13:00:00",
                            "start_time": "13:00:00",
                            "end_time": "16:00:00",
                            "cumulative_overtime_volume": "0",
                            "cumulative_overtime_bottles": 0,
                            "create_time": "2024-03-04T16:00:00"
                        }
                    ],
                    "boundary": {
                        "overtime_volume": "10",
                        "overtime_bottles": 20,
                        "create_time": "2024-03-04T12:00:00"
                    }
                },
                {
                    "date": "2024-03-04",
                    "line": { "line_id": 2, "line_name": "Линия 2" },
                    "events": [
                        {
                            "volume_alcohol": "12.5",
                            "bottle_count": 25,
                            "begin_time": "2024-03-04T15:00:00",
                            "start_time": "15:00:00",
                            "end_time": "18:00:00",
                            "cumulative_overtime_volume": "0",
                            "cumulative_overtime_bottles": 0,
                            "create_time": "2024-03-04T18:00:00"
                        }
                    ],
                    "boundary": {
                        "overtime_volume": "0",
                        "overtime_bottles": 0,
                        "create_time": "2024-03-04T19:00:00"
                    }
                },
                {
                    "date": "2024-03-02",
                    "line": { "line_id": 1, "line_name": "Линия 1" },
                    "events": [
                        {
                            "volume_alcohol": "7",
                            "bottle_count": 14,
                            "begin_time": "2024-03-02T18:00:00",
                            "start_time": "18:00:00",
                            "end_time": "19:00:00",
                            "cumulative_overtime_volume": "0",
                            "cumulative_overtime_bottles": 0,
                            "create_time": "2024-03-02T19:00:00"
                        }
                    ]
                },
                {
                    "date": "2024-03-05",
                    "line": { "line_id": 3, "line_name": "Линия 3" },
                    "events": []
                }
            ]
        }
    ]
}"#;

async fn build_document(locale: &str) -> ReportDocument {
    let periods = ReportRequest::from_json(REQUEST)
        .unwrap()
        .into_periods(&ShiftConfig::default())
        .unwrap();

    let rows = PeriodAggregator::new()
        .aggregate_concurrent(&periods)
        .await
        .unwrap();

    ReportDocument::new(rows, locale).unwrap()
}

#[tokio::test]
async fn test_request_to_document() {
    logging::init_test();
    let document = build_document("en").await;

    // 03-02 在前,03-04 两条线按插入顺序; 03-05 空桶不输出
    assert_eq!(document.rows.len(), 3);
    assert_eq!(document.rows[0].applied_rule, AllocationRule::LateStart);
    assert_eq!(document.rows[0].overtime_volume, dec!(7));
    assert_eq!(document.rows[1].applied_rule, AllocationRule::BoundaryDelta);
    assert_eq!(document.rows[1].overtime_volume, dec!(20));
    assert_eq!(document.rows[1].work_volume, dec!(30));
    assert!(document.rows[2].warning.is_some());

    assert_eq!(document.totals.total_volume, dec!(69.5));
    assert_eq!(document.totals.warning_count, 1);

    let messages = document.warning_messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Линия 2"));
    assert!(messages[0].contains("2024-03-04"));
}

#[tokio::test]
async fn test_csv_file_output() {
    logging::init_test();
    let document = build_document("ru").await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let mut sink = CsvReportSink::from_path(&path).unwrap();
    sink.write_report(&document).unwrap();
    drop(sink);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // 表头 + 3 行 + 合计
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("Линия 1,0,7,7,0,14,14,02.03.2024 Сб"));
    assert!(lines[2].starts_with("Линия 1,30,20,50,60,40,100,04.03.2024 Пн"));
    assert!(lines[3].contains("Нет промежуточных данных за 2024-03-04 - Линия 2"));
    assert!(lines[4].starts_with("ИТОГО:"));
}

#[tokio::test]
async fn test_json_output_keeps_decimal_strings() {
    logging::init_test();
    let document = build_document("en").await;

    let mut sink = JsonReportSink::new(Vec::new()).compact();
    sink.write_report(&document).unwrap();
    let raw = String::from_utf8(sink.into_inner()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["rows"].as_array().unwrap().len(), 3);
    assert_eq!(value["rows"][1]["overtime_volume"], "20");
    assert_eq!(value["rows"][1]["applied_rule"], "BOUNDARY_DELTA");
    assert_eq!(value["rows"][2]["warning"]["kind"], "MISSING_INTERMEDIATE_DATA");
    assert_eq!(value["report_id"], document.report_id.to_string());
}
