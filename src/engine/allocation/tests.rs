use super::*;
use crate::domain::allocation::AllocationWarning;
use crate::domain::event::{BoundaryRecord, ProductionEvent};
use crate::domain::period::LineInfo;
use crate::domain::shift::ShiftConfig;
use crate::domain::types::AllocationRule;
use crate::engine::error::EngineError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ==========================================
// 测试辅助函数
// ==========================================

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// 2024-03-04 周一
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

/// 2024-03-09 周六
fn saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

fn stamp(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_time(at(h, m))
}

fn line() -> LineInfo {
    LineInfo::new(1, "Линия 1")
}

fn shift_until(h: u32) -> ShiftConfig {
    ShiftConfig::new(at(h, 0), false)
}

/// 创建测试用的生产事件
fn create_test_event(
    date: NaiveDate,
    start: (u32, u32),
    end: (u32, u32),
    volume: Decimal,
    bottles: i64,
    cumulative_overtime: (Decimal, i64),
) -> ProductionEvent {
    ProductionEvent {
        volume_alcohol: volume,
        bottle_count: bottles,
        begin_time: stamp(date, start.0, start.1),
        start_time: at(start.0, start.1),
        end_time: at(end.0, end.1),
        cumulative_overtime_volume: cumulative_overtime.0,
        cumulative_overtime_bottles: cumulative_overtime.1,
        create_time: stamp(date, end.0, end.1),
    }
}

fn boundary(volume: Decimal, bottles: i64, created: NaiveDateTime) -> BoundaryRecord {
    BoundaryRecord {
        overtime_volume: volume,
        overtime_bottles: bottles,
        create_time: created,
    }
}

// ==========================================
// 前置条件
// ==========================================

#[test]
fn test_empty_events_is_precondition_error() {
    let engine = AllocationEngine::new();
    let err = engine
        .allocate(&line(), monday(), &[], None, &shift_until(17))
        .unwrap_err();

    assert!(matches!(err, EngineError::EmptyBucket { line_id: 1, .. }));
}

#[test]
fn test_bottle_total_overflow_is_error() {
    let engine = AllocationEngine::new();
    let events = vec![
        create_test_event(monday(), (8, 0), (9, 0), dec!(1), i64::MAX, (dec!(0), 0)),
        create_test_event(monday(), (9, 0), (10, 0), dec!(1), 1, (dec!(0), 0)),
    ];

    let err = engine
        .allocate(&line(), monday(), &events, None, &shift_until(17))
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::ArithmeticOverflow {
            line_id: 1,
            field: "total_bottles",
            ..
        }
    ));
}

#[test]
fn test_cumulative_overflow_in_delta_is_error() {
    let engine = AllocationEngine::new();
    let events = vec![create_test_event(
        monday(),
        (8, 0),
        (12, 0),
        dec!(1),
        10,
        (dec!(0), i64::MAX),
    )];
    let carried = boundary(dec!(0), 0, stamp(monday(), 9, 0));

    let err = engine
        .allocate(&line(), monday(), &events, Some(&carried), &shift_until(17))
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::ArithmeticOverflow {
            field: "overtime_bottles",
            ..
        }
    ));
}

// ==========================================
// 规则 2: 晚启动
// ==========================================

#[test]
fn test_late_start_is_fully_overtime() {
    let engine = AllocationEngine::new();
    let events = vec![create_test_event(
        monday(),
        (18, 0),
        (20, 0),
        dec!(75.5),
        300,
        (dec!(0), 0),
    )];

    let result = engine
        .allocate(&line(), monday(), &events, None, &shift_until(17))
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::LateStart);
    assert_eq!(result.work_volume, Decimal::ZERO);
    assert_eq!(result.overtime_volume, dec!(75.5));
    assert_eq!(result.work_bottles, 0);
    assert_eq!(result.overtime_bottles, 300);
    assert!(result.warning.is_none());
}

#[test]
fn test_late_start_overrides_saturday_and_boundary() {
    let engine = AllocationEngine::new();
    let events = vec![create_test_event(
        saturday(),
        (19, 0),
        (21, 0),
        dec!(10),
        20,
        (dec!(100), 200),
    )];
    let carried = boundary(dec!(1), 1, stamp(saturday(), 8, 0));
    let shift = ShiftConfig::new(at(17, 0), true);

    let result = engine
        .allocate(&line(), saturday(), &events, Some(&carried), &shift)
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::LateStart);
    assert_eq!(result.overtime_volume, dec!(10));
    assert_eq!(result.overtime_bottles, 20);
}

#[test]
fn test_late_start_uses_time_of_day_of_previous_day_begin() {
    let engine = AllocationEngine::new();
    let previous_day = monday().pred_opt().unwrap();
    let mut event = create_test_event(monday(), (0, 0), (2, 0), dec!(5), 10, (dec!(0), 0));
    event.begin_time = stamp(previous_day, 22, 30);

    let result = engine
        .allocate(&line(), monday(), &[event], None, &shift_until(17))
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::LateStart);
    assert_eq!(result.overtime_volume, dec!(5));
}

#[test]
fn test_begin_exactly_at_shift_end_is_not_late() {
    let engine = AllocationEngine::new();
    let events = vec![create_test_event(
        monday(),
        (17, 0),
        (18, 0),
        dec!(5),
        10,
        (dec!(0), 0),
    )];

    let result = engine
        .allocate(&line(), monday(), &events, None, &shift_until(17))
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::NoBoundary);
    assert_eq!(result.work_volume, dec!(5));
}

#[test]
fn test_only_first_event_decides_late_start() {
    let engine = AllocationEngine::new();
    let events = vec![
        create_test_event(monday(), (9, 0), (12, 0), dec!(40), 80, (dec!(0), 0)),
        create_test_event(monday(), (19, 0), (21, 0), dec!(10), 20, (dec!(0), 0)),
    ];

    let result = engine
        .allocate(&line(), monday(), &events, None, &shift_until(17))
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::NoBoundary);
    assert_eq!(result.work_volume, dec!(50));
    assert_eq!(result.work_bottles, 100);
}

// ==========================================
// 规则 3: 周六休息日
// ==========================================

#[test]
fn test_non_working_saturday_is_fully_overtime() {
    let engine = AllocationEngine::new();
    let events = vec![
        create_test_event(saturday(), (8, 0), (12, 0), dec!(30.25), 60, (dec!(0), 0)),
        create_test_event(saturday(), (13, 0), (16, 0), dec!(19.75), 40, (dec!(0), 0)),
    ];
    let carried = boundary(dec!(0), 0, stamp(saturday(), 7, 0));
    let shift = ShiftConfig::new(at(17, 0), true);

    let result = engine
        .allocate(&line(), saturday(), &events, Some(&carried), &shift)
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::NonWorkingSaturday);
    assert_eq!(result.overtime_volume, dec!(50));
    assert_eq!(result.overtime_bottles, 100);
    assert_eq!(result.work_volume, Decimal::ZERO);
    assert!(result.is_balanced());
}

#[test]
fn test_saturday_without_flag_is_regular_day() {
    let engine = AllocationEngine::new();
    let events = vec![create_test_event(
        saturday(),
        (8, 0),
        (12, 0),
        dec!(30),
        60,
        (dec!(0), 0),
    )];

    let result = engine
        .allocate(&line(), saturday(), &events, None, &shift_until(17))
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::NoBoundary);
    assert_eq!(result.work_volume, dec!(30));
}

// ==========================================
// 规则 4: 承接增量
// ==========================================

#[test]
fn test_boundary_delta_splits_by_cumulative_overtime() {
    let engine = AllocationEngine::new();
    // 末事件累计加班 25 + 本次 5 = 30, 快照 10 → 加班 20
    let events = vec![
        create_test_event(monday(), (8, 0), (15, 0), dec!(45), 90, (dec!(20), 40)),
        create_test_event(monday(), (15, 30), (16, 30), dec!(5), 10, (dec!(25), 50)),
    ];
    let carried = boundary(dec!(10), 20, stamp(monday(), 17, 45));

    let result = engine
        .allocate(&line(), monday(), &events, Some(&carried), &shift_until(17))
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::BoundaryDelta);
    assert_eq!(result.total_volume, dec!(50));
    assert_eq!(result.overtime_volume, dec!(20));
    assert_eq!(result.work_volume, dec!(30));
    assert_eq!(result.total_bottles, 100);
    assert_eq!(result.overtime_bottles, 40);
    assert_eq!(result.work_bottles, 60);
    assert!(result.warning.is_none());
    assert!(result.is_balanced());
}

#[test]
fn test_stale_boundary_with_straddling_event_warns() {
    let engine = AllocationEngine::new();
    let events = vec![
        create_test_event(monday(), (8, 0), (12, 0), dec!(30), 60, (dec!(0), 0)),
        create_test_event(monday(), (16, 0), (18, 30), dec!(20), 40, (dec!(0), 0)),
    ];
    let carried = boundary(dec!(0), 0, stamp(monday(), 19, 5));

    let result = engine
        .allocate(&line(), monday(), &events, Some(&carried), &shift_until(17))
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::BoundaryDelta);
    assert_eq!(result.warning, Some(AllocationWarning::MissingIntermediateData));
    assert_eq!(result.total_volume, dec!(50));
    assert_eq!(result.total_bottles, 100);
    assert_eq!(result.work_volume, Decimal::ZERO);
    assert_eq!(result.overtime_volume, Decimal::ZERO);
    assert_eq!(result.work_bottles, 0);
    assert_eq!(result.overtime_bottles, 0);
}

#[test]
fn test_stale_boundary_without_straddle_uses_delta() {
    let engine = AllocationEngine::new();
    let events = vec![
        create_test_event(monday(), (8, 0), (16, 0), dec!(30), 60, (dec!(4), 8)),
        create_test_event(monday(), (17, 0), (18, 0), dec!(10), 20, (dec!(4), 8)),
    ];
    let carried = boundary(dec!(4), 8, stamp(monday(), 18, 10));

    let result = engine
        .allocate(&line(), monday(), &events, Some(&carried), &shift_until(17))
        .unwrap();

    // 不保留逐事件拆分,只认增量
    assert!(result.warning.is_none());
    assert_eq!(result.overtime_volume, dec!(10));
    assert_eq!(result.work_volume, dec!(30));
    assert_eq!(result.overtime_bottles, 20);
    assert_eq!(result.work_bottles, 60);
}

#[test]
fn test_fresh_boundary_skips_gap_check() {
    let engine = AllocationEngine::new();
    // 快照小时 == 下班小时,跨越事件不触发缺口检查
    let events = vec![create_test_event(
        monday(),
        (16, 0),
        (18, 0),
        dec!(20),
        40,
        (dec!(12), 24),
    )];
    let carried = boundary(dec!(22), 44, stamp(monday(), 17, 59));

    let result = engine
        .allocate(&line(), monday(), &events, Some(&carried), &shift_until(17))
        .unwrap();

    assert!(result.warning.is_none());
    assert_eq!(result.overtime_volume, dec!(10));
    assert_eq!(result.work_volume, dec!(10));
    assert_eq!(result.overtime_bottles, 20);
    assert_eq!(result.work_bottles, 20);
}

#[test]
fn test_negative_delta_is_kept_and_flagged() {
    let engine = AllocationEngine::new();
    let events = vec![create_test_event(
        monday(),
        (8, 0),
        (12, 0),
        dec!(10),
        20,
        (dec!(5), 10),
    )];
    let carried = boundary(dec!(17.5), 36, stamp(monday(), 9, 0));

    let result = engine
        .allocate(&line(), monday(), &events, Some(&carried), &shift_until(17))
        .unwrap();

    assert_eq!(result.overtime_volume, dec!(-2.5));
    assert_eq!(result.work_volume, dec!(12.5));
    assert_eq!(result.overtime_bottles, -6);
    assert_eq!(result.work_bottles, 26);
    assert_eq!(
        result.warning,
        Some(AllocationWarning::InconsistentDelta {
            overtime_volume: dec!(-2.5),
            overtime_bottles: -6,
        })
    );
    assert!(result.is_balanced());
}

#[test]
fn test_overtime_larger_than_total_is_flagged() {
    let engine = AllocationEngine::new();
    let events = vec![create_test_event(
        monday(),
        (8, 0),
        (12, 0),
        dec!(10),
        20,
        (dec!(50), 100),
    )];
    let carried = boundary(dec!(0), 0, stamp(monday(), 9, 0));

    let result = engine
        .allocate(&line(), monday(), &events, Some(&carried), &shift_until(17))
        .unwrap();

    assert_eq!(result.overtime_volume, dec!(60));
    assert_eq!(result.work_volume, dec!(-50));
    assert!(matches!(
        result.warning,
        Some(AllocationWarning::InconsistentDelta { .. })
    ));
}

#[test]
fn test_zero_delta_is_not_flagged() {
    let engine = AllocationEngine::new();
    let events = vec![create_test_event(
        monday(),
        (8, 0),
        (12, 0),
        dec!(10.00),
        20,
        (dec!(0), 0),
    )];
    let carried = boundary(dec!(10), 20, stamp(monday(), 9, 0));

    let result = engine
        .allocate(&line(), monday(), &events, Some(&carried), &shift_until(17))
        .unwrap();

    assert!(result.warning.is_none());
    assert!(result.overtime_volume.is_zero());
    assert_eq!(result.work_volume, dec!(10));
}

// ==========================================
// 规则 5: 无承接
// ==========================================

#[test]
fn test_no_boundary_is_fully_work_time() {
    let engine = AllocationEngine::new();
    let events = vec![create_test_event(
        monday(),
        (8, 0),
        (16, 0),
        dec!(100),
        50,
        (dec!(70), 35),
    )];

    let result = engine
        .allocate(&line(), monday(), &events, None, &shift_until(17))
        .unwrap();

    assert_eq!(result.applied_rule, AllocationRule::NoBoundary);
    assert_eq!(result.work_volume, dec!(100));
    assert_eq!(result.work_bottles, 50);
    assert_eq!(result.overtime_volume, Decimal::ZERO);
    assert_eq!(result.overtime_bottles, 0);
    assert_eq!(result.line_name, "Линия 1");
    assert_eq!(result.date, monday());
}

#[test]
fn test_totals_are_decimal_exact() {
    let engine = AllocationEngine::new();
    let events: Vec<ProductionEvent> = (0..10)
        .map(|i| create_test_event(monday(), (8 + i, 0), (8 + i, 30), dec!(0.1), 1, (dec!(0), 0)))
        .collect();

    let result = engine
        .allocate(&line(), monday(), &events, None, &shift_until(17))
        .unwrap();

    assert_eq!(result.total_volume, dec!(1.0));
    assert!(result.is_balanced());
}
