// ==========================================
// 灌装线产量报表 - 报表周期领域模型
// ==========================================
// 结构: 周期 → 日期(升序) → 灌装线(插入顺序) → 事件桶
// 红线: start_date <= end_date
// 红线: 事件桶日期落在周期内,事件产量非负
// ==========================================

use crate::domain::event::{BoundaryRecord, ProductionEvent};
use crate::domain::shift::ShiftConfig;
use crate::domain::types::LineId;
use crate::domain::error::{DomainError, DomainResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// LineInfo - 灌装线
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineInfo {
    pub line_id: LineId,
    pub line_name: String,
}

impl LineInfo {
    pub fn new(line_id: LineId, line_name: impl Into<String>) -> Self {
        Self {
            line_id,
            line_name: line_name.into(),
        }
    }
}

// ==========================================
// LineBucket - 单线单日输入包
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBucket {
    pub line: LineInfo,
    pub events: Vec<ProductionEvent>,
    pub boundary: Option<BoundaryRecord>,
}

impl LineBucket {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

// ==========================================
// ReportingPeriod - 报表周期
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct ReportingPeriod {
    period_id: u32,
    shift: ShiftConfig,
    start_date: NaiveDate,
    end_date: NaiveDate,
    dates: BTreeMap<NaiveDate, Vec<LineBucket>>,
}

impl ReportingPeriod {
    /// 创建报表周期
    ///
    /// # 返回
    /// - `Err(DomainError::InvalidPeriod)`: start_date 晚于 end_date
    pub fn new(
        period_id: u32,
        shift: ShiftConfig,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> DomainResult<Self> {
        if start_date > end_date {
            return Err(DomainError::InvalidPeriod {
                period_id,
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            period_id,
            shift,
            start_date,
            end_date,
            dates: BTreeMap::new(),
        })
    }

    /// 写入某线某日的事件桶
    ///
    /// 同一日期同一条线重复写入时原位替换,保留首次插入的位置
    ///
    /// # 返回
    /// - `Err(DomainError::DateOutOfPeriod)`: 日期不在 [start_date, end_date] 内
    /// - `Err(DomainError::NegativeOutput)`: 任一事件体积或瓶数为负
    pub fn insert_bucket(&mut self, date: NaiveDate, bucket: LineBucket) -> DomainResult<()> {
        if !self.contains(date) {
            return Err(DomainError::DateOutOfPeriod {
                period_id: self.period_id,
                date,
                start: self.start_date,
                end: self.end_date,
            });
        }

        if let Some(event_index) = bucket
            .events
            .iter()
            .position(|e| e.volume_alcohol < Decimal::ZERO || e.bottle_count < 0)
        {
            return Err(DomainError::NegativeOutput {
                line_id: bucket.line.line_id,
                date,
                event_index,
            });
        }

        let lines = self.dates.entry(date).or_default();
        match lines
            .iter_mut()
            .find(|existing| existing.line.line_id == bucket.line.line_id)
        {
            Some(existing) => *existing = bucket,
            None => lines.push(bucket),
        }

        Ok(())
    }

    pub fn period_id(&self) -> u32 {
        self.period_id
    }

    pub fn shift(&self) -> &ShiftConfig {
        &self.shift
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// 按日期升序遍历
    pub fn dates(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<LineBucket>)> {
        self.dates.iter()
    }

    /// 非空事件桶数量
    pub fn bucket_count(&self) -> usize {
        self.dates
            .values()
            .flat_map(|lines| lines.iter())
            .filter(|bucket| !bucket.is_empty())
            .count()
    }
}
