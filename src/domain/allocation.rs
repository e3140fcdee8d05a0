// ==========================================
// 灌装线产量报表 - 分摊结果领域模型
// ==========================================
// 红线: 无警告时 work + overtime == total（体积与瓶数均精确成立）
// 生命周期: 每次生成报表时新建,渲染后丢弃
// ==========================================

use crate::domain::period::LineInfo;
use crate::domain::types::{AllocationRule, LineId};
use crate::i18n;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// AllocationWarning - 非致命告警
// ==========================================
// 报表侧必须作为审计标记展示,不得丢弃
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationWarning {
    /// 有事件跨越下班时间,但缺少可拆分的中间数据
    MissingIntermediateData,

    /// 加班增量或由此推出的工作量为负（数据不一致,原值保留）
    InconsistentDelta {
        overtime_volume: Decimal,
        overtime_bottles: i64,
    },
}

impl AllocationWarning {
    /// i18n 消息键
    pub fn message_key(&self) -> &'static str {
        match self {
            AllocationWarning::MissingIntermediateData => "warning.missing_intermediate_data",
            AllocationWarning::InconsistentDelta { .. } => "warning.inconsistent_delta",
        }
    }
}

// ==========================================
// AllocationResult - 单线单日分摊结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub line_id: LineId,
    pub line_name: String,
    pub date: NaiveDate,

    // ===== 体积 =====
    pub total_volume: Decimal,
    pub work_volume: Decimal,
    pub overtime_volume: Decimal,

    // ===== 瓶数 =====
    pub total_bottles: i64,
    pub work_bottles: i64,
    pub overtime_bottles: i64,

    /// 生效的分摊规则
    pub applied_rule: AllocationRule,

    pub warning: Option<AllocationWarning>,
}

impl AllocationResult {
    /// 仅含合计的空结果（工作/加班字段为零）
    pub fn totals_only(
        line: &LineInfo,
        date: NaiveDate,
        total_volume: Decimal,
        total_bottles: i64,
        applied_rule: AllocationRule,
    ) -> Self {
        Self {
            line_id: line.line_id,
            line_name: line.line_name.clone(),
            date,
            total_volume,
            work_volume: Decimal::ZERO,
            overtime_volume: Decimal::ZERO,
            total_bottles,
            work_bottles: 0,
            overtime_bottles: 0,
            applied_rule,
            warning: None,
        }
    }

    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// 工作 + 加班 是否与合计严格相等
    pub fn is_balanced(&self) -> bool {
        self.work_volume + self.overtime_volume == self.total_volume
            && self.work_bottles + self.overtime_bottles == self.total_bottles
    }

    /// 告警文本（含线名与日期）,按指定语言渲染
    pub fn warning_message(&self, locale: &str) -> Option<String> {
        let warning = self.warning.as_ref()?;
        let date = self.date.format("%Y-%m-%d").to_string();

        let message = match warning {
            AllocationWarning::MissingIntermediateData => i18n::t_in_with_args(
                warning.message_key(),
                locale,
                &[("line", &self.line_name), ("date", &date)],
            ),
            AllocationWarning::InconsistentDelta {
                overtime_volume,
                overtime_bottles,
            } => i18n::t_in_with_args(
                warning.message_key(),
                locale,
                &[
                    ("line", &self.line_name),
                    ("date", &date),
                    ("volume", &overtime_volume.to_string()),
                    ("bottles", &overtime_bottles.to_string()),
                ],
            ),
        };

        Some(message)
    }
}
