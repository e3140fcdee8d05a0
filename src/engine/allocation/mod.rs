// ==========================================
// 灌装线产量报表 - 分摊引擎
// ==========================================
// 输入: 单线单日有序事件 + 承接快照(可选) + 班次配置
// 输出: AllocationResult (工作/加班 体积与瓶数)
// ==========================================
// 规则优先级: 晚启动 > 周六休息日 > 承接增量 > 无承接
// ==========================================

mod core;
mod rules;

#[cfg(test)]
mod tests;

pub use core::AllocationEngine;
