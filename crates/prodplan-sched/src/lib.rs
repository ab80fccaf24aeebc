//! # Prodplan Scheduling Engine
//!
//! 將待生產訂單分配到機台時間窗的排程引擎

pub mod availability;
pub mod scheduler;
pub mod strategy;

// Re-export 主要類型
pub use availability::MachineAvailability;
pub use scheduler::Scheduler;
pub use strategy::MachineSelection;

use prodplan_core::{PlanEntry, PlanError};

/// 一次排程行程的結果
#[derive(Debug)]
pub struct ScheduleResult {
    /// 本次新建的排程項（與訂單供給順序一致）
    pub entries: Vec<PlanEntry>,

    /// 保留未動的生產中排程項（僅增量重排）
    pub preserved: Vec<PlanEntry>,

    /// 因產品無機台配方而跳過的訂單
    pub skipped: Vec<SkippedOrder>,

    /// 因目錄資料無效而失敗的訂單（行程不中斷）
    pub failed: Vec<FailedOrder>,
}

impl ScheduleResult {
    /// 創建空的排程結果
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            preserved: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// 成功排程的訂單數
    pub fn scheduled_count(&self) -> usize {
        self.entries.len()
    }

    /// 是否沒有任何可排程的訂單
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.preserved.is_empty()
    }

    /// 跳過訂單的ID列表（供呈現層彙總警告）
    pub fn skipped_order_ids(&self) -> Vec<i64> {
        self.skipped.iter().map(|s| s.order_id).collect()
    }
}

/// 被跳過的訂單：產品沒有任何機台配方
///
/// 目錄不完整時的正常情況，不是錯誤。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOrder {
    pub order_id: i64,
    pub product_id: i64,
}

/// 排程失敗的訂單與具體原因
#[derive(Debug)]
pub struct FailedOrder {
    pub order_id: i64,
    pub error: PlanError,
}
