//! 訂單佇列輔助
//!
//! 待生產訂單的標準供給順序與看板統計。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::order::{OrderPriority, OrderStatus, ProductionOrder};

/// 按標準順序排序：交期升冪，同交期按優先級（High 在前）
///
/// 持久層以同樣的順序供給訂單；行程內組裝的訂單列表用此函數
/// 對齊順序。
pub fn sort_pending(orders: &mut [ProductionOrder]) {
    orders.sort_by_key(|o| (o.deadline, o.priority));
}

/// 訂單佇列統計（看板 KPI）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSummary {
    /// 排隊中訂單數
    pub in_queue: usize,

    /// 生產中訂單數
    pub in_progress: usize,

    /// 已完成訂單數
    pub completed: usize,

    /// 逾期訂單數（交期已過且未完成）
    pub late: usize,

    /// 排隊中高優先級訂單數
    pub queued_high: usize,

    /// 排隊中中優先級訂單數
    pub queued_medium: usize,

    /// 排隊中低優先級訂單數
    pub queued_low: usize,
}

impl QueueSummary {
    /// 從訂單列表推導統計
    pub fn from_orders(orders: &[ProductionOrder], today: NaiveDate) -> Self {
        let mut summary = Self {
            in_queue: 0,
            in_progress: 0,
            completed: 0,
            late: 0,
            queued_high: 0,
            queued_medium: 0,
            queued_low: 0,
        };

        for order in orders {
            match order.status {
                OrderStatus::InQueue => {
                    summary.in_queue += 1;
                    match order.priority {
                        OrderPriority::High => summary.queued_high += 1,
                        OrderPriority::Medium => summary.queued_medium += 1,
                        OrderPriority::Low => summary.queued_low += 1,
                    }
                }
                OrderStatus::InProgress => summary.in_progress += 1,
                OrderStatus::Completed => summary.completed += 1,
            }
            if order.is_late(today) {
                summary.late += 1;
            }
        }

        summary
    }

    /// 訂單總數
    pub fn total(&self) -> usize {
        self.in_queue + self.in_progress + self.completed
    }
}
