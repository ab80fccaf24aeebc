//! 生產訂單模型

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::time::optional_timestamp_format;
use crate::PlanError;

/// 訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// 排隊中
    InQueue,
    /// 生產中
    InProgress,
    /// 已完成
    Completed,
}

impl OrderStatus {
    /// 文字形式（與既有資料列一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InQueue => "in_queue",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
        }
    }
}

/// 訂單優先級
///
/// 封閉枚舉，數值越小越緊急（1=High, 2=Medium, 3=Low）。
/// 排序時 High 在前。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum OrderPriority {
    /// 高
    High,
    /// 中
    Medium,
    /// 低
    Low,
}

impl OrderPriority {
    /// 持久化用的整數形式
    pub fn as_i64(&self) -> i64 {
        match self {
            OrderPriority::High => 1,
            OrderPriority::Medium => 2,
            OrderPriority::Low => 3,
        }
    }

    /// 顯示標籤
    pub fn label(&self) -> &'static str {
        match self {
            OrderPriority::High => "High",
            OrderPriority::Medium => "Medium",
            OrderPriority::Low => "Low",
        }
    }
}

impl TryFrom<i64> for OrderPriority {
    type Error = PlanError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(OrderPriority::High),
            2 => Ok(OrderPriority::Medium),
            3 => Ok(OrderPriority::Low),
            other => Err(PlanError::InvalidPriority(other)),
        }
    }
}

impl From<OrderPriority> for i64 {
    fn from(priority: OrderPriority) -> Self {
        priority.as_i64()
    }
}

/// 生產訂單
///
/// 由接單端創建；排程器只改寫狀態與指派機台，其餘欄位對核心唯讀。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrder {
    /// 訂單ID
    pub id: i64,

    /// 產品ID
    pub product_id: i64,

    /// 訂購數量（正整數）
    pub quantity: i64,

    /// 交期
    pub deadline: NaiveDate,

    /// 狀態
    pub status: OrderStatus,

    /// 優先級
    pub priority: OrderPriority,

    /// 創建日期
    pub created_at: NaiveDate,

    /// 已指派機台
    pub assigned_machine_id: Option<i64>,

    /// 實際開工時間
    #[serde(with = "optional_timestamp_format")]
    pub started_at: Option<NaiveDateTime>,
}

impl ProductionOrder {
    /// 創建新的生產訂單（狀態為排隊中）
    pub fn new(
        id: i64,
        product_id: i64,
        quantity: i64,
        deadline: NaiveDate,
        priority: OrderPriority,
    ) -> Self {
        Self {
            id,
            product_id,
            quantity,
            deadline,
            status: OrderStatus::InQueue,
            priority,
            created_at: chrono::Local::now().date_naive(),
            assigned_machine_id: None,
            started_at: None,
        }
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置創建日期
    pub fn with_created_at(mut self, created_at: NaiveDate) -> Self {
        self.created_at = created_at;
        self
    }

    /// 建構器模式：設置指派機台
    pub fn with_assigned_machine(mut self, machine_id: i64) -> Self {
        self.assigned_machine_id = Some(machine_id);
        self
    }

    /// 建構器模式：設置實際開工時間
    pub fn with_started_at(mut self, started_at: NaiveDateTime) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// 是否尚未完成（排隊中或生產中）
    pub fn is_pending(&self) -> bool {
        self.status != OrderStatus::Completed
    }

    /// 是否逾期（交期已過且未完成）
    pub fn is_late(&self, today: NaiveDate) -> bool {
        self.deadline < today && self.status != OrderStatus::Completed
    }
}
