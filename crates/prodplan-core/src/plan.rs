//! 生產排程項模型

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::{optional_timestamp_format, timestamp_format};

/// 排程項狀態
///
/// 與訂單狀態鏡像但非同一欄位，兩者各自維護（見 DESIGN.md）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// 已排程
    Planned,
    /// 生產中
    InProgress,
    /// 已完成
    Completed,
}

impl PlanStatus {
    /// 文字形式（與既有資料列一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Planned => "planned",
            PlanStatus::InProgress => "in_progress",
            PlanStatus::Completed => "completed",
        }
    }
}

/// 排程項：一張訂單在一台機台上的時間窗分配
///
/// 同一訂單任一時刻只有一筆有效排程；全量重排時舊排程直接刪除，
/// 不保留歷史。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    /// 排程項ID
    pub id: Uuid,

    /// 訂單ID
    pub order_id: i64,

    /// 機台ID
    pub machine_id: i64,

    /// 計劃開始時間
    #[serde(with = "timestamp_format")]
    pub planned_start: NaiveDateTime,

    /// 計劃結束時間（= 開始 + 工時）
    #[serde(with = "timestamp_format")]
    pub planned_end: NaiveDateTime,

    /// 工時（小時，> 0，保留兩位小數）
    pub duration_hours: Decimal,

    /// 實際開工時間
    #[serde(with = "optional_timestamp_format")]
    pub actual_start: Option<NaiveDateTime>,

    /// 狀態
    pub status: PlanStatus,

    /// 創建時間
    #[serde(with = "timestamp_format")]
    pub created_at: NaiveDateTime,
}

impl PlanEntry {
    /// 創建新的排程項（狀態為已排程）
    ///
    /// `planned_end` 由呼叫端以未捨入工時計算；此處僅將儲存的
    /// `duration_hours` 捨入到兩位小數，與既有資料列一致。
    pub fn new(
        order_id: i64,
        machine_id: i64,
        planned_start: NaiveDateTime,
        planned_end: NaiveDateTime,
        duration_hours: Decimal,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            machine_id,
            planned_start,
            planned_end,
            duration_hours: duration_hours.round_dp(2),
            actual_start: None,
            status: PlanStatus::Planned,
            created_at,
        }
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: PlanStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置實際開工時間
    pub fn with_actual_start(mut self, actual_start: NaiveDateTime) -> Self {
        self.actual_start = Some(actual_start);
        self
    }

    /// 是否為有效排程（已排程或生產中）
    pub fn is_active(&self) -> bool {
        matches!(self.status, PlanStatus::Planned | PlanStatus::InProgress)
    }
}

/// 甘特視圖分組：有效排程按機台分組，組內按計劃開始時間排序
pub fn group_for_gantt(entries: &[PlanEntry]) -> BTreeMap<i64, Vec<PlanEntry>> {
    let mut grouped: BTreeMap<i64, Vec<PlanEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.is_active()) {
        grouped
            .entry(entry.machine_id)
            .or_default()
            .push(entry.clone());
    }
    for machine_entries in grouped.values_mut() {
        machine_entries.sort_by_key(|e| e.planned_start);
    }
    grouped
}
