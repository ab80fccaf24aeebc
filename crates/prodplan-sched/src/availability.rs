//! 機台可用性追蹤
//!
//! 回答「機台 M 最早何時有空？」並記錄新的佔用。追蹤器的狀態
//! 只屬於單一排程行程，不跨行程共享。

use std::collections::HashMap;

use chrono::NaiveDateTime;
use prodplan_core::PlanEntry;

/// 機台可用性追蹤器
///
/// 機台ID → 最早空閒時間。未登記的機台視為立即可用。
#[derive(Debug, Clone, Default)]
pub struct MachineAvailability {
    free_times: HashMap<i64, NaiveDateTime>,
}

impl MachineAvailability {
    /// 創建空追蹤器（全量重排用）
    pub fn new() -> Self {
        Self::default()
    }

    /// 從生產中的排程項預載（增量重排用）
    ///
    /// 每台機台取其所有生產中排程項的最晚結束時間。
    pub fn from_in_progress(entries: &[PlanEntry]) -> Self {
        let mut tracker = Self::new();
        for entry in entries {
            tracker.commit(entry.machine_id, entry.planned_end);
        }
        tracker
    }

    /// 機台最早空閒時間；無佔用記錄時回傳 `now`
    pub fn free_at(&self, machine_id: i64, now: NaiveDateTime) -> NaiveDateTime {
        self.free_times.get(&machine_id).copied().unwrap_or(now)
    }

    /// 記錄機台佔用到 `until`
    ///
    /// 空閒時間只會往後推，多筆佔用取最晚者。
    pub fn commit(&mut self, machine_id: i64, until: NaiveDateTime) {
        self.free_times
            .entry(machine_id)
            .and_modify(|t| {
                if until > *t {
                    *t = until;
                }
            })
            .or_insert(until);
    }

    /// 已登記佔用的機台數
    pub fn len(&self) -> usize {
        self.free_times.len()
    }

    /// 是否沒有任何佔用記錄
    pub fn is_empty(&self) -> bool {
        self.free_times.is_empty()
    }
}
