//! 機台選擇策略

use chrono::NaiveDateTime;
use prodplan_core::MachineRecipe;

use crate::availability::MachineAvailability;

/// 候選配方的選擇策略
///
/// 預設 `FirstRecipe`：取第一個匹配配方，不做負載比較。這是
/// 沿用的刻意簡化，改變它會改變可觀察的排程結果。
/// `EarliestAvailable` 為明確選用的最佳化：在候選機台中挑最早
/// 有空者。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MachineSelection {
    /// 取第一個匹配配方（預設，沿用既有行為）
    #[default]
    FirstRecipe,
    /// 取最早有空的機台（選用的最佳化）
    EarliestAvailable,
}

impl MachineSelection {
    /// 從候選配方中選出一個；候選為空時回傳 `None`
    pub fn select<'a>(
        &self,
        recipes: &'a [MachineRecipe],
        tracker: &MachineAvailability,
        now: NaiveDateTime,
    ) -> Option<&'a MachineRecipe> {
        match self {
            MachineSelection::FirstRecipe => recipes.first(),
            MachineSelection::EarliestAvailable => {
                recipes.iter().min_by_key(|r| tracker.free_at(r.machine_id, now))
            }
        }
    }
}
