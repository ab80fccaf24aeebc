//! 排程引擎
//!
//! 消費訂單佇列與目錄，驅動機台可用性追蹤器，產出排程項。
//! 單執行緒、同步、一次行程跑完；行程內以互斥鎖保證「全量重排」
//! 與「增量重排」不會交錯。

use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use prodplan_core::time::{add_hours, format_timestamp};
use prodplan_core::{
    CatalogRepository, PlanEntry, PlanError, PlanRepository, PlanStatus, ProductionOrder, Result,
};

use crate::availability::MachineAvailability;
use crate::strategy::MachineSelection;
use crate::{FailedOrder, ScheduleResult, SkippedOrder};

/// 排程器
///
/// 倉儲依注入取得；同一訂單列表、同一目錄與同一追蹤器種子下，
/// 結果完全確定（無亂數、無並行競爭、逐單單趟分配）。
pub struct Scheduler {
    catalog: Arc<dyn CatalogRepository>,
    plans: Arc<dyn PlanRepository>,
    selection: MachineSelection,
    run_lock: Mutex<()>,
}

impl Scheduler {
    /// 創建新的排程器（預設取第一個匹配配方）
    pub fn new(catalog: Arc<dyn CatalogRepository>, plans: Arc<dyn PlanRepository>) -> Self {
        Self {
            catalog,
            plans,
            selection: MachineSelection::default(),
            run_lock: Mutex::new(()),
        }
    }

    /// 建構器模式：設置機台選擇策略
    pub fn with_selection(mut self, selection: MachineSelection) -> Self {
        self.selection = selection;
        self
    }

    /// 全量重排：刪除所有既有排程項後為全部訂單重新排程
    ///
    /// 以當前牆鐘時間為行程基準。
    pub fn schedule_from_scratch(&self, orders: &[ProductionOrder]) -> Result<ScheduleResult> {
        self.schedule_from_scratch_at(orders, chrono::Local::now().naive_local())
    }

    /// 全量重排（固定時鐘版本）
    pub fn schedule_from_scratch_at(
        &self,
        orders: &[ProductionOrder],
        now: NaiveDateTime,
    ) -> Result<ScheduleResult> {
        let _run = self.run_lock.lock().unwrap_or_else(|e| e.into_inner());

        tracing::info!("全量重排：{} 筆待排程訂單", orders.len());

        if orders.is_empty() {
            // 沒有訂單時不動既有排程
            tracing::info!("沒有待排程的訂單");
            return Ok(ScheduleResult::empty());
        }

        let cleared = self.plans.delete_all()?;
        tracing::info!("已清除 {} 筆既有排程", cleared);

        self.allocate(orders, MachineAvailability::new(), now)
    }

    /// 增量重排：保留生產中的排程項，只重排尚未開工的部分
    ///
    /// 生產中的排程不移動、不重新計時；新訂單排在其機台佔用之後。
    pub fn reschedule_incremental(&self, orders: &[ProductionOrder]) -> Result<ScheduleResult> {
        self.reschedule_incremental_at(orders, chrono::Local::now().naive_local())
    }

    /// 增量重排（固定時鐘版本）
    pub fn reschedule_incremental_at(
        &self,
        orders: &[ProductionOrder],
        now: NaiveDateTime,
    ) -> Result<ScheduleResult> {
        let _run = self.run_lock.lock().unwrap_or_else(|e| e.into_inner());

        tracing::info!("增量重排：{} 筆待排程訂單", orders.len());

        if orders.is_empty() {
            tracing::info!("沒有待排程的訂單");
            return Ok(ScheduleResult::empty());
        }

        let in_progress = self.plans.by_status(PlanStatus::InProgress)?;
        let cleared = self.plans.delete_by_status(PlanStatus::Planned)?;
        tracing::info!(
            "已清除 {} 筆未開工排程，保留 {} 筆生產中排程",
            cleared,
            in_progress.len()
        );

        let tracker = MachineAvailability::from_in_progress(&in_progress);
        let mut result = self.allocate(orders, tracker, now)?;
        result.preserved = in_progress;
        Ok(result)
    }

    /// 共用分配邏輯：按供給順序逐單分配機台時間窗
    ///
    /// 每筆排程項建立後立即寫入倉儲，中途失敗時已寫入的前綴
    /// 保持有效。
    fn allocate(
        &self,
        orders: &[ProductionOrder],
        mut tracker: MachineAvailability,
        now: NaiveDateTime,
    ) -> Result<ScheduleResult> {
        let mut result = ScheduleResult::empty();

        for order in orders {
            if order.quantity <= 0 {
                result.failed.push(FailedOrder {
                    order_id: order.id,
                    error: PlanError::InvalidOrderQuantity {
                        order_id: order.id,
                        quantity: order.quantity,
                    },
                });
                continue;
            }

            let recipes = self.catalog.recipes_for_product(order.product_id)?;
            if recipes.is_empty() {
                tracing::warn!(
                    "產品 {} 沒有機台配方，跳過訂單 {}",
                    order.product_id,
                    order.id
                );
                result.skipped.push(SkippedOrder {
                    order_id: order.id,
                    product_id: order.product_id,
                });
                continue;
            }

            let Some(recipe) = self.selection.select(&recipes, &tracker, now) else {
                continue;
            };

            let duration = match recipe.duration_hours(order.quantity) {
                Ok(duration) => duration,
                Err(error) => {
                    result.failed.push(FailedOrder {
                        order_id: order.id,
                        error,
                    });
                    continue;
                }
            };

            let start = tracker.free_at(recipe.machine_id, now);
            let end = match add_hours(start, duration) {
                Ok(end) => end,
                Err(error) => {
                    result.failed.push(FailedOrder {
                        order_id: order.id,
                        error,
                    });
                    continue;
                }
            };

            let entry = PlanEntry::new(order.id, recipe.machine_id, start, end, duration, now);
            self.plans
                .insert(&entry)
                .map_err(|e| PlanError::PersistFailed {
                    order_id: order.id,
                    message: e.to_string(),
                })?;

            tracing::debug!(
                "訂單 {} 排程至機台 {}: {} -> {} ({} 小時)",
                order.id,
                recipe.machine_id,
                format_timestamp(start),
                format_timestamp(end),
                entry.duration_hours
            );

            tracker.commit(recipe.machine_id, end);
            result.entries.push(entry);
        }

        tracing::info!(
            "排程完成：{} 筆成功，{} 筆跳過，{} 筆失敗",
            result.entries.len(),
            result.skipped.len(),
            result.failed.len()
        );

        Ok(result)
    }
}
