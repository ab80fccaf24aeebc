//! # Prodplan - 生產排程與物料需求計算系統
//!
//! 統一入口：re-export 各子 crate 的公開 API。
//!
//! - `prodplan-core`：領域模型、儲存介面與記憶體實作
//! - `prodplan-sched`：排程引擎與機台可用性追蹤
//! - `prodplan-mrp`：物料需求與採購計劃

pub use prodplan_core as core;
pub use prodplan_mrp as mrp;
pub use prodplan_sched as sched;

// 常用類型直接可見
pub use prodplan_core::{
    BomLine, CatalogRepository, Machine, MachineRecipe, Material, MaterialRequirement,
    OrderPriority, OrderStatus, PlanEntry, PlanError, PlanRepository, PlanStatus,
    ProductionOrder, Product, QueueSummary, Result,
};
pub use prodplan_mrp::{ProcurementPlan, RequirementsCalculator};
pub use prodplan_sched::{MachineAvailability, MachineSelection, ScheduleResult, Scheduler};
