//! # Prodplan Core
//!
//! 生產排程與物料需求計算的核心資料模型與類型定義

pub mod bom;
pub mod machine;
pub mod material;
pub mod memory;
pub mod order;
pub mod plan;
pub mod product;
pub mod queue;
pub mod requirement;
pub mod store;
pub mod time;

// Re-export 主要類型
pub use bom::BomLine;
pub use machine::{Machine, MachineRecipe};
pub use material::Material;
pub use memory::{InMemoryCatalog, InMemoryPlanRepository};
pub use order::{OrderPriority, OrderStatus, ProductionOrder};
pub use plan::{group_for_gantt, PlanEntry, PlanStatus};
pub use product::Product;
pub use queue::{sort_pending, QueueSummary};
pub use requirement::MaterialRequirement;
pub use store::{CatalogRepository, PlanRepository};

/// 排程/MRP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("機台配方無效：配方 {recipe_id}（機台 {machine_id}，產品 {product_id}）的產能必須為正")]
    InvalidRecipe {
        recipe_id: i64,
        machine_id: i64,
        product_id: i64,
    },

    #[error("訂單 {order_id} 的數量無效：{quantity}（必須為正整數）")]
    InvalidOrderQuantity { order_id: i64, quantity: i64 },

    #[error("無效的優先級：{0}（允許 1=High, 2=Medium, 3=Low）")]
    InvalidPriority(i64),

    #[error("訂單 {order_id} 的排程寫入失敗: {message}")]
    PersistFailed { order_id: i64, message: String },

    #[error("儲存層錯誤: {0}")]
    Storage(String),

    #[error("無效的時間格式: {0}")]
    InvalidTimestamp(String),

    #[error("計算錯誤: {0}")]
    Calculation(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
