//! # Prodplan MRP Engine
//!
//! 物料需求計算引擎：把待生產訂單的 BOM 展開彙總成
//! 淨缺料/餘量報告

pub mod procurement;
pub mod requirements;

// Re-export 主要類型
pub use procurement::{ProcurementPlan, ProcurementSummary};
pub use requirements::RequirementsCalculator;
