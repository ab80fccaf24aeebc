//! 物料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 物料（原料庫存）
///
/// 由外部的庫存調整維護，核心只讀取。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// 物料ID
    pub id: i64,

    /// 名稱（唯一）
    pub name: String,

    /// 計量單位
    pub unit: String,

    /// 現有庫存（非負）
    pub quantity: Decimal,
}

impl Material {
    /// 創建新的物料
    pub fn new(id: i64, name: impl Into<String>, unit: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            unit: unit.into(),
            quantity,
        }
    }

    /// 檢查庫存是否足以覆蓋給定需求
    pub fn covers(&self, needed: Decimal) -> bool {
        self.quantity >= needed
    }
}
