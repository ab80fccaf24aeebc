//! 機台與機台配方模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

/// 機台
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    /// 機台ID
    pub id: i64,

    /// 名稱（唯一）
    pub name: String,
}

impl Machine {
    /// 創建新的機台
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// 機台配方：某機台生產某產品的產能
///
/// 每個 (機台, 產品) 組合唯一。一個產品可以有 0..n 個配方，
/// 一台機台可以生產多種產品。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineRecipe {
    /// 配方ID
    pub id: i64,

    /// 機台ID
    pub machine_id: i64,

    /// 產品ID
    pub product_id: i64,

    /// 產能（單位/小時）
    pub production_capacity: Decimal,
}

impl MachineRecipe {
    /// 創建新的機台配方
    pub fn new(id: i64, machine_id: i64, product_id: i64, production_capacity: Decimal) -> Self {
        Self {
            id,
            machine_id,
            product_id,
            production_capacity,
        }
    }

    /// 檢查配方是否有效（產能必須為正）
    pub fn is_valid(&self) -> bool {
        self.production_capacity > Decimal::ZERO
    }

    /// 生產給定數量所需的工時（小時）
    ///
    /// 產能為零或負數視為無效的目錄資料，回傳明確錯誤而非
    /// 靜默的零工時排程。
    pub fn duration_hours(&self, quantity: i64) -> Result<Decimal> {
        if !self.is_valid() {
            return Err(PlanError::InvalidRecipe {
                recipe_id: self.id,
                machine_id: self.machine_id,
                product_id: self.product_id,
            });
        }
        Ok(Decimal::from(quantity) / self.production_capacity)
    }
}
