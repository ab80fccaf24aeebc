//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 產品（成品主數據）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: i64,

    /// 名稱（唯一）
    pub name: String,

    /// 計量單位
    pub unit: String,

    /// 描述
    pub description: String,

    /// 已生產數量（僅供參考）
    pub quantity: Decimal,
}

impl Product {
    /// 創建新的產品
    pub fn new(id: i64, name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unit: unit.into(),
            description: String::new(),
            quantity: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
