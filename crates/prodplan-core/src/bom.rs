//! BOM（物料清單）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// BOM 行：生產一單位產品所需的某種物料數量
///
/// 每個 (產品, 物料) 組合唯一。單層結構，無多級展開。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomLine {
    /// 行ID
    pub id: i64,

    /// 產品ID
    pub product_id: i64,

    /// 物料ID
    pub material_id: i64,

    /// 每單位產品所需數量
    pub quantity_needed: Decimal,
}

impl BomLine {
    /// 創建新的 BOM 行
    pub fn new(id: i64, product_id: i64, material_id: i64, quantity_needed: Decimal) -> Self {
        Self {
            id,
            product_id,
            material_id,
            quantity_needed,
        }
    }

    /// 某訂單數量下此行的物料總需求
    pub fn requirement_for(&self, order_quantity: i64) -> Decimal {
        self.quantity_needed * Decimal::from(order_quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_for_order() {
        // 每張桌子需要 2 單位木材
        let line = BomLine::new(1, 1, 2, Decimal::from(2));

        assert_eq!(line.requirement_for(10), Decimal::from(20));
        assert_eq!(line.requirement_for(0), Decimal::ZERO);
    }
}
