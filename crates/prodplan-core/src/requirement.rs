//! 物料需求（MRP 計算結果）

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::time::timestamp_format;

/// 單一物料的淨需求
///
/// 由 MRP 引擎按待生產訂單推導，不落庫。正差額為缺料，
/// 負差額為餘量。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    /// 物料ID
    pub material_id: i64,

    /// 物料名稱
    pub material_name: String,

    /// 計量單位
    pub unit: String,

    /// 所有訂單合計需求
    pub quantity_needed: Decimal,

    /// 現有庫存
    pub quantity_in_stock: Decimal,

    /// 差額 = 需求 - 庫存（正=缺料，負=餘量）
    pub quantity_difference: Decimal,

    /// 最早需用時間（取各貢獻訂單中最早者）
    #[serde(with = "timestamp_format")]
    pub need_by: NaiveDateTime,

    /// 貢獻需求的訂單ID列表
    pub orders: Vec<i64>,
}

impl MaterialRequirement {
    /// 是否缺料
    pub fn is_shortage(&self) -> bool {
        self.quantity_difference > Decimal::ZERO
    }

    /// 需要採購的數量（無缺料時為零）
    pub fn shortage_quantity(&self) -> Decimal {
        if self.is_shortage() {
            self.quantity_difference
        } else {
            Decimal::ZERO
        }
    }

    /// 餘量（缺料時為零）
    pub fn surplus_quantity(&self) -> Decimal {
        if self.is_shortage() {
            Decimal::ZERO
        } else {
            -self.quantity_difference
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn requirement(needed: i64, in_stock: i64) -> MaterialRequirement {
        MaterialRequirement {
            material_id: 2,
            material_name: "Wood".to_string(),
            unit: "m³".to_string(),
            quantity_needed: Decimal::from(needed),
            quantity_in_stock: Decimal::from(in_stock),
            quantity_difference: Decimal::from(needed - in_stock),
            need_by: NaiveDate::from_ymd_opt(2025, 11, 20)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            orders: vec![1],
        }
    }

    #[test]
    fn test_shortage_classification() {
        let short = requirement(80, 50);
        assert!(short.is_shortage());
        assert_eq!(short.shortage_quantity(), Decimal::from(30));
        assert_eq!(short.surplus_quantity(), Decimal::ZERO);
    }

    #[test]
    fn test_surplus_classification() {
        let ok = requirement(20, 50);
        assert!(!ok.is_shortage());
        assert_eq!(ok.shortage_quantity(), Decimal::ZERO);
        assert_eq!(ok.surplus_quantity(), Decimal::from(30));
    }

    #[test]
    fn test_exact_cover_is_not_shortage() {
        // 差額為零視為庫存足夠
        let exact = requirement(50, 50);
        assert!(!exact.is_shortage());
    }
}
