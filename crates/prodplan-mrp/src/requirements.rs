//! 物料需求計算
//!
//! 單層、不分時段的淨額計算：只針對有待生產需求的物料，
//! 與庫存比對得出正負差額。引擎無副作用，不回寫庫存、
//! 訂單或排程。

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use prodplan_core::{
    CatalogRepository, Material, MaterialRequirement, PlanEntry, ProductionOrder, Result,
};
use rust_decimal::Decimal;

/// 物料需求計算器
pub struct RequirementsCalculator {
    catalog: Arc<dyn CatalogRepository>,
}

/// 累計中的單一物料需求
struct Accumulation {
    material_name: String,
    unit: String,
    quantity_needed: Decimal,
    quantity_in_stock: Decimal,
    need_by: NaiveDateTime,
    orders: Vec<i64>,
}

impl Accumulation {
    fn new(material: &Material, need_by: NaiveDateTime) -> Self {
        Self {
            material_name: material.name.clone(),
            unit: material.unit.clone(),
            quantity_needed: Decimal::ZERO,
            quantity_in_stock: material.quantity,
            need_by,
            orders: Vec::new(),
        }
    }
}

impl RequirementsCalculator {
    /// 創建新的計算器
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// 計算所有待生產訂單的物料需求
    ///
    /// 需用時間取訂單有效排程項（已排程/生產中）的計劃開始時間，
    /// 沒有排程時退回當前牆鐘時間。
    pub fn calculate_requirements(
        &self,
        pending_orders: &[ProductionOrder],
        plan: &[PlanEntry],
    ) -> Result<Vec<MaterialRequirement>> {
        self.calculate_requirements_at(pending_orders, plan, chrono::Local::now().naive_local())
    }

    /// 計算物料需求（固定時鐘版本）
    pub fn calculate_requirements_at(
        &self,
        pending_orders: &[ProductionOrder],
        plan: &[PlanEntry],
        now: NaiveDateTime,
    ) -> Result<Vec<MaterialRequirement>> {
        tracing::info!("計算物料需求：{} 筆待生產訂單", pending_orders.len());

        if pending_orders.is_empty() {
            tracing::info!("沒有待生產訂單，無物料需求");
            return Ok(Vec::new());
        }

        // 物料ID → 累計需求；BTreeMap 保證輸出順序確定
        let mut accumulations: BTreeMap<i64, Accumulation> = BTreeMap::new();

        for order in pending_orders {
            let bom = self.catalog.bom_for_product(order.product_id)?;
            if bom.is_empty() {
                // 沒有 BOM 的產品不貢獻物料需求
                tracing::debug!("產品 {} 沒有 BOM 行（訂單 {}）", order.product_id, order.id);
                continue;
            }

            let need_by = plan
                .iter()
                .find(|p| p.order_id == order.id && p.is_active())
                .map(|p| p.planned_start)
                .unwrap_or(now);

            for line in &bom {
                let Some(material) = self.catalog.material(line.material_id)? else {
                    tracing::debug!("BOM 行 {} 引用的物料 {} 不存在，跳過", line.id, line.material_id);
                    continue;
                };

                let accumulation = accumulations
                    .entry(material.id)
                    .or_insert_with(|| Accumulation::new(&material, need_by));

                accumulation.quantity_needed += line.requirement_for(order.quantity);
                if !accumulation.orders.contains(&order.id) {
                    accumulation.orders.push(order.id);
                }
                // 多張訂單需要同一物料時取最早的需用時間
                if need_by < accumulation.need_by {
                    accumulation.need_by = need_by;
                }
            }
        }

        let requirements: Vec<MaterialRequirement> = accumulations
            .into_iter()
            .map(|(material_id, acc)| MaterialRequirement {
                material_id,
                material_name: acc.material_name,
                unit: acc.unit,
                quantity_needed: acc.quantity_needed,
                quantity_in_stock: acc.quantity_in_stock,
                quantity_difference: acc.quantity_needed - acc.quantity_in_stock,
                need_by: acc.need_by,
                orders: acc.orders,
            })
            .collect();

        tracing::info!("物料需求計算完成：{} 種物料", requirements.len());
        Ok(requirements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use prodplan_core::time::add_hours;
    use prodplan_core::{BomLine, InMemoryCatalog, MachineRecipe, OrderPriority, PlanStatus};

    fn ts(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn order(id: i64, product_id: i64, quantity: i64) -> ProductionOrder {
        ProductionOrder::new(
            id,
            product_id,
            quantity,
            NaiveDate::from_ymd_opt(2025, 11, 23).unwrap(),
            OrderPriority::Medium,
        )
    }

    fn entry(order_id: i64, start: NaiveDateTime) -> PlanEntry {
        let end = add_hours(start, Decimal::from(2)).unwrap();
        PlanEntry::new(order_id, 1, start, end, Decimal::from(2), start)
    }

    /// 木材庫存 50，桌子每張需 2 單位木材
    fn table_catalog() -> Arc<InMemoryCatalog> {
        Arc::new(
            InMemoryCatalog::new()
                .with_material(Material::new(2, "Wood", "m³", Decimal::from(50)))
                .with_recipe(MachineRecipe::new(1, 1, 1, Decimal::from(5)))
                .with_bom_line(BomLine::new(1, 1, 2, Decimal::from(2))),
        )
    }

    #[test]
    fn test_single_order_netting() {
        let calculator = RequirementsCalculator::new(table_catalog());
        let now = ts(20, 8);

        let requirements = calculator
            .calculate_requirements_at(&[order(1, 1, 10)], &[], now)
            .unwrap();

        assert_eq!(requirements.len(), 1);
        let wood = &requirements[0];
        assert_eq!(wood.material_id, 2);
        assert_eq!(wood.quantity_needed, Decimal::from(20));
        assert_eq!(wood.quantity_in_stock, Decimal::from(50));
        // 差額 -30：餘量，非缺料
        assert_eq!(wood.quantity_difference, Decimal::from(-30));
        assert!(!wood.is_shortage());
        assert_eq!(wood.orders, vec![1]);
        // 無排程時需用時間退回 now
        assert_eq!(wood.need_by, now);
    }

    #[test]
    fn test_need_by_from_active_plan_entry() {
        let calculator = RequirementsCalculator::new(table_catalog());
        let plan = vec![entry(1, ts(21, 10))];

        let requirements = calculator
            .calculate_requirements_at(&[order(1, 1, 10)], &plan, ts(20, 8))
            .unwrap();

        assert_eq!(requirements[0].need_by, ts(21, 10));
    }

    #[test]
    fn test_completed_plan_entry_is_ignored() {
        let calculator = RequirementsCalculator::new(table_catalog());
        let plan = vec![entry(1, ts(21, 10)).with_status(PlanStatus::Completed)];
        let now = ts(20, 8);

        let requirements = calculator
            .calculate_requirements_at(&[order(1, 1, 10)], &plan, now)
            .unwrap();

        // 已完成的排程不提供需用時間
        assert_eq!(requirements[0].need_by, now);
    }

    #[test]
    fn test_multiple_orders_accumulate_and_take_earliest_need_by() {
        let calculator = RequirementsCalculator::new(table_catalog());
        // 訂單 2 的排程比訂單 1 早
        let plan = vec![entry(1, ts(22, 8)), entry(2, ts(21, 8))];

        let requirements = calculator
            .calculate_requirements_at(&[order(1, 1, 10), order(2, 1, 20)], &plan, ts(20, 8))
            .unwrap();

        assert_eq!(requirements.len(), 1);
        let wood = &requirements[0];
        // 20 + 40 = 60，庫存 50 → 缺 10
        assert_eq!(wood.quantity_needed, Decimal::from(60));
        assert_eq!(wood.quantity_difference, Decimal::from(10));
        assert!(wood.is_shortage());
        assert_eq!(wood.orders, vec![1, 2]);
        assert_eq!(wood.need_by, ts(21, 8));
    }

    #[test]
    fn test_product_without_bom_contributes_nothing() {
        let calculator = RequirementsCalculator::new(table_catalog());

        // 產品 7 沒有 BOM
        let requirements = calculator
            .calculate_requirements_at(&[order(1, 7, 10)], &[], ts(20, 8))
            .unwrap();

        assert!(requirements.is_empty());
    }

    #[test]
    fn test_no_pending_orders() {
        let calculator = RequirementsCalculator::new(table_catalog());
        let requirements = calculator
            .calculate_requirements_at(&[], &[], ts(20, 8))
            .unwrap();
        assert!(requirements.is_empty());
    }

    #[test]
    fn test_missing_material_line_is_skipped() {
        let catalog = Arc::new(
            InMemoryCatalog::new()
                .with_material(Material::new(2, "Wood", "m³", Decimal::from(50)))
                // 物料 99 不在目錄中
                .with_bom_line(BomLine::new(1, 1, 2, Decimal::from(2)))
                .with_bom_line(BomLine::new(2, 1, 99, Decimal::from(5))),
        );
        let calculator = RequirementsCalculator::new(catalog);

        let requirements = calculator
            .calculate_requirements_at(&[order(1, 1, 10)], &[], ts(20, 8))
            .unwrap();

        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].material_id, 2);
    }
}
