//! 採購計劃生成
//!
//! 在物料需求之上做缺料/平衡分流，並提供按需用日期分組的
//! 檢視，供採購端排定下單順序。

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use prodplan_core::{MaterialRequirement, PlanEntry, ProductionOrder, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::requirements::RequirementsCalculator;

/// 採購計劃彙總
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementSummary {
    /// 涉及的物料種類數
    pub total_materials: usize,
    /// 缺料的物料種類數
    pub materials_with_shortage: usize,
    /// 需採購的總量（各缺料物料的缺口加總，單位混合僅供概覽）
    pub total_units_to_order: Decimal,
}

/// 採購計劃
///
/// `all_materials` 保留完整需求清單，`shortages` 與 `balanced`
/// 是按差額正負分流後的副本。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementPlan {
    pub all_materials: Vec<MaterialRequirement>,
    pub shortages: Vec<MaterialRequirement>,
    pub balanced: Vec<MaterialRequirement>,
    pub summary: ProcurementSummary,
}

impl ProcurementPlan {
    /// 從需求清單分流出採購計劃
    pub fn from_requirements(requirements: Vec<MaterialRequirement>) -> Self {
        let (shortages, balanced): (Vec<_>, Vec<_>) = requirements
            .iter()
            .cloned()
            .partition(MaterialRequirement::is_shortage);

        let total_units_to_order = shortages
            .iter()
            .map(MaterialRequirement::shortage_quantity)
            .sum();

        let summary = ProcurementSummary {
            total_materials: requirements.len(),
            materials_with_shortage: shortages.len(),
            total_units_to_order,
        };

        Self {
            all_materials: requirements,
            shortages,
            balanced,
            summary,
        }
    }

    /// 是否完全無缺料
    pub fn is_fully_covered(&self) -> bool {
        self.shortages.is_empty()
    }

    /// 缺料按需用日期分組（日期升冪）
    pub fn shortages_by_date(&self) -> BTreeMap<NaiveDate, Vec<&MaterialRequirement>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<&MaterialRequirement>> = BTreeMap::new();
        for requirement in &self.shortages {
            grouped
                .entry(requirement.need_by.date())
                .or_default()
                .push(requirement);
        }
        grouped
    }
}

impl RequirementsCalculator {
    /// 生成採購計劃
    pub fn generate_procurement_plan(
        &self,
        pending_orders: &[ProductionOrder],
        plan: &[PlanEntry],
    ) -> Result<ProcurementPlan> {
        self.generate_procurement_plan_at(pending_orders, plan, chrono::Local::now().naive_local())
    }

    /// 生成採購計劃（固定時鐘版本）
    pub fn generate_procurement_plan_at(
        &self,
        pending_orders: &[ProductionOrder],
        plan: &[PlanEntry],
        now: NaiveDateTime,
    ) -> Result<ProcurementPlan> {
        let requirements = self.calculate_requirements_at(pending_orders, plan, now)?;
        let procurement = ProcurementPlan::from_requirements(requirements);

        tracing::info!(
            "採購計劃生成完成：{} 種物料，{} 種缺料，需採購 {} 單位",
            procurement.summary.total_materials,
            procurement.summary.materials_with_shortage,
            procurement.summary.total_units_to_order
        );
        Ok(procurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn requirement(
        material_id: i64,
        needed: i64,
        in_stock: i64,
        day: u32,
    ) -> MaterialRequirement {
        MaterialRequirement {
            material_id,
            material_name: format!("Material {material_id}"),
            unit: "kg".to_string(),
            quantity_needed: Decimal::from(needed),
            quantity_in_stock: Decimal::from(in_stock),
            quantity_difference: Decimal::from(needed - in_stock),
            need_by: NaiveDate::from_ymd_opt(2025, 11, day)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            orders: vec![1],
        }
    }

    #[test]
    fn test_partition_and_summary() {
        let plan = ProcurementPlan::from_requirements(vec![
            requirement(1, 60, 50, 21), // 缺 10
            requirement(2, 20, 50, 21), // 餘 30
            requirement(3, 5, 0, 22),   // 缺 5
        ]);

        assert_eq!(plan.all_materials.len(), 3);
        assert_eq!(plan.shortages.len(), 2);
        assert_eq!(plan.balanced.len(), 1);
        assert_eq!(plan.balanced[0].material_id, 2);
        assert_eq!(plan.summary.total_materials, 3);
        assert_eq!(plan.summary.materials_with_shortage, 2);
        assert_eq!(plan.summary.total_units_to_order, Decimal::from(15));
        assert!(!plan.is_fully_covered());
    }

    #[test]
    fn test_exact_cover_is_balanced() {
        let plan = ProcurementPlan::from_requirements(vec![requirement(1, 50, 50, 21)]);

        assert!(plan.shortages.is_empty());
        assert_eq!(plan.balanced.len(), 1);
        assert_eq!(plan.summary.total_units_to_order, Decimal::ZERO);
        assert!(plan.is_fully_covered());
    }

    #[test]
    fn test_empty_requirements() {
        let plan = ProcurementPlan::from_requirements(Vec::new());

        assert!(plan.all_materials.is_empty());
        assert!(plan.is_fully_covered());
        assert_eq!(plan.summary.total_materials, 0);
    }

    #[test]
    fn test_shortages_grouped_by_date() {
        let plan = ProcurementPlan::from_requirements(vec![
            requirement(1, 60, 50, 22),
            requirement(2, 30, 10, 21),
            requirement(3, 5, 0, 22),
        ]);

        let by_date = plan.shortages_by_date();
        let dates: Vec<NaiveDate> = by_date.keys().copied().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 11, 21).unwrap(),
                NaiveDate::from_ymd_opt(2025, 11, 22).unwrap(),
            ]
        );
        assert_eq!(by_date[&dates[0]].len(), 1);
        assert_eq!(by_date[&dates[1]].len(), 2);
    }
}
