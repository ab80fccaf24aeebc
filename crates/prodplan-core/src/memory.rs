//! 記憶體內倉儲實現
//!
//! 測試與快照式嵌入場景用的參考實現。

use std::sync::Mutex;

use crate::bom::BomLine;
use crate::machine::MachineRecipe;
use crate::material::Material;
use crate::plan::{PlanEntry, PlanStatus};
use crate::store::{CatalogRepository, PlanRepository};
use crate::Result;

/// 記憶體內目錄
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    materials: Vec<Material>,
    recipes: Vec<MachineRecipe>,
    bom: Vec<BomLine>,
}

impl InMemoryCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：加入物料
    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    /// 建構器模式：加入機台配方
    pub fn with_recipe(mut self, recipe: MachineRecipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    /// 建構器模式：加入 BOM 行
    pub fn with_bom_line(mut self, line: BomLine) -> Self {
        self.bom.push(line);
        self
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn recipes_for_product(&self, product_id: i64) -> Result<Vec<MachineRecipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }

    fn bom_for_product(&self, product_id: i64) -> Result<Vec<BomLine>> {
        Ok(self
            .bom
            .iter()
            .filter(|b| b.product_id == product_id)
            .cloned()
            .collect())
    }

    fn material(&self, material_id: i64) -> Result<Option<Material>> {
        Ok(self.materials.iter().find(|m| m.id == material_id).cloned())
    }
}

/// 記憶體內排程倉儲（Mutex 保護，可透過 Arc 共享）
#[derive(Debug, Default)]
pub struct InMemoryPlanRepository {
    entries: Mutex<Vec<PlanEntry>>,
}

impl InMemoryPlanRepository {
    /// 創建空倉儲
    pub fn new() -> Self {
        Self::default()
    }

    /// 以既有排程項初始化（增量重排測試用）
    pub fn with_entries(entries: Vec<PlanEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<PlanEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PlanRepository for InMemoryPlanRepository {
    fn insert(&self, entry: &PlanEntry) -> Result<()> {
        self.lock().push(entry.clone());
        Ok(())
    }

    fn delete_all(&self) -> Result<usize> {
        let mut entries = self.lock();
        let removed = entries.len();
        entries.clear();
        Ok(removed)
    }

    fn delete_by_status(&self, status: PlanStatus) -> Result<usize> {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|e| e.status != status);
        Ok(before - entries.len())
    }

    fn by_status(&self, status: PlanStatus) -> Result<Vec<PlanEntry>> {
        Ok(self
            .lock()
            .iter()
            .filter(|e| e.status == status)
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<PlanEntry>> {
        Ok(self.lock().clone())
    }
}
