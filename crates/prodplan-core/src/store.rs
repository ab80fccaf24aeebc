//! 倉儲介面
//!
//! 持久層作為外部協作者，透過這兩個介面注入排程器與 MRP 引擎，
//! 取代行程級的共享連線。核心對目錄與訂單唯讀，只會創建/刪除
//! 排程項。

use crate::bom::BomLine;
use crate::machine::MachineRecipe;
use crate::material::Material;
use crate::plan::{PlanEntry, PlanStatus};
use crate::Result;

/// 目錄倉儲（唯讀）
pub trait CatalogRepository: Send + Sync {
    /// 能生產指定產品的所有機台配方
    fn recipes_for_product(&self, product_id: i64) -> Result<Vec<MachineRecipe>>;

    /// 指定產品的所有 BOM 行
    fn bom_for_product(&self, product_id: i64) -> Result<Vec<BomLine>>;

    /// 按ID查詢物料
    fn material(&self, material_id: i64) -> Result<Option<Material>>;
}

/// 排程倉儲
pub trait PlanRepository: Send + Sync {
    /// 寫入一筆排程項（逐筆寫入，部分失敗時已寫入的前綴保持有效）
    fn insert(&self, entry: &PlanEntry) -> Result<()>;

    /// 刪除全部排程項（全量重排用）
    fn delete_all(&self) -> Result<usize>;

    /// 刪除指定狀態的排程項，回傳刪除筆數
    fn delete_by_status(&self, status: PlanStatus) -> Result<usize>;

    /// 查詢指定狀態的排程項
    fn by_status(&self, status: PlanStatus) -> Result<Vec<PlanEntry>>;

    /// 查詢全部排程項
    fn all(&self) -> Result<Vec<PlanEntry>>;
}
