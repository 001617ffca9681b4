// crates/srf_physics/src/geometry.rs

//! 网格几何
//!
//! 只保留初始化需要的几何量：单元中心和各边界的面心。
//! 边界分类在构造 [`PatchGeometry`] 时确定。

use crate::boundary::PatchClass;
use crate::error::{PhysicsError, PhysicsResult};
use crate::field::{PatchValues, VectorField};
use crate::types::SpatialPoint;

/// 边界几何
#[derive(Debug, Clone, PartialEq)]
pub struct PatchGeometry {
    /// 边界名称
    pub name: String,
    /// 网格中的原始类型标签
    pub patch_type: String,
    /// 分类结果
    pub class: PatchClass,
    /// 面心坐标
    pub face_centres: Vec<SpatialPoint>,
}

impl PatchGeometry {
    /// 创建边界几何并完成分类
    pub fn new(
        name: impl Into<String>,
        patch_type: impl Into<String>,
        face_centres: Vec<SpatialPoint>,
    ) -> Self {
        let patch_type = patch_type.into();
        let class = PatchClass::classify(&patch_type);
        Self {
            name: name.into(),
            patch_type,
            class,
            face_centres,
        }
    }

    /// 面数
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.face_centres.len()
    }
}

/// 网格几何
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshGeometry {
    /// 单元中心
    pub cell_centres: Vec<SpatialPoint>,
    /// 边界（有序）
    pub patches: Vec<PatchGeometry>,
}

impl MeshGeometry {
    /// 创建几何
    pub fn new(cell_centres: Vec<SpatialPoint>) -> Self {
        Self {
            cell_centres,
            patches: Vec::new(),
        }
    }

    /// 添加边界
    pub fn with_patch(mut self, patch: PatchGeometry) -> Self {
        self.patches.push(patch);
        self
    }

    /// 单元数
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.cell_centres.len()
    }

    /// 边界面总数
    pub fn n_boundary_faces(&self) -> usize {
        self.patches.iter().map(PatchGeometry::n_faces).sum()
    }

    /// 按名称查找边界
    pub fn patch(&self, name: &str) -> Option<&PatchGeometry> {
        self.patches.iter().find(|p| p.name == name)
    }

    /// 检查场与几何是否一致
    ///
    /// - 内部场长度等于单元数
    /// - 边界数量、名称、顺序一致
    /// - `Fixed` 边界值长度等于该边界面数
    pub fn check_field(&self, field: &VectorField) -> PhysicsResult<()> {
        PhysicsError::check_size(
            format!("{} 内部场", field.name),
            self.n_cells(),
            field.n_cells(),
        )?;
        PhysicsError::check_size(
            format!("{} 边界数", field.name),
            self.patches.len(),
            field.boundary.len(),
        )?;

        for (index, (geom, patch)) in self.patches.iter().zip(&field.boundary).enumerate() {
            if geom.name != patch.name {
                return Err(PhysicsError::PatchMismatch {
                    index,
                    mesh: geom.name.clone(),
                    field: patch.name.clone(),
                });
            }
            if let PatchValues::Fixed { values } = &patch.values {
                PhysicsError::check_size(format!("边界 {}", geom.name), geom.n_faces(), values.len())?;
            }
        }

        Ok(())
    }
}
