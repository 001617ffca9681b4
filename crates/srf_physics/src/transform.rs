// crates/srf_physics/src/transform.rs

//! 相对速度场变换
//!
//! ```text
//! internal[i]       = U∞ - Ω × (C[i]  - O)
//! patch.values[j]   = U∞ - Ω × (Cf[j] - O)    (非固壁边界)
//! ```
//!
//! 固壁边界保持原值。先完成全部一致性检查再写入，
//! 检查失败时场不会被部分修改。

use tracing::{debug, info};

use crate::error::PhysicsResult;
use crate::field::{PatchValues, VectorField};
use crate::geometry::MeshGeometry;
use crate::rotation::RotationModel;
use crate::types::VelocityVector;

/// 变换统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// 更新的单元数
    pub n_cells: usize,
    /// 更新的边界面数
    pub n_faces: usize,
    /// 被覆盖的边界
    pub updated_patches: Vec<String>,
    /// 保留原值的固壁边界
    pub wall_patches: Vec<String>,
}

/// 将场改写为旋转系中的相对速度
///
/// 重复调用结果完全相同，不累加。
pub fn apply_relative_velocity(
    field: &mut VectorField,
    model: &dyn RotationModel,
    u_inf: VelocityVector,
    geometry: &MeshGeometry,
) -> PhysicsResult<TransformReport> {
    geometry.check_field(field)?;

    let mut report = TransformReport::default();

    info!("    Calculating internal field");
    for (value, &centre) in field.internal.iter_mut().zip(&geometry.cell_centres) {
        *value = u_inf - model.velocity(centre);
    }
    report.n_cells = field.internal.len();

    info!("    Calculating boundary fields");
    for (patch, geom) in field.boundary.iter_mut().zip(&geometry.patches) {
        if geom.class.is_wall() {
            debug!("     保留固壁边界 {}", geom.name);
            report.wall_patches.push(geom.name.clone());
            continue;
        }

        info!("     - {}", geom.name);
        let values = geom
            .face_centres
            .iter()
            .map(|&cf| u_inf - model.velocity(cf))
            .collect();
        patch.values = PatchValues::fixed(values);

        report.n_faces += geom.n_faces();
        report.updated_patches.push(geom.name.clone());
    }

    Ok(report)
}
