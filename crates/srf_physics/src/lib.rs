// crates/srf_physics/src/lib.rs

//! 旋转参考系 (SRF) 相对速度初始化核心
//!
//! 提供初始化 `Urel` 场所需的全部计算，包括：
//! - 核心类型定义 (types)
//! - 速度场与边界值 (field)
//! - 单元/面心几何 (geometry)
//! - 边界分类 (boundary)
//! - 刚体旋转模型 (rotation)
//! - 来流速度检测 (freestream)
//! - 场变换 (transform)
//!
//! # 算法
//!
//! ```text
//! Urel(x) = U∞ - Ω × (x - O)
//! ```
//!
//! 内部单元在单元中心求值，非固壁边界在面心求值，固壁边界保持不变。

pub mod boundary;
pub mod error;
pub mod field;
pub mod freestream;
pub mod geometry;
pub mod rotation;
pub mod transform;
pub mod types;

// 重导出常用类型
pub use boundary::{PatchClass, WALL_PATCH_TYPE};
pub use error::{PhysicsError, PhysicsResult};
pub use field::{PatchField, PatchValues, VectorField};
pub use freestream::{detect_free_stream, detect_free_stream_with_tolerance, FreeStream};
pub use geometry::{MeshGeometry, PatchGeometry};
pub use rotation::{build_rotation_model, RotationModel, RpmRotation};
pub use transform::{apply_relative_velocity, TransformReport};
pub use types::{SpatialPoint, VelocityVector};
