// crates/srf_physics/src/types.rs

//! 核心类型定义
//!
//! 空间点与速度共用 `glam::DVec3` 表示，通过类型别名区分语义。

use glam::DVec3;

/// 空间坐标 [m]
pub type SpatialPoint = DVec3;

/// 速度矢量 [m/s]
pub type VelocityVector = DVec3;

/// 从配置层的 `[f64; 3]` 转换
#[inline]
pub fn vec3(v: [f64; 3]) -> DVec3 {
    DVec3::from_array(v)
}
