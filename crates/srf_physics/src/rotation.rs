// crates/srf_physics/src/rotation.rs

//! 刚体旋转模型
//!
//! 旋转参考系中任意点的牵连速度：
//!
//! ```text
//! v(x) = Ω × (x - O)
//! ```
//!
//! 其中 Ω 为角速度矢量，O 为旋转中心。模型构造后只读，
//! 以 `&dyn RotationModel` 显式传给场变换。
//!
//! # rpm 模型
//!
//! ```text
//! Ω = â · rpm · 2π / 60
//! ```
//!
//! `â` 为归一化后的转轴。

use glam::DVec3;
use srf_config::{ConfigError, SrfModelType, SrfProperties};

use crate::types::{vec3, SpatialPoint, VelocityVector};

/// 旋转模型接口
pub trait RotationModel {
    /// 模型名称
    fn name(&self) -> &'static str;

    /// 角速度矢量 [rad/s]
    fn omega(&self) -> DVec3;

    /// 旋转中心 [m]
    fn origin(&self) -> SpatialPoint;

    /// 单位转轴
    fn axis(&self) -> DVec3 {
        self.omega().normalize_or_zero()
    }

    /// 点 `point` 处的旋转速度
    #[inline]
    fn velocity(&self, point: SpatialPoint) -> VelocityVector {
        self.omega().cross(point - self.origin())
    }

    /// 批量求旋转速度
    fn velocity_field(&self, points: &[SpatialPoint]) -> Vec<VelocityVector> {
        points.iter().map(|&p| self.velocity(p)).collect()
    }

    /// 由相对速度恢复绝对速度
    #[inline]
    fn absolute_velocity(&self, urel: VelocityVector, point: SpatialPoint) -> VelocityVector {
        urel + self.velocity(point)
    }
}

/// 恒定转速模型
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RpmRotation {
    origin: SpatialPoint,
    axis: DVec3,
    rpm: f64,
    omega: DVec3,
}

impl RpmRotation {
    /// 创建 rpm 模型
    ///
    /// 转轴会被归一化；零长度或非有限的参数返回 [`ConfigError::InvalidValue`]。
    pub fn new(origin: SpatialPoint, axis: DVec3, rpm: f64) -> Result<Self, ConfigError> {
        if !origin.is_finite() {
            return Err(ConfigError::invalid("origin", origin, "坐标必须为有限值"));
        }
        if !axis.is_finite() || axis.length_squared() == 0.0 {
            return Err(ConfigError::invalid("axis", axis, "转轴必须为非零有限矢量"));
        }
        if !rpm.is_finite() {
            return Err(ConfigError::invalid("rpm", rpm, "转速必须为有限值"));
        }

        let axis = axis.normalize();
        let omega = axis * (rpm * std::f64::consts::TAU / 60.0);

        Ok(Self {
            origin,
            axis,
            rpm,
            omega,
        })
    }

    /// 从配置构造
    pub fn from_properties(props: &SrfProperties) -> Result<Self, ConfigError> {
        props.validate()?;
        Self::new(
            vec3(props.require_origin()?),
            vec3(props.require_axis()?),
            props.require_rpm()?,
        )
    }

    /// 转速 [rev/min]
    pub fn rpm(&self) -> f64 {
        self.rpm
    }
}

impl RotationModel for RpmRotation {
    fn name(&self) -> &'static str {
        "rpm"
    }

    fn omega(&self) -> DVec3 {
        self.omega
    }

    fn origin(&self) -> SpatialPoint {
        self.origin
    }

    fn axis(&self) -> DVec3 {
        self.axis
    }
}

/// 按配置中的模型类型构造旋转模型
pub fn build_rotation_model(props: &SrfProperties) -> Result<Box<dyn RotationModel>, ConfigError> {
    match props.model {
        SrfModelType::Rpm => Ok(Box::new(RpmRotation::from_properties(props)?)),
    }
}
