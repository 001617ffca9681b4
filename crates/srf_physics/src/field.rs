// crates/srf_physics/src/field.rs

//! 速度场定义
//!
//! `VectorField` 保存单元中心值（内部场）和各边界的面值。
//! 边界值使用带标签的枚举表示：
//!
//! - `Fixed`: 逐面给定的速度序列
//! - `Opaque`: 本工具不解释的边界条件（如 `noSlip`），只记录其名称
//!
//! 变换只会整体替换非固壁边界的值，不关心其原有形式。

use serde::{Deserialize, Serialize};

use crate::types::VelocityVector;

/// 边界值表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PatchValues {
    /// 逐面速度值
    Fixed {
        /// 面值序列（与边界面一一对应）
        values: Vec<VelocityVector>,
    },
    /// 不透明边界条件
    Opaque {
        /// 边界条件名称
        condition: String,
    },
}

impl PatchValues {
    /// 创建逐面速度值
    pub fn fixed(values: Vec<VelocityVector>) -> Self {
        Self::Fixed { values }
    }

    /// 创建不透明边界条件
    pub fn opaque(condition: impl Into<String>) -> Self {
        Self::Opaque {
            condition: condition.into(),
        }
    }

    /// 逐面值（不透明边界返回 None）
    pub fn values(&self) -> Option<&[VelocityVector]> {
        match self {
            Self::Fixed { values } => Some(values),
            Self::Opaque { .. } => None,
        }
    }

    /// 是否为逐面值
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }
}

/// 单个边界上的场值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchField {
    /// 边界名称
    pub name: String,
    /// 边界值
    pub values: PatchValues,
}

impl PatchField {
    /// 创建边界场
    pub fn new(name: impl Into<String>, values: PatchValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// 矢量场
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorField {
    /// 场名称
    pub name: String,
    /// 内部场（每个单元一个值）
    pub internal: Vec<VelocityVector>,
    /// 边界场（顺序与网格边界一致）
    #[serde(default)]
    pub boundary: Vec<PatchField>,
}

impl VectorField {
    /// 创建矢量场
    pub fn new(name: impl Into<String>, internal: Vec<VelocityVector>) -> Self {
        Self {
            name: name.into(),
            internal,
            boundary: Vec::new(),
        }
    }

    /// 创建均匀内部场
    pub fn uniform(name: impl Into<String>, value: VelocityVector, n_cells: usize) -> Self {
        Self::new(name, vec![value; n_cells])
    }

    /// 添加边界场
    pub fn with_patch(mut self, name: impl Into<String>, values: PatchValues) -> Self {
        self.boundary.push(PatchField::new(name, values));
        self
    }

    /// 单元数
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.internal.len()
    }

    /// 按名称查找边界
    pub fn patch(&self, name: &str) -> Option<&PatchField> {
        self.boundary.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_patch_values_serde() {
        let fixed = PatchValues::fixed(vec![DVec3::new(1.0, 2.0, 3.0)]);
        let json = serde_json::to_string(&fixed).unwrap();
        assert!(json.contains("\"kind\":\"fixed\""));
        let parsed: PatchValues = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fixed);

        let parsed: PatchValues =
            serde_json::from_str(r#"{"kind":"opaque","condition":"noSlip"}"#).unwrap();
        assert_eq!(parsed, PatchValues::opaque("noSlip"));
        assert!(parsed.values().is_none());
    }

    #[test]
    fn test_field_lookup() {
        let field = VectorField::uniform("Urel", DVec3::X, 4)
            .with_patch("inlet", PatchValues::fixed(vec![DVec3::X; 2]))
            .with_patch("blade", PatchValues::opaque("noSlip"));

        assert_eq!(field.n_cells(), 4);
        assert!(field.patch("inlet").unwrap().values.is_fixed());
        assert!(field.patch("outlet").is_none());
    }
}
