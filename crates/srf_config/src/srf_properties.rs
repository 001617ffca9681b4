// crates/srf_config/src/srf_properties.rs

//! SRFProperties - 旋转参考系参数（全 f64）
//!
//! 描述旋转坐标系的原点、转轴和转速。配置与速度场位于同一算例，
//! 以约定名称 [`SRF_PROPERTIES_NAME`] 存放在 `constant/` 目录下。
//!
//! # 文件格式
//!
//! ```json
//! {
//!     "model": "rpm",
//!     "origin": [0.0, 0.0, 0.0],
//!     "axis": [0.0, 0.0, 1.0],
//!     "rpm": 5000.0
//! }
//! ```
//!
//! 所有参数都是 `Option`，缺失项在 [`SrfProperties::validate`] 中
//! 以 [`ConfigError::Missing`] 报告，而不是解析错误。

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

use crate::error::ConfigError;

/// 约定的配置名称
pub const SRF_PROPERTIES_NAME: &str = "SRFProperties";

/// SRF 模型类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SrfModelType {
    /// 以每分钟转数给定的恒定转速
    #[default]
    Rpm,
}

impl SrfModelType {
    /// 模型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rpm => "rpm",
        }
    }
}

impl std::fmt::Display for SrfModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 旋转参考系参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SrfProperties {
    /// 模型类型
    #[serde(default)]
    pub model: SrfModelType,

    /// 旋转中心 [m]
    #[serde(default)]
    pub origin: Option<[f64; 3]>,

    /// 转轴方向（无需归一化）
    #[serde(default)]
    pub axis: Option<[f64; 3]>,

    /// 转速 [rev/min]
    #[serde(default)]
    pub rpm: Option<f64>,
}

impl SrfProperties {
    /// 创建 rpm 模型配置
    pub fn rpm(origin: [f64; 3], axis: [f64; 3], rpm: f64) -> Self {
        Self {
            model: SrfModelType::Rpm,
            origin: Some(origin),
            axis: Some(axis),
            rpm: Some(rpm),
        }
    }

    /// 从文件加载配置
    ///
    /// 扩展名为 `yaml`/`yml` 时按 YAML 解析，其余按 JSON 解析。
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        let config = if is_yaml {
            Self::from_yaml(&content)?
        } else {
            Self::from_json(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 字符串解析（不校验）
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 从 YAML 字符串解析（不校验）
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 保存配置到 JSON 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        let origin = self.require_origin()?;
        if origin.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::invalid("origin", format!("{:?}", origin), "坐标必须为有限值"));
        }

        let axis = self.require_axis()?;
        if axis.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::invalid("axis", format!("{:?}", axis), "分量必须为有限值"));
        }
        let norm = axis.iter().map(|c| c * c).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Err(ConfigError::invalid("axis", format!("{:?}", axis), "转轴长度为零"));
        }

        match self.model {
            SrfModelType::Rpm => {
                let rpm = self.require_rpm()?;
                if !rpm.is_finite() {
                    return Err(ConfigError::invalid("rpm", rpm, "转速必须为有限值"));
                }
            }
        }

        Ok(())
    }

    /// 旋转中心（缺失时报错）
    pub fn require_origin(&self) -> Result<[f64; 3], ConfigError> {
        self.origin.ok_or_else(|| ConfigError::Missing("origin".into()))
    }

    /// 转轴（缺失时报错）
    pub fn require_axis(&self) -> Result<[f64; 3], ConfigError> {
        self.axis.ok_or_else(|| ConfigError::Missing("axis".into()))
    }

    /// 转速 [rev/min]（缺失时报错）
    pub fn require_rpm(&self) -> Result<f64, ConfigError> {
        self.rpm.ok_or_else(|| ConfigError::Missing("rpm".into()))
    }

    /// 角速度大小 [rad/s]
    pub fn angular_speed(&self) -> Result<f64, ConfigError> {
        match self.model {
            SrfModelType::Rpm => Ok(self.require_rpm()? * 2.0 * PI / 60.0),
        }
    }
}
