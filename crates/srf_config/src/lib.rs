// crates/srf_config/src/lib.rs

//! SRF 配置层
//!
//! 提供旋转参考系 (SRF) 的参数定义与校验。
//!
//! # 模块概览
//!
//! - [`srf_properties`]: `SRFProperties` 旋转参数（原点、转轴、转速）
//! - [`error`]: 配置错误类型
//!
//! # 层级架构
//!
//! ```text
//! srf_cli      ─> 命令行
//! srf_workflow ─> 初始化流程
//! srf_io       ─> 算例读写
//! srf_physics  ─> 旋转模型、场变换
//! srf_config   ─> SrfProperties (本层)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod srf_properties;

// 重导出核心类型
pub use error::ConfigError;
pub use srf_properties::{SrfModelType, SrfProperties, SRF_PROPERTIES_NAME};
