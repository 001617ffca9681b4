// crates/srf_workflow/src/runner.rs

//! 初始化流程
//!
//! 单次调用的处理顺序：
//!
//! 1. 时间 > 0 时跳过，不做任何读写
//! 2. 场头不存在时跳过（不是错误）
//! 3. 读取场，按 SRF 配置构造旋转模型（配置错误为致命错误）
//! 4. 检测来流速度，改写内部场和非固壁边界
//! 5. 全部成功后写回同一时间目录

use srf_config::ConfigError;
use srf_io::{CaseStore, IoError, TimeDirectory};
use srf_physics::{
    apply_relative_velocity, build_rotation_model, detect_free_stream_with_tolerance, FreeStream,
    PhysicsError, TransformReport,
};
use thiserror::Error;
use tracing::info;

/// 相对速度场的约定名称
pub const RELATIVE_VELOCITY_FIELD: &str = "Urel";

/// 流程错误
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// 读写错误
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 计算错误
    #[error("Computation error: {0}")]
    Physics(#[from] PhysicsError),
}

/// 初始化选项
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// 场名称
    pub field_name: String,
    /// 均匀性检查的逐分量容差（0 为严格相等）
    pub uniformity_tolerance: f64,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            field_name: RELATIVE_VELOCITY_FIELD.to_string(),
            uniformity_tolerance: 0.0,
        }
    }
}

/// 单个时间的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum InitOutcome {
    /// 已写出
    Written {
        /// 来流检测结果
        free_stream: FreeStream,
        /// 变换统计
        report: TransformReport,
    },
    /// 时间晚于初始时刻
    SkippedTime {
        /// 时间值
        time: f64,
    },
    /// 场不存在
    SkippedMissingField {
        /// 场名称
        field: String,
    },
}

impl InitOutcome {
    /// 是否写出了场
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    /// 是否被跳过
    pub fn is_skipped(&self) -> bool {
        !self.is_written()
    }
}

/// 在指定时间初始化相对速度场
pub fn init_relative_velocity<S: CaseStore + ?Sized>(
    store: &S,
    time: &TimeDirectory,
    options: &InitOptions,
) -> Result<InitOutcome, WorkflowError> {
    if time.is_after_start() {
        info!("Skipping time {} > 0", time.value);
        return Ok(InitOutcome::SkippedTime { time: time.value });
    }

    let name = options.field_name.as_str();
    if !store.field_exists(name, time)? {
        info!("    No {}", name);
        return Ok(InitOutcome::SkippedMissingField {
            field: name.to_string(),
        });
    }

    info!("    Reading {}", name);
    let mut field = store.read_field(name, time)?;

    info!("    Creating SRF model");
    let props = store.read_srf_properties()?;
    let model = build_rotation_model(&props)?;
    info!(
        "    SRF 模型 {}: Ω = {}, 原点 = {}",
        model.name(),
        model.omega(),
        model.origin()
    );

    let geometry = store.read_geometry()?;

    info!("    Checking internal field with size {}", field.n_cells());
    let free_stream = detect_free_stream_with_tolerance(&field.internal, options.uniformity_tolerance)?;
    info!("    Uniform velocity : {}", free_stream.velocity);

    let report = apply_relative_velocity(&mut field, model.as_ref(), free_stream.velocity, &geometry)?;

    info!("    Writing {}", name);
    store.write_field(name, time, &field)?;

    Ok(InitOutcome::Written {
        free_stream,
        report,
    })
}

/// 依次处理多个时间
///
/// 任一时间出错立即返回，已处理时间的写出不回滚。
pub fn run_times<S: CaseStore + ?Sized>(
    store: &S,
    times: &[TimeDirectory],
    options: &InitOptions,
) -> Result<Vec<(TimeDirectory, InitOutcome)>, WorkflowError> {
    let mut outcomes = Vec::with_capacity(times.len());
    for time in times {
        info!("Time = {}", time);
        let outcome = init_relative_velocity(store, time, options)?;
        outcomes.push((time.clone(), outcome));
    }
    Ok(outcomes)
}
