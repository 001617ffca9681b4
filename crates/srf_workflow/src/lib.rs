// crates/srf_workflow/src/lib.rs

//! SRF 相对速度初始化流程
//!
//! 把算例读写、旋转模型和场变换串成一次性的预处理步骤。
//!
//! # 模块结构
//!
//! - [`runner`]: 初始化流程（时间门控、场头检查、计算、写出）
//!
//! # 示例
//!
//! ```rust,ignore
//! use srf_io::{CaseStore, FileCase};
//! use srf_workflow::{run_times, InitOptions};
//!
//! let case = FileCase::open("cases/rotor")?;
//! let times = case.times()?;
//! for (time, outcome) in run_times(&case, &times, &InitOptions::default())? {
//!     println!("{time}: {outcome:?}");
//! }
//! ```

pub mod runner;

// 重导出核心类型
pub use runner::{
    init_relative_velocity, run_times, InitOptions, InitOutcome, WorkflowError,
    RELATIVE_VELOCITY_FIELD,
};
