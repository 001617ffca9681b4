// apps/srf_cli/src/commands/init.rs

//! 初始化命令
//!
//! 遍历算例的时间目录（或只处理 `--time` 指定的一个），
//! 在初始时刻写出相对速度场。

use anyhow::{Context, Result};
use clap::Args;
use srf_io::{CaseStore, FileCase, TimeDirectory};
use srf_workflow::{run_times, InitOptions, InitOutcome, RELATIVE_VELOCITY_FIELD};
use std::path::PathBuf;
use tracing::{info, warn};

/// 初始化参数
#[derive(Args)]
pub struct InitArgs {
    /// 算例目录
    #[arg(short, long, default_value = ".")]
    pub case: PathBuf,

    /// 只处理指定时间目录
    #[arg(short, long)]
    pub time: Option<String>,

    /// 场名称
    #[arg(short, long, default_value = RELATIVE_VELOCITY_FIELD)]
    pub field: String,

    /// 均匀性检查容差（0 为严格相等）
    #[arg(long, default_value = "0.0", value_parser = parse_tolerance)]
    pub tolerance: f64,
}

/// 容差必须为有限非负数
fn parse_tolerance(s: &str) -> Result<f64, String> {
    let tol: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !tol.is_finite() || tol < 0.0 {
        return Err(format!("容差必须为有限非负数, 实际为 {s}"));
    }
    Ok(tol)
}

/// 执行初始化命令
pub fn execute(args: InitArgs) -> Result<()> {
    let case = FileCase::open(&args.case)
        .with_context(|| format!("无法打开算例: {}", args.case.display()))?;

    let times = match &args.time {
        Some(name) => vec![TimeDirectory::parse(name.as_str())?],
        None => case.times().context("无法列出时间目录")?,
    };
    if times.is_empty() {
        warn!("算例中没有时间目录: {}", args.case.display());
    }

    let options = InitOptions {
        field_name: args.field,
        uniformity_tolerance: args.tolerance,
    };

    let outcomes = run_times(&case, &times, &options).context("初始化相对速度场失败")?;

    let written = outcomes.iter().filter(|(_, o)| o.is_written()).count();
    for (time, outcome) in &outcomes {
        if let InitOutcome::Written { free_stream, report } = outcome {
            info!(
                "时间 {}: {} 单元, {} 边界面, 保留固壁 {:?}, 均匀={}",
                time, report.n_cells, report.n_faces, report.wall_patches, free_stream.uniform
            );
        }
    }
    info!("写出 {} 个时间, 跳过 {} 个", written, outcomes.len() - written);

    info!("End");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tolerance() {
        assert_eq!(parse_tolerance("0.0"), Ok(0.0));
        assert_eq!(parse_tolerance("1e-9"), Ok(1e-9));
        assert!(parse_tolerance("-0.1").is_err());
        assert!(parse_tolerance("NaN").is_err());
        assert!(parse_tolerance("inf").is_err());
        assert!(parse_tolerance("abc").is_err());
    }
}
