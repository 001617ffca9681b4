// apps/srf_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 显示旋转参数、网格规模和边界分类。

use anyhow::{Context, Result};
use clap::Args;
use srf_io::{CaseStore, FileCase};
use srf_physics::build_rotation_model;
use std::path::PathBuf;
use tracing::info;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 算例目录
    #[arg(short, long, default_value = ".")]
    pub case: PathBuf,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    info!("=== SRF 算例信息 ===");

    let case = FileCase::open(&args.case)
        .with_context(|| format!("无法打开算例: {}", args.case.display()))?;

    let props = case.read_srf_properties().context("读取 SRFProperties 失败")?;
    let model = build_rotation_model(&props)?;

    println!("=== 旋转参数 ===");
    println!("模型: {}", props.model);
    println!("原点: {}", model.origin());
    println!("转轴: {}", model.axis());
    if let Some(rpm) = props.rpm {
        println!("转速: {} rpm", rpm);
    }
    println!("角速度 Ω: {} rad/s", model.omega());

    let mesh = case.read_geometry().context("读取网格失败")?;

    println!("\n=== 网格 ===");
    println!("单元数: {}", mesh.n_cells());
    println!("边界面数: {}", mesh.n_boundary_faces());
    for patch in &mesh.patches {
        println!(
            "  {:<20} {:<16} {:>8} 面  [{}]",
            patch.name,
            patch.patch_type,
            patch.n_faces(),
            patch.class
        );
    }

    println!("\n=== 时间目录 ===");
    for time in case.times()? {
        println!("  {}", time);
    }

    Ok(())
}
