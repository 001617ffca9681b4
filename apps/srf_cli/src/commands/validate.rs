// apps/srf_cli/src/commands/validate.rs

//! 算例验证命令
//!
//! 检查 SRF 配置、网格和初始速度场是否可以初始化。

use anyhow::{bail, Context, Result};
use clap::Args;
use srf_io::{CaseStore, FileCase, TimeDirectory};
use srf_physics::{build_rotation_model, detect_free_stream, MeshGeometry};
use srf_workflow::RELATIVE_VELOCITY_FIELD;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 算例目录
    #[arg(short, long, default_value = ".")]
    pub case: PathBuf,

    /// 场名称
    #[arg(short, long, default_value = RELATIVE_VELOCITY_FIELD)]
    pub field: String,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 检查项发现的问题
enum Finding {
    Error(String),
    Warning(String),
}

/// 单个检查项（配置、网格、初始场）
struct Check {
    title: &'static str,
    target: String,
    findings: Vec<Finding>,
    summary: Option<String>,
}

impl Check {
    fn new(title: &'static str, target: impl std::fmt::Display) -> Self {
        Self {
            title,
            target: target.to_string(),
            findings: Vec::new(),
            summary: None,
        }
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.findings.push(Finding::Error(msg.into()));
    }

    fn warning(&mut self, msg: impl Into<String>) {
        self.findings.push(Finding::Warning(msg.into()));
    }

    fn n_errors(&self) -> usize {
        self.findings.iter().filter(|f| matches!(f, Finding::Error(_))).count()
    }

    fn n_warnings(&self) -> usize {
        self.findings.len() - self.n_errors()
    }

    /// 严格模式下警告也使检查失败
    fn passed(&self, strict: bool) -> bool {
        self.n_errors() == 0 && !(strict && self.n_warnings() > 0)
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== SRF 算例验证 ===");

    let case = FileCase::open(&args.case)
        .with_context(|| format!("无法打开算例: {}", args.case.display()))?;

    let srf = check_srf_properties(&case);
    let (mesh_check, mesh) = check_mesh(&case);
    let field = check_initial_field(&case, mesh.as_ref(), &args.field)?;

    report(&[srf, mesh_check, field], args.strict)
}

fn check_srf_properties(case: &FileCase) -> Check {
    let mut check = Check::new("SRF 配置", case.layout().srf_properties_path().display());

    match case.read_srf_properties() {
        Ok(props) => match build_rotation_model(&props) {
            Ok(model) => {
                if model.omega().length_squared() == 0.0 {
                    check.warning("转速为零，Urel 将等于来流速度");
                }
                check.summary = Some(format!("{} 模型, Ω = {}", model.name(), model.omega()));
            }
            Err(e) => check.error(format!("旋转模型无效: {}", e)),
        },
        Err(e) => check.error(e.to_string()),
    }
    check
}

fn check_mesh(case: &FileCase) -> (Check, Option<MeshGeometry>) {
    let mut check = Check::new("网格", case.layout().mesh_path().display());

    let mesh = match case.read_geometry() {
        Ok(mesh) => mesh,
        Err(e) => {
            check.error(e.to_string());
            return (check, None);
        }
    };

    if mesh.n_cells() == 0 {
        check.error("网格没有单元");
    }
    if !mesh.patches.iter().any(|p| p.class.is_wall()) {
        check.warning("网格中没有 wall 类型边界");
    }
    for patch in mesh.patches.iter().filter(|p| p.n_faces() == 0) {
        check.warning(format!("边界 {} 没有面", patch.name));
    }
    check.summary = Some(format!(
        "{} 单元, {} 边界, {} 边界面",
        mesh.n_cells(),
        mesh.patches.len(),
        mesh.n_boundary_faces()
    ));
    (check, Some(mesh))
}

fn check_initial_field(case: &FileCase, mesh: Option<&MeshGeometry>, field_name: &str) -> Result<Check> {
    let time = TimeDirectory::zero();
    let mut check = Check::new("初始场", case.layout().field_path(field_name, &time).display());

    if !case.field_exists(field_name, &time)? {
        check.warning(format!("时间 {} 下没有 {}，初始化将跳过", time, field_name));
        return Ok(check);
    }

    let field = match case.read_field(field_name, &time) {
        Ok(field) => field,
        Err(e) => {
            check.error(e.to_string());
            return Ok(check);
        }
    };

    match detect_free_stream(&field.internal) {
        Ok(fs) if !fs.uniform => check.warning(format!(
            "内部场不均匀，将以单元 0 的值 {} 作为来流",
            fs.velocity
        )),
        Ok(fs) => check.summary = Some(format!("均匀来流 {}", fs.velocity)),
        Err(e) => check.error(e.to_string()),
    }

    if let Some(mesh) = mesh {
        if let Err(e) = mesh.check_field(&field) {
            check.error(format!("场与网格不一致: {}", e));
        }
    }

    Ok(check)
}

/// 逐项输出检查结果
fn report(checks: &[Check], strict: bool) -> Result<()> {
    for check in checks {
        let mark = if check.passed(strict) { "✓" } else { "✗" };
        println!("\n[{}] {}: {}", mark, check.title, check.target);
        if let Some(summary) = &check.summary {
            println!("    {}", summary);
        }
        for finding in &check.findings {
            match finding {
                Finding::Error(msg) => {
                    error!("{}: {}", check.title, msg);
                    println!("    错误: {}", msg);
                }
                Finding::Warning(msg) => {
                    warn!("{}: {}", check.title, msg);
                    println!("    警告: {}", msg);
                }
            }
        }
    }

    let failed: Vec<&str> = checks
        .iter()
        .filter(|c| !c.passed(strict))
        .map(|c| c.title)
        .collect();
    if failed.is_empty() {
        println!("\n算例可以初始化");
        Ok(())
    } else {
        bail!("验证失败: {}", failed.join(", "))
    }
}
