//! 文件算例端到端测试
//!
//! 在临时目录中构造一个带旋转叶片的算例，运行初始化并检查写出的 `Urel`。

use std::f64::consts::PI;
use std::path::Path;

use glam::DVec3;
use srf_config::SrfProperties;
use srf_io::{CaseStore, FileCase, TimeDirectory};
use srf_physics::{MeshGeometry, PatchGeometry, PatchValues, VectorField};
use srf_workflow::{run_times, InitOptions, InitOutcome, WorkflowError, RELATIVE_VELOCITY_FIELD};

const U_INF: DVec3 = DVec3::new(10.0, 0.0, 0.0);

/// 三个单元、一个入口、一个叶片壁面
fn rotor_mesh() -> MeshGeometry {
    MeshGeometry::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y])
        .with_patch(PatchGeometry::new(
            "inlet",
            "patch",
            vec![DVec3::new(-1.0, 0.0, 0.0), DVec3::new(-1.0, 1.0, 0.0)],
        ))
        .with_patch(PatchGeometry::new("blade", "wall", vec![DVec3::new(0.5, 0.5, 0.0)]))
        .with_patch(PatchGeometry::new("front", "symmetryPlane", vec![DVec3::new(0.0, 0.0, 1.0)]))
}

fn initial_urel() -> VectorField {
    VectorField::uniform(RELATIVE_VELOCITY_FIELD, U_INF, 3)
        .with_patch("inlet", PatchValues::fixed(vec![U_INF; 2]))
        .with_patch("blade", PatchValues::fixed(vec![DVec3::ZERO]))
        .with_patch("front", PatchValues::opaque("slip"))
}

/// 构造算例目录，返回 FileCase
fn setup_case(root: &Path, props: Option<SrfProperties>) -> FileCase {
    let case = FileCase::open(root).unwrap();
    case.write_geometry(&rotor_mesh()).unwrap();
    if let Some(props) = props {
        case.write_srf_properties(&props).unwrap();
    }
    case.write_field(RELATIVE_VELOCITY_FIELD, &TimeDirectory::zero(), &initial_urel()).unwrap();
    case
}

fn unit_z() -> SrfProperties {
    SrfProperties::rpm([0.0; 3], [0.0, 0.0, 1.0], 60.0 / (2.0 * PI))
}

#[test]
fn test_initialise_rotor_case() {
    let dir = tempfile::tempdir().unwrap();
    let case = setup_case(dir.path(), Some(unit_z()));
    std::fs::create_dir(dir.path().join("100")).unwrap();

    let times = case.times().unwrap();
    let outcomes = run_times(&case, &times, &InitOptions::default()).unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].1.is_written());
    assert_eq!(outcomes[1].1, InitOutcome::SkippedTime { time: 100.0 });

    let urel = case.read_field(RELATIVE_VELOCITY_FIELD, &TimeDirectory::zero()).unwrap();
    let expected = [
        DVec3::new(10.0, 0.0, 0.0),
        DVec3::new(10.0, -1.0, 0.0),
        DVec3::new(11.0, 0.0, 0.0),
    ];
    assert_eq!(urel.internal.len(), expected.len());
    for (got, want) in urel.internal.iter().zip(expected) {
        assert!((*got - want).length() < 1e-12, "{got} != {want}");
    }

    // 入口: U - Ω × Cf
    let inlet = urel.patch("inlet").unwrap().values.values().unwrap();
    assert!((inlet[0] - DVec3::new(10.0, 1.0, 0.0)).length() < 1e-12);
    assert!((inlet[1] - DVec3::new(11.0, 1.0, 0.0)).length() < 1e-12);

    // 对称面在旋转轴上，Ω × Cf = 0
    let front = urel.patch("front").unwrap().values.values().unwrap();
    assert!((front[0] - U_INF).length() < 1e-12);

    // 叶片壁面保持不变
    assert_eq!(
        urel.patch("blade").unwrap().values,
        PatchValues::fixed(vec![DVec3::ZERO])
    );

    // 后续时间目录没有写出场
    assert!(!dir.path().join("100").join("Urel.json").exists());
}

#[test]
fn test_rerun_is_idempotent_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let case = setup_case(dir.path(), Some(SrfProperties::rpm([0.2, 0.0, 0.0], [0.0, 1.0, 1.0], 750.0)));
    let times = [TimeDirectory::zero()];
    let path = case.layout().field_path(RELATIVE_VELOCITY_FIELD, &times[0]);

    run_times(&case, &times, &InitOptions::default()).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();

    // 恢复初始场后再次运行
    case.write_field(RELATIVE_VELOCITY_FIELD, &times[0], &initial_urel()).unwrap();
    run_times(&case, &times, &InitOptions::default()).unwrap();
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_field_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let case = setup_case(dir.path(), Some(unit_z()));
    let options = InitOptions {
        field_name: "U".into(),
        ..InitOptions::default()
    };

    let outcomes = run_times(&case, &[TimeDirectory::zero()], &options).unwrap();

    assert!(matches!(outcomes[0].1, InitOutcome::SkippedMissingField { .. }));
    assert!(!dir.path().join("0").join("U.json").exists());
}

#[test]
fn test_missing_srf_properties_aborts_without_write() {
    let dir = tempfile::tempdir().unwrap();
    let case = setup_case(dir.path(), None);
    let path = case.layout().field_path(RELATIVE_VELOCITY_FIELD, &TimeDirectory::zero());
    let before = std::fs::read_to_string(&path).unwrap();

    let result = run_times(&case, &[TimeDirectory::zero()], &InitOptions::default());

    assert!(matches!(result, Err(WorkflowError::Config(_))));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_yaml_srf_properties() {
    let dir = tempfile::tempdir().unwrap();
    let case = setup_case(dir.path(), None);
    std::fs::write(
        dir.path().join("constant").join("SRFProperties.yaml"),
        "model: rpm\norigin: [0.0, 0.0, 0.0]\naxis: [0.0, 0.0, 1.0]\nrpm: 0.0\n",
    )
    .unwrap();

    run_times(&case, &[TimeDirectory::zero()], &InitOptions::default()).unwrap();

    // 转速为零时相对速度等于来流
    let urel = case.read_field(RELATIVE_VELOCITY_FIELD, &TimeDirectory::zero()).unwrap();
    assert!(urel.internal.iter().all(|v| *v == U_INF));
}

#[test]
fn test_overwrites_file_it_read() {
    let dir = tempfile::tempdir().unwrap();
    let case = setup_case(dir.path(), Some(unit_z()));
    let time = TimeDirectory::zero();
    let path = case.layout().field_path(RELATIVE_VELOCITY_FIELD, &time);

    // Urel.json 中的文档名称为 "U"
    let doc = VectorField::uniform("U", U_INF, 3)
        .with_patch("inlet", PatchValues::fixed(vec![U_INF; 2]))
        .with_patch("blade", PatchValues::fixed(vec![DVec3::ZERO]))
        .with_patch("front", PatchValues::opaque("slip"));
    case.write_field(RELATIVE_VELOCITY_FIELD, &time, &doc).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let outcomes = run_times(&case, &[time.clone()], &InitOptions::default()).unwrap();

    assert!(outcomes[0].1.is_written());
    assert_ne!(std::fs::read_to_string(&path).unwrap(), before);
    assert!(!case.layout().field_path("U", &time).exists());

    let urel = case.read_field(RELATIVE_VELOCITY_FIELD, &time).unwrap();
    assert!((urel.internal[2] - DVec3::new(11.0, 0.0, 0.0)).length() < 1e-12);
}
