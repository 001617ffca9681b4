// crates/srf_io/src/case.rs

//! 算例目录布局与网格文档
//!
//! ```text
//! <case>/
//!   constant/
//!     mesh.json              单元中心、边界面心
//!     SRFProperties.json     旋转参数（也可为 .yaml / .yml）
//!   <time>/
//!     <field>.json           矢量场
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use srf_config::SRF_PROPERTIES_NAME;
use srf_physics::{MeshGeometry, PatchGeometry, SpatialPoint};

use crate::time::TimeDirectory;

/// 常量目录名
pub const CONSTANT_DIR: &str = "constant";

/// 网格文件名
pub const MESH_FILE: &str = "mesh.json";

/// 算例目录布局
#[derive(Debug, Clone)]
pub struct CaseLayout {
    root: PathBuf,
}

impl CaseLayout {
    /// 创建布局
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 算例根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 常量目录
    pub fn constant_dir(&self) -> PathBuf {
        self.root.join(CONSTANT_DIR)
    }

    /// 网格文件
    pub fn mesh_path(&self) -> PathBuf {
        self.constant_dir().join(MESH_FILE)
    }

    /// SRF 配置文件
    ///
    /// 依次查找 `.json`、`.yaml`、`.yml`，都不存在时返回 `.json` 路径。
    pub fn srf_properties_path(&self) -> PathBuf {
        let constant = self.constant_dir();
        ["json", "yaml", "yml"]
            .iter()
            .map(|ext| constant.join(format!("{SRF_PROPERTIES_NAME}.{ext}")))
            .find(|p| p.is_file())
            .unwrap_or_else(|| constant.join(format!("{SRF_PROPERTIES_NAME}.json")))
    }

    /// 时间目录
    pub fn time_dir(&self, time: &TimeDirectory) -> PathBuf {
        self.root.join(&time.name)
    }

    /// 场文件
    pub fn field_path(&self, field: &str, time: &TimeDirectory) -> PathBuf {
        self.time_dir(time).join(format!("{field}.json"))
    }
}

/// 边界文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchDocument {
    /// 边界名称
    pub name: String,
    /// 边界类型标签（`wall`、`patch`、`symmetryPlane` 等）
    #[serde(rename = "type")]
    pub patch_type: String,
    /// 面心坐标
    #[serde(default)]
    pub face_centres: Vec<SpatialPoint>,
}

/// 网格文档（`constant/mesh.json`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MeshDocument {
    /// 单元中心
    pub cell_centres: Vec<SpatialPoint>,
    /// 边界
    #[serde(default)]
    pub patches: Vec<PatchDocument>,
}

impl MeshDocument {
    /// 转换为几何（在此完成边界分类）
    pub fn into_geometry(self) -> MeshGeometry {
        self.patches.into_iter().fold(
            MeshGeometry::new(self.cell_centres),
            |mesh, p| mesh.with_patch(PatchGeometry::new(p.name, p.patch_type, p.face_centres)),
        )
    }
}

impl From<&MeshGeometry> for MeshDocument {
    fn from(mesh: &MeshGeometry) -> Self {
        Self {
            cell_centres: mesh.cell_centres.clone(),
            patches: mesh
                .patches
                .iter()
                .map(|p| PatchDocument {
                    name: p.name.clone(),
                    patch_type: p.patch_type.clone(),
                    face_centres: p.face_centres.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srf_physics::PatchClass;

    #[test]
    fn test_layout_paths() {
        let layout = CaseLayout::new("/tmp/rotor");
        assert_eq!(layout.mesh_path(), PathBuf::from("/tmp/rotor/constant/mesh.json"));
        assert_eq!(
            layout.field_path("Urel", &TimeDirectory::zero()),
            PathBuf::from("/tmp/rotor/0/Urel.json")
        );
        assert_eq!(
            layout.srf_properties_path(),
            PathBuf::from("/tmp/rotor/constant/SRFProperties.json")
        );
    }

    #[test]
    fn test_srf_properties_yaml_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CaseLayout::new(dir.path());
        std::fs::create_dir_all(layout.constant_dir()).unwrap();
        std::fs::write(layout.constant_dir().join("SRFProperties.yaml"), "rpm: 1\n").unwrap();

        assert!(layout.srf_properties_path().ends_with("SRFProperties.yaml"));
    }

    #[test]
    fn test_mesh_document_classification() {
        let json = r#"{
            "cell_centres": [[0,0,0],[1,0,0]],
            "patches": [
                {"name": "inlet", "type": "patch", "face_centres": [[-1,0,0]]},
                {"name": "blade", "type": "wall", "face_centres": [[0,1,0]]}
            ]
        }"#;
        let doc: MeshDocument = serde_json::from_str(json).unwrap();
        let mesh = doc.clone().into_geometry();

        assert_eq!(mesh.n_cells(), 2);
        assert_eq!(mesh.patch("inlet").unwrap().class, PatchClass::Other);
        assert_eq!(mesh.patch("blade").unwrap().class, PatchClass::Wall);
        assert_eq!(MeshDocument::from(&mesh), doc);
    }
}
