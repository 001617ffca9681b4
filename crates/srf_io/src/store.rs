// crates/srf_io/src/store.rs

//! 算例存储后端
//!
//! 提供算例读写的抽象接口 [`CaseStore`] 及两种实现：
//! - [`FileCase`]: 基于算例目录的 JSON 文件
//! - [`MemoryCase`]: 内存存储，记录读写次数，便于测试

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;
use srf_config::{ConfigError, SrfProperties, SRF_PROPERTIES_NAME};
use srf_physics::{MeshGeometry, VectorField};
use tracing::debug;

use crate::case::{CaseLayout, MeshDocument};
use crate::error::{IoError, IoResult};
use crate::time::TimeDirectory;

/// 算例存储接口
pub trait CaseStore {
    /// 全部时间目录（升序）
    fn times(&self) -> IoResult<Vec<TimeDirectory>>;

    /// 检查场头：指定时间下是否存在该场
    fn field_exists(&self, field: &str, time: &TimeDirectory) -> IoResult<bool>;

    /// 读取场
    fn read_field(&self, field: &str, time: &TimeDirectory) -> IoResult<VectorField>;

    /// 读取网格几何
    fn read_geometry(&self) -> IoResult<MeshGeometry>;

    /// 读取 SRF 配置
    fn read_srf_properties(&self) -> Result<SrfProperties, ConfigError>;

    /// 写入场
    ///
    /// 目标由 `field` 名称决定，与场文档内的名称无关，
    /// 因此 `read_field(name, ..)` 读出的场可原地写回。
    fn write_field(&self, field: &str, time: &TimeDirectory, data: &VectorField) -> IoResult<()>;
}

// ============================================================
// 文件存储
// ============================================================

/// 文件存储
#[derive(Debug, Clone)]
pub struct FileCase {
    layout: CaseLayout,
}

impl FileCase {
    /// 打开算例目录
    pub fn open(root: impl Into<PathBuf>) -> IoResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(IoError::NotFound { path: root });
        }
        Ok(Self {
            layout: CaseLayout::new(root),
        })
    }

    /// 目录布局
    pub fn layout(&self) -> &CaseLayout {
        &self.layout
    }

    /// 保存网格几何
    pub fn write_geometry(&self, mesh: &MeshGeometry) -> IoResult<()> {
        write_json_atomic(&self.layout.mesh_path(), &MeshDocument::from(mesh))
    }

    /// 保存 SRF 配置（JSON）
    pub fn write_srf_properties(&self, props: &SrfProperties) -> IoResult<()> {
        let path = self
            .layout
            .constant_dir()
            .join(format!("{SRF_PROPERTIES_NAME}.json"));
        write_json_atomic(&path, props)
    }
}

impl CaseStore for FileCase {
    fn times(&self) -> IoResult<Vec<TimeDirectory>> {
        TimeDirectory::list(self.layout.root())
    }

    fn field_exists(&self, field: &str, time: &TimeDirectory) -> IoResult<bool> {
        Ok(self.layout.field_path(field, time).is_file())
    }

    fn read_field(&self, field: &str, time: &TimeDirectory) -> IoResult<VectorField> {
        read_json(&self.layout.field_path(field, time))
    }

    fn read_geometry(&self) -> IoResult<MeshGeometry> {
        let doc: MeshDocument = read_json(&self.layout.mesh_path())?;
        Ok(doc.into_geometry())
    }

    fn read_srf_properties(&self) -> Result<SrfProperties, ConfigError> {
        let path = self.layout.srf_properties_path();
        if !path.is_file() {
            return Err(ConfigError::Missing(format!(
                "{SRF_PROPERTIES_NAME} ({})",
                path.display()
            )));
        }
        SrfProperties::from_file(path)
    }

    fn write_field(&self, field: &str, time: &TimeDirectory, data: &VectorField) -> IoResult<()> {
        write_json_atomic(&self.layout.field_path(field, time), data)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> IoResult<T> {
    if !path.is_file() {
        return Err(IoError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| IoError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| IoError::serialization(path, e))
}

/// 写入临时文件后重命名（原子操作）
fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> IoResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| IoError::io(parent, e))?;
    }

    let content = serde_json::to_string_pretty(value).map_err(|e| IoError::serialization(path, e))?;

    let temp_path = path.with_extension("json.tmp");
    {
        let file = File::create(&temp_path).map_err(|e| IoError::io(&temp_path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .map_err(|e| IoError::io(&temp_path, e))?;
        writer.flush().map_err(|e| IoError::io(&temp_path, e))?;
    }

    std::fs::rename(&temp_path, path).map_err(|e| IoError::io(path, e))?;
    debug!("已写入 {}", path.display());
    Ok(())
}

// ============================================================
// 内存存储
// ============================================================

/// 内存存储
#[derive(Debug, Default)]
pub struct MemoryCase {
    fields: RwLock<HashMap<(String, String), VectorField>>,
    times: RwLock<Vec<TimeDirectory>>,
    geometry: Option<MeshGeometry>,
    srf_properties: Option<SrfProperties>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MemoryCase {
    /// 创建空的内存算例
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置网格几何
    pub fn with_geometry(mut self, mesh: MeshGeometry) -> Self {
        self.geometry = Some(mesh);
        self
    }

    /// 设置 SRF 配置
    pub fn with_srf_properties(mut self, props: SrfProperties) -> Self {
        self.srf_properties = Some(props);
        self
    }

    /// 登记时间目录（无场）
    pub fn with_time(self, time: TimeDirectory) -> Self {
        self.register_time(&time);
        self
    }

    /// 放入场（不计入写次数）
    pub fn with_field(self, time: TimeDirectory, field: VectorField) -> Self {
        self.register_time(&time);
        self.fields
            .write()
            .insert((field.name.clone(), time.name.clone()), field);
        self
    }

    /// 取出场副本（不计入读次数）
    pub fn field(&self, field: &str, time: &TimeDirectory) -> Option<VectorField> {
        self.fields
            .read()
            .get(&(field.to_string(), time.name.clone()))
            .cloned()
    }

    /// 读操作次数（含场头检查）
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// 写操作次数
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    fn register_time(&self, time: &TimeDirectory) {
        let mut times = self.times.write();
        if !times.iter().any(|t| t.name == time.name) {
            times.push(time.clone());
            times.sort_by(|a, b| a.value.total_cmp(&b.value));
        }
    }

    fn touch_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }
}

impl CaseStore for MemoryCase {
    fn times(&self) -> IoResult<Vec<TimeDirectory>> {
        Ok(self.times.read().clone())
    }

    fn field_exists(&self, field: &str, time: &TimeDirectory) -> IoResult<bool> {
        self.touch_read();
        Ok(self
            .fields
            .read()
            .contains_key(&(field.to_string(), time.name.clone())))
    }

    fn read_field(&self, field: &str, time: &TimeDirectory) -> IoResult<VectorField> {
        self.touch_read();
        self.field(field, time).ok_or_else(|| IoError::NotFound {
            path: PathBuf::from(&time.name).join(field),
        })
    }

    fn read_geometry(&self) -> IoResult<MeshGeometry> {
        self.touch_read();
        self.geometry.clone().ok_or_else(|| IoError::NotFound {
            path: PathBuf::from("constant/mesh"),
        })
    }

    fn read_srf_properties(&self) -> Result<SrfProperties, ConfigError> {
        self.touch_read();
        self.srf_properties
            .clone()
            .ok_or_else(|| ConfigError::Missing(SRF_PROPERTIES_NAME.into()))
    }

    fn write_field(&self, field: &str, time: &TimeDirectory, data: &VectorField) -> IoResult<()> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.register_time(time);
        self.fields
            .write()
            .insert((field.to_string(), time.name.clone()), data.clone());
        Ok(())
    }
}
