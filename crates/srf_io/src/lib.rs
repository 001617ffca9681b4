// crates/srf_io/src/lib.rs

//! SRF 算例读写模块
//!
//! 提供速度场、网格几何和 SRF 配置的加载与保存。
//!
//! # 模块
//!
//! - [`time`]: 时间目录解析
//! - [`case`]: 算例目录布局与网格文档
//! - [`store`]: `CaseStore` 存储接口及文件/内存实现
//! - [`error`]: IO 错误类型
//!
//! # 算例目录
//!
//! ```text
//! <case>/
//!   constant/mesh.json
//!   constant/SRFProperties.json
//!   0/Urel.json
//! ```
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use srf_io::{CaseStore, FileCase};
//!
//! let case = FileCase::open("cases/rotor")?;
//! for time in case.times()? {
//!     if case.field_exists("Urel", &time)? {
//!         let field = case.read_field("Urel", &time)?;
//!     }
//! }
//! ```

pub mod case;
pub mod error;
pub mod store;
pub mod time;

// 重导出常用类型
pub use case::{CaseLayout, MeshDocument, PatchDocument};
pub use error::{IoError, IoResult};
pub use store::{CaseStore, FileCase, MemoryCase};
pub use time::TimeDirectory;
