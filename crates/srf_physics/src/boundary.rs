// crates/srf_physics/src/boundary.rs

//! 边界分类
//!
//! 每个边界按网格中记录的类型标签划分为固壁 (`Wall`) 或其他 (`Other`)。
//! 分类在加载几何时完成一次，之后作为普通数据使用。

use serde::{Deserialize, Serialize};

/// 唯一识别的固壁类型标签
pub const WALL_PATCH_TYPE: &str = "wall";

/// 边界分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchClass {
    /// 固壁，保留原有边界条件
    Wall,
    /// 其他边界，按旋转速度覆盖
    Other,
}

impl PatchClass {
    /// 按类型标签分类
    ///
    /// 只有 [`WALL_PATCH_TYPE`] 被识别为固壁（区分大小写），
    /// 未知标签一律视为 `Other`。
    pub fn classify(patch_type: &str) -> Self {
        if patch_type == WALL_PATCH_TYPE {
            Self::Wall
        } else {
            Self::Other
        }
    }

    /// 是否为固壁
    #[inline]
    pub fn is_wall(&self) -> bool {
        matches!(self, Self::Wall)
    }
}

impl std::fmt::Display for PatchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Wall => "wall",
            Self::Other => "other",
        };
        write!(f, "{}", name)
    }
}
