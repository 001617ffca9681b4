// crates/srf_physics/src/error.rs

//! 物理层错误类型

use thiserror::Error;

/// 物理层结果类型
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// 物理层错误
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// 内部场为空，无法确定来流速度
    #[error("内部场为空: 无法确定来流速度")]
    EmptyField,

    /// 均匀性容差无效（负数或非有限值）
    #[error("均匀性容差无效: {0}")]
    InvalidTolerance(f64),

    /// 数组大小不匹配
    #[error("数组大小不匹配: {name} 期望{expected}, 实际{actual}")]
    SizeMismatch {
        /// 数据名称
        name: String,
        /// 期望大小
        expected: usize,
        /// 实际大小
        actual: usize,
    },

    /// 场边界与网格边界不一致
    #[error("边界不一致: 位置 {index} 网格为 '{mesh}', 场为 '{field}'")]
    PatchMismatch {
        /// 边界位置
        index: usize,
        /// 网格边界名
        mesh: String,
        /// 场边界名
        field: String,
    },
}

impl PhysicsError {
    /// 检查数组大小
    pub fn check_size(name: impl Into<String>, expected: usize, actual: usize) -> PhysicsResult<()> {
        if expected != actual {
            return Err(Self::SizeMismatch {
                name: name.into(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}
