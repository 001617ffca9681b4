// crates/srf_io/src/error.rs

//! IO 错误类型定义

use std::path::PathBuf;

use thiserror::Error;

/// IO 模块结果类型别名
pub type IoResult<T> = Result<T, IoError>;

/// IO 错误枚举
#[derive(Error, Debug)]
pub enum IoError {
    /// 底层 IO 错误
    #[error("IO 错误: {path}: {source}")]
    Io {
        /// 相关路径
        path: PathBuf,
        /// 底层错误
        #[source]
        source: std::io::Error,
    },

    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound {
        /// 未找到的路径
        path: PathBuf,
    },

    /// 序列化/反序列化失败
    #[error("文件解析错误: {path} - {message}")]
    Serialization {
        /// 文件路径
        path: PathBuf,
        /// 错误信息
        message: String,
    },

    /// 无效的时间目录名
    #[error("无效的时间: '{0}'")]
    InvalidTime(String),
}

impl IoError {
    /// 包装底层 IO 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 序列化错误
    pub fn serialization(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Serialization {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
