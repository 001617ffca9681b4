// crates/srf_io/src/time.rs

//! 时间目录
//!
//! 算例中名称可解析为数值的子目录即时间目录（如 `0`、`0.5`、`100`）。

use std::cmp::Ordering;
use std::path::Path;

use crate::error::{IoError, IoResult};

/// 时间目录
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDirectory {
    /// 目录名（原样保留，用于拼接路径）
    pub name: String,
    /// 时间值 [s]
    pub value: f64,
}

impl TimeDirectory {
    /// 解析时间目录名
    pub fn parse(name: impl Into<String>) -> IoResult<Self> {
        let name = name.into();
        match name.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self { name, value }),
            _ => Err(IoError::InvalidTime(name)),
        }
    }

    /// 初始时刻 `0`
    pub fn zero() -> Self {
        Self {
            name: "0".into(),
            value: 0.0,
        }
    }

    /// 是否晚于初始化时刻
    #[inline]
    pub fn is_after_start(&self) -> bool {
        self.value > 0.0
    }

    /// 列出算例根目录下的全部时间目录（按时间升序）
    pub fn list(case_root: &Path) -> IoResult<Vec<Self>> {
        let entries = std::fs::read_dir(case_root).map_err(|e| IoError::io(case_root, e))?;

        let mut times = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| IoError::io(case_root, e))?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if let Ok(time) = Self::parse(name) {
                    times.push(time);
                }
            }
        }

        times.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
        Ok(times)
    }
}

impl std::fmt::Display for TimeDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(TimeDirectory::parse("0").unwrap().value, 0.0);
        assert_eq!(TimeDirectory::parse("0.25").unwrap().value, 0.25);
        assert!(TimeDirectory::parse("constant").is_err());
        assert!(TimeDirectory::parse("inf").is_err());
    }

    #[test]
    fn test_after_start() {
        assert!(!TimeDirectory::zero().is_after_start());
        assert!(TimeDirectory::parse("1e-3").unwrap().is_after_start());
    }

    #[test]
    fn test_list_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["10", "0", "constant", "0.5", "system"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }
        std::fs::write(dir.path().join("3"), "not a directory").unwrap();

        let names: Vec<String> = TimeDirectory::list(dir.path())
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["0", "0.5", "10"]);
    }
}
