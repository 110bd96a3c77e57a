//! # 计算文件路径
//!
//! 由 label（前缀）派生一次计算所用的全部文件：
//! `<label>.inp`, `<label>.out`, `<label>.engrad`, `<label>.ase`。
//! 各字段公开，调用方可以单独覆盖。
//!
//! ## 依赖关系
//! - 被 `calculator/mod.rs`, `calculator/process.rs` 使用

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const INPUT_EXT: &str = "inp";
pub const OUTPUT_EXT: &str = "out";
pub const ENGRAD_EXT: &str = "engrad";
pub const PARAMS_EXT: &str = "ase";

/// 一次计算的文件集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcPaths {
    pub label: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub engrad: PathBuf,
    pub params: PathBuf,
}

impl CalcPaths {
    pub fn from_label(label: impl AsRef<Path>) -> Self {
        let label = label.as_ref().to_path_buf();
        CalcPaths {
            input: with_suffix(&label, INPUT_EXT),
            output: with_suffix(&label, OUTPUT_EXT),
            engrad: with_suffix(&label, ENGRAD_EXT),
            params: with_suffix(&label, PARAMS_EXT),
            label,
        }
    }

    /// 输入文件所在目录，ORCA 在此目录下运行
    pub fn directory(&self) -> PathBuf {
        match self.input.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// label 的文件名部分
    pub fn stem(&self) -> String {
        self.label
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "orca".to_string())
    }
}

/// 追加扩展名（不替换 label 中已有的点）
fn with_suffix(label: &Path, ext: &str) -> PathBuf {
    let mut s: OsString = label.as_os_str().to_owned();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}
