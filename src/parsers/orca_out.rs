//! # ORCA 输出日志解析器
//!
//! 从 ORCA 标准输出日志 (`<label>.out`) 中提取最终单点能。
//!
//! ```text
//! -------------------------   --------------------
//! FINAL SINGLE POINT ENERGY       -40.123456789012
//! -------------------------   --------------------
//! ```
//!
//! ## 依赖关系
//! - 被 `calculator/mod.rs` 使用
//! - 使用 `units.rs`

use crate::error::{OrcalcError, Result};
use crate::units;
use std::fs;
use std::path::Path;

/// 能量行标记
pub const ENERGY_MARKER: &str = "FINAL SINGLE POINT ENERGY";

/// 读取 ORCA 输出文件中的能量 (eV)
pub fn read_energy_file(path: &Path) -> Result<f64> {
    let content = fs::read_to_string(path).map_err(|e| OrcalcError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let hartree = parse_energy(&content, &path.display().to_string())?;
    Ok(units::hartree_to_ev(hartree))
}

/// 从字符串内容中提取第一个能量行的数值 (Hartree)
pub fn parse_energy(content: &str, source_name: &str) -> Result<f64> {
    let line = content
        .lines()
        .find(|line| line.contains(ENERGY_MARKER))
        .ok_or_else(|| OrcalcError::MarkerNotFound {
            marker: ENERGY_MARKER.to_string(),
            path: source_name.to_string(),
        })?;

    parse_last_token(line)
}

/// 将行内最后一个空白分隔字段解析为浮点数
pub(crate) fn parse_last_token(line: &str) -> Result<f64> {
    let token = line.split_whitespace().last().unwrap_or("");
    token.parse().map_err(|_| OrcalcError::MalformedNumber {
        token: token.to_string(),
        line: line.trim_end().to_string(),
    })
}
