//! # XYZ 格式解析器
//!
//! ## XYZ 格式说明
//! ```text
//! 5                      # 原子数
//! methane                # 注释行（结构名称）
//! C  0.000  0.000  0.000 # 元素 x y z (Å)
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/structure.rs`

use crate::error::{OrcalcError, Result};
use crate::models::{Atom, Molecule};
use std::fs;
use std::path::Path;

/// 解析 .xyz 文件
pub fn parse_xyz_file(path: &Path) -> Result<Molecule> {
    let content = fs::read_to_string(path).map_err(|e| OrcalcError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_xyz_content(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown"),
    )
}

/// 从字符串内容解析 XYZ 格式
pub fn parse_xyz_content(content: &str, default_name: &str) -> Result<Molecule> {
    let parse_error = |reason: String| OrcalcError::ParseError {
        format: "xyz".to_string(),
        path: default_name.to_string(),
        reason,
    };

    let mut lines = content.lines();

    let count: usize = lines
        .next()
        .and_then(|l| l.trim().parse().ok())
        .ok_or_else(|| parse_error("Missing or invalid atom count line".to_string()))?;

    let name = lines.next().map(str::trim).unwrap_or("");
    let name = if name.is_empty() { default_name } else { name };

    let mut atoms = Vec::with_capacity(count);
    for line in lines.take(count) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(parse_error(format!("Invalid atom line: {}", line.trim())));
        }

        let mut position = [0.0; 3];
        for (slot, word) in position.iter_mut().zip(&parts[1..4]) {
            *slot = word.parse().map_err(|_| OrcalcError::MalformedNumber {
                token: word.to_string(),
                line: line.trim().to_string(),
            })?;
        }
        atoms.push(Atom::new(parts[0], position));
    }

    if atoms.len() != count {
        return Err(parse_error(format!(
            "Expected {} atoms, found {}",
            count,
            atoms.len()
        )));
    }

    Ok(Molecule::new(name, atoms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xyz_methane() {
        let content = "5\nmethane\nC 0.0 0.0 0.0\nH 0.629118 0.629118 0.629118\nH -0.629118 -0.629118 0.629118\nH 0.629118 -0.629118 -0.629118\nH -0.629118 0.629118 -0.629118\n";
        let mol = parse_xyz_content(content, "fallback").unwrap();
        assert_eq!(mol.name, "methane");
        assert_eq!(mol.len(), 5);
        assert_eq!(mol.formula(), "CH4");
    }

    #[test]
    fn test_parse_xyz_blank_comment_uses_default_name() {
        let content = "1\n\nHe 0 0 0\n";
        let mol = parse_xyz_content(content, "helium").unwrap();
        assert_eq!(mol.name, "helium");
    }

    #[test]
    fn test_parse_xyz_truncated() {
        let content = "3\nwater\nO 0 0 0\nH 0 0.7 0.5\n";
        let err = parse_xyz_content(content, "water").unwrap_err();
        assert!(matches!(err, OrcalcError::ParseError { .. }));
    }
}
