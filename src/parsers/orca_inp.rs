//! # ORCA .inp 输入文件读写
//!
//! ## .inp 格式说明
//! ```text
//! ! PBE def2-SVP EnGrad     # simple-input 行
//! %scf maxiter 200 end      # block 输入，原样写入
//! *xyz 0 1                  # 电荷 自旋多重度
//! C 0 0 0                   # 元素 x y z (Å)
//! H 0.629118 0.629118 0.629118
//! *
//! ```
//!
//! 读取时同时接受 `geometry` ... `end` 形式的几何块。
//!
//! ## 依赖关系
//! - 被 `calculator/mod.rs` 使用
//! - 使用 `models/structure.rs`, `models/parameters.rs`

use crate::error::{OrcalcError, Result};
use crate::models::{Atom, OrcaParameters};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn engrad_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bengrad\b").unwrap())
}

fn xyz_block_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\*\s*xyz\b").unwrap())
}

/// 生成 simple-input 行；需要力且关键词中没有 EnGrad 时补上
pub fn simple_input_line(params: &OrcaParameters) -> String {
    let keywords = params.orcasimpleinput.trim();
    if params.wants_forces() && !engrad_keyword().is_match(keywords) {
        format!("! {} EnGrad", keywords)
    } else {
        format!("! {}", keywords)
    }
}

/// 将参数和结构转换为 .inp 格式字符串
pub fn to_inp_string(params: &OrcaParameters, atoms: &[Atom]) -> String {
    let mut result = String::new();

    result.push_str(&simple_input_line(params));
    result.push('\n');
    result.push_str(&params.orcablocks);
    result.push('\n');

    result.push_str(&format!("*xyz {} {}\n", params.charge, params.mult));
    for atom in atoms {
        result.push_str(&format!(
            "{} {} {} {}\n",
            atom.symbol, atom.position[0], atom.position[1], atom.position[2]
        ));
    }
    result.push_str("*\n");

    result
}

/// 写入 .inp 文件（覆盖）
pub fn write_inp_file(path: &Path, params: &OrcaParameters, atoms: &[Atom]) -> Result<()> {
    fs::write(path, to_inp_string(params, atoms)).map_err(|e| OrcalcError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 读取 .inp 文件中的几何块
pub fn read_geometry_file(path: &Path) -> Result<Vec<Atom>> {
    let content = fs::read_to_string(path).map_err(|e| OrcalcError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_geometry(&content, &path.display().to_string())
}

/// 从字符串内容解析几何块
pub fn parse_geometry(content: &str, source_name: &str) -> Result<Vec<Atom>> {
    let mut lines = content.lines();

    let found = lines
        .by_ref()
        .any(|line| line.starts_with("geometry") || xyz_block_header().is_match(line.trim()));
    if !found {
        return Err(OrcalcError::ParseError {
            format: "orca input".to_string(),
            path: source_name.to_string(),
            reason: "No geometry section found".to_string(),
        });
    }

    let mut atoms = Vec::new();
    for line in lines {
        if line.starts_with("end") || line.trim() == "*" {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() != 4 {
            return Err(OrcalcError::ParseError {
                format: "orca input".to_string(),
                path: source_name.to_string(),
                reason: format!("Invalid atom line: {}", line.trim()),
            });
        }

        let mut position = [0.0; 3];
        for (slot, word) in position.iter_mut().zip(&words[1..]) {
            *slot = word.parse().map_err(|_| OrcalcError::MalformedNumber {
                token: word.to_string(),
                line: line.trim().to_string(),
            })?;
        }
        atoms.push(Atom::new(words[0], position));
    }

    Ok(atoms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Vec<Atom> {
        vec![
            Atom::new("O", [0.0, 0.0, 0.119262]),
            Atom::new("H", [0.0, 0.763239, -0.477047]),
            Atom::new("H", [0.0, -0.763239, -0.477047]),
        ]
    }

    #[test]
    fn test_inp_layout() {
        let params = OrcaParameters::default();
        let inp = to_inp_string(&params, &water());
        let lines: Vec<&str> = inp.lines().collect();

        assert_eq!(lines[0], "! PBE def2-SVP EnGrad");
        assert_eq!(lines[1], "%scf maxiter 200 end");
        assert_eq!(lines[2], "*xyz 0 1");
        assert_eq!(lines[3], "O 0 0 0.119262");
        assert_eq!(lines[6], "*");
    }

    #[test]
    fn test_no_engrad_for_energy_task() {
        let params = OrcaParameters {
            task: "energy".to_string(),
            ..Default::default()
        };
        assert_eq!(simple_input_line(&params), "! PBE def2-SVP");
    }

    #[test]
    fn test_existing_engrad_not_duplicated() {
        let params = OrcaParameters {
            orcasimpleinput: "engrad RHF revPBE def2-TZVP def2/J D3BJ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            simple_input_line(&params),
            "! engrad RHF revPBE def2-TZVP def2/J D3BJ"
        );
    }

    #[test]
    fn test_charge_and_multiplicity() {
        let params = OrcaParameters {
            charge: -1,
            mult: 2,
            ..Default::default()
        };
        let inp = to_inp_string(&params, &water());
        assert!(inp.contains("*xyz -1 2\n"));
    }

    #[test]
    fn test_geometry_round_trip() {
        let atoms = vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("H", [0.6291180000000001, -0.629118, 1.0e-9]),
            Atom::new("Cl", [-1.7763568394002505e-15, 12.5, -3.25]),
        ];
        let inp = to_inp_string(&OrcaParameters::default(), &atoms);
        let parsed = parse_geometry(&inp, "round_trip").unwrap();
        assert_eq!(parsed, atoms);
    }

    #[test]
    fn test_parse_geometry_end_block() {
        let content = "start\ngeometry units angstrom\n O 0.0 0.0 0.1\n H 0.0 0.7 -0.4\nend\ntask scf\n";
        let atoms = parse_geometry(content, "nwchem-style").unwrap();
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[1].symbol, "H");
        assert_eq!(atoms[1].position, [0.0, 0.7, -0.4]);
    }

    #[test]
    fn test_parse_geometry_missing_section() {
        let err = parse_geometry("! PBE def2-SVP\n", "empty").unwrap_err();
        assert!(matches!(err, OrcalcError::ParseError { .. }));
    }

    #[test]
    fn test_parse_geometry_bad_coordinate() {
        let err = parse_geometry("*xyz 0 1\nO 0.0 abc 0.0\n*\n", "bad").unwrap_err();
        assert!(matches!(err, OrcalcError::MalformedNumber { .. }));
    }
}
