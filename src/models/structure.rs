//! # 分子结构数据模型
//!
//! 有序的 (元素符号, 笛卡尔坐标) 列表，坐标单位 Å。
//! 计算器只读取结构，不修改。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `calculator/` 使用
//! - 无外部模块依赖

/// 原子信息
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 元素符号
    pub symbol: String,

    /// 笛卡尔坐标 [x, y, z] (Å)
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            symbol: symbol.into(),
            position,
        }
    }
}

/// 分子结构
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    /// 结构名称
    pub name: String,

    /// 原子列表
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(name: impl Into<String>, atoms: Vec<Atom>) -> Self {
        Molecule {
            name: name.into(),
            atoms,
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// 计算化学式
    pub fn formula(&self) -> String {
        use std::collections::BTreeMap;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.symbol.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methane() -> Molecule {
        Molecule::new(
            "CH4",
            vec![
                Atom::new("C", [0.0, 0.0, 0.0]),
                Atom::new("H", [0.629118, 0.629118, 0.629118]),
                Atom::new("H", [-0.629118, -0.629118, 0.629118]),
                Atom::new("H", [0.629118, -0.629118, -0.629118]),
                Atom::new("H", [-0.629118, 0.629118, -0.629118]),
            ],
        )
    }

    #[test]
    fn test_molecule_formula() {
        assert_eq!(methane().formula(), "CH4");
    }

    #[test]
    fn test_atoms_keep_order() {
        let mol = methane();
        assert_eq!(mol.len(), 5);
        assert!(!mol.is_empty());
        assert!(Molecule::new("empty", vec![]).is_empty());
        assert_eq!(mol.atoms[0].symbol, "C");
        assert_eq!(mol.atoms[1].position, [0.629118, 0.629118, 0.629118]);
    }
}
