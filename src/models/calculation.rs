//! # 单点计算结果数据模型
//!
//! 存储从 ORCA 输出中提取并换算到宿主单位的能量和力。
//!
//! ## 依赖关系
//! - 被 `calculator/` 填充
//! - 被 `commands/` 显示和导出

/// 单点计算结果
#[derive(Debug, Clone, PartialEq)]
pub struct OrcaResults {
    /// 能量 (eV)
    pub energy: f64,

    /// 每个原子的力 (eV/Å)，顺序与结构一致；仅在任务包含 gradient 时存在
    pub forces: Option<Vec<[f64; 3]>>,
}

impl OrcaResults {
    pub fn new(energy: f64) -> Self {
        OrcaResults {
            energy,
            forces: None,
        }
    }

    pub fn with_forces(mut self, forces: Vec<[f64; 3]>) -> Self {
        self.forces = Some(forces);
        self
    }

    /// 最大力分量模长 (eV/Å)
    pub fn max_force(&self) -> Option<f64> {
        self.forces.as_ref().and_then(|forces| {
            forces
                .iter()
                .map(|f| (f[0] * f[0] + f[1] * f[1] + f[2] * f[2]).sqrt())
                .fold(None, |acc: Option<f64>, norm| {
                    Some(acc.map_or(norm, |m| m.max(norm)))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_force() {
        let r = OrcaResults::new(-1.0).with_forces(vec![[3.0, 4.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!((r.max_force().unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_force_without_forces() {
        assert_eq!(OrcaResults::new(-1.0).max_force(), None);
        assert_eq!(OrcaResults::new(-1.0).with_forces(vec![]).max_force(), None);
    }
}
