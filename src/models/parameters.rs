//! # ORCA 计算参数
//!
//! 电荷、自旋多重度、任务类型，以及原样传给 ORCA 的
//! simple-input 关键词行和 block 输入。
//!
//! 参数以 TOML 形式保存到 `<label>.ase`，用于重启时重新加载。
//!
//! ## 依赖关系
//! - 被 `parsers/orca_inp.rs`, `calculator/`, `commands/` 使用
//! - 使用 `serde` + `toml`

use crate::error::{OrcalcError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// ORCA 计算参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrcaParameters {
    /// 总电荷
    pub charge: i32,

    /// 自旋多重度
    pub mult: u32,

    /// 任务类型，包含 "gradient" 时计算并读取力
    pub task: String,

    /// simple-input 行 (`! ...`)，例如方法和基组
    pub orcasimpleinput: String,

    /// block 输入，原样写入
    pub orcablocks: String,
}

impl Default for OrcaParameters {
    fn default() -> Self {
        OrcaParameters {
            charge: 0,
            mult: 1,
            task: "gradient".to_string(),
            orcasimpleinput: "PBE def2-SVP".to_string(),
            orcablocks: "%scf maxiter 200 end".to_string(),
        }
    }
}

/// 部分覆盖的参数，未给出的字段保持原值
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterOverrides {
    pub charge: Option<i32>,
    pub mult: Option<u32>,
    pub task: Option<String>,
    pub orcasimpleinput: Option<String>,
    pub orcablocks: Option<String>,
}

impl OrcaParameters {
    /// 是否需要计算力
    pub fn wants_forces(&self) -> bool {
        self.task.contains("gradient")
    }

    /// 应用覆盖值，返回是否有字段发生变化
    pub fn update(&mut self, overrides: ParameterOverrides) -> bool {
        let before = self.clone();

        if let Some(charge) = overrides.charge {
            self.charge = charge;
        }
        if let Some(mult) = overrides.mult {
            self.mult = mult;
        }
        if let Some(task) = overrides.task {
            self.task = task;
        }
        if let Some(simple) = overrides.orcasimpleinput {
            self.orcasimpleinput = simple;
        }
        if let Some(blocks) = overrides.orcablocks {
            self.orcablocks = blocks;
        }

        *self != before
    }

    /// 从 TOML 字符串解析，缺失字段取默认值
    pub fn from_toml_str(content: &str, path: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| OrcalcError::ConfigError {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// 读取参数文件
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OrcalcError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| OrcalcError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// 写入参数文件（覆盖）
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self).map_err(|e| OrcalcError::ConfigError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        fs::write(path, content).map_err(|e| OrcalcError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })
    }
}

/// 读取部分参数文件（CLI `--config`）
pub fn read_overrides(path: &Path) -> Result<ParameterOverrides> {
    let content = fs::read_to_string(path).map_err(|e| OrcalcError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| OrcalcError::ConfigError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = OrcaParameters::default();
        assert_eq!(p.charge, 0);
        assert_eq!(p.mult, 1);
        assert_eq!(p.orcasimpleinput, "PBE def2-SVP");
        assert_eq!(p.orcablocks, "%scf maxiter 200 end");
        assert!(p.wants_forces());
    }

    #[test]
    fn test_energy_only_task() {
        let p = OrcaParameters {
            task: "energy".to_string(),
            ..Default::default()
        };
        assert!(!p.wants_forces());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let p = OrcaParameters::from_toml_str("charge = -1\nmult = 2\n", "inline").unwrap();
        assert_eq!(p.charge, -1);
        assert_eq!(p.mult, 2);
        assert_eq!(p.task, "gradient");
    }

    #[test]
    fn test_update_reports_change() {
        let mut p = OrcaParameters::default();
        assert!(!p.update(ParameterOverrides {
            charge: Some(0),
            ..Default::default()
        }));
        assert!(p.update(ParameterOverrides {
            orcasimpleinput: Some("B3LYP def2-TZVP".to_string()),
            ..Default::default()
        }));
        assert_eq!(p.orcasimpleinput, "B3LYP def2-TZVP");
    }

    #[test]
    fn test_write_read_parameter_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orca.ase");
        let p = OrcaParameters {
            charge: 1,
            orcablocks: "%scf Convergence tight \n maxiter 500 \n end".to_string(),
            ..Default::default()
        };
        p.write(&path).unwrap();
        assert_eq!(OrcaParameters::read(&path).unwrap(), p);
    }

    #[test]
    fn test_overrides_reject_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        fs::write(&path, "multiplicity = 3\n").unwrap();

        let err = read_overrides(&path).unwrap_err();
        assert!(matches!(err, OrcalcError::ConfigError { .. }));
    }

    #[test]
    fn test_read_missing_parameter_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OrcaParameters::read(&dir.path().join("none.ase")).unwrap_err();
        assert!(matches!(err, OrcalcError::FileNotFound { .. }));
    }
}
