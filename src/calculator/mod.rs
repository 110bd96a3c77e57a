//! # ORCA 计算器
//!
//! 一次单点计算的会话句柄：写输入、调用 ORCA、读取能量和力。
//! label 通过 [`CalcPaths`] 显式携带，不依赖进程的当前目录。
//!
//! 同一 label 的并发使用会互相覆盖文件，不提供加锁。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/orca_inp.rs`, `parsers/orca_out.rs`, `parsers/engrad.rs`
//! - 子模块: paths, process

pub mod paths;
pub mod process;

pub use paths::CalcPaths;
pub use process::OrcaCommand;

use crate::error::{OrcalcError, Result};
use crate::models::{Molecule, OrcaParameters, OrcaResults, ParameterOverrides};
use crate::parsers::{engrad, orca_inp, orca_out};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// ORCA 计算器
#[derive(Debug, Clone)]
pub struct Orca {
    pub paths: CalcPaths,
    pub parameters: OrcaParameters,
    pub command: OrcaCommand,
    results: Option<OrcaResults>,
    warnings: Vec<String>,
}

impl Orca {
    pub fn new(
        label: impl AsRef<Path>,
        parameters: OrcaParameters,
        command: OrcaCommand,
    ) -> Self {
        Orca {
            paths: CalcPaths::from_label(label),
            parameters,
            command,
            results: None,
            warnings: Vec::new(),
        }
    }

    /// 最近一次读取的结果
    pub fn results(&self) -> Option<&OrcaResults> {
        self.results.as_ref()
    }

    /// 取出读取结果时积累的警告；由调用方在合适的时机输出
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// 修改参数；有变化时清除已缓存的结果
    pub fn set(&mut self, overrides: ParameterOverrides) -> bool {
        let changed = self.parameters.update(overrides);
        if changed {
            self.results = None;
        }
        changed
    }

    /// 写入 `<label>.inp` 和 `<label>.ase`，并删除上一次运行留下的输出
    pub fn write_input(&mut self, molecule: &Molecule) -> Result<()> {
        let dir = self.paths.directory();
        fs::create_dir_all(&dir).map_err(|e| OrcalcError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;

        self.results = None;
        self.warnings.clear();
        remove_stale(&self.paths.output)?;
        remove_stale(&self.paths.engrad)?;

        self.parameters.write(&self.paths.params)?;
        orca_inp::write_inp_file(&self.paths.input, &self.parameters, &molecule.atoms)
    }

    /// 调用 ORCA（阻塞）
    pub fn execute(&self) -> Result<()> {
        self.command.run(&self.paths)
    }

    /// 读取能量，任务包含 gradient 时读取力
    pub fn read_results(&mut self) -> Result<&OrcaResults> {
        if !self.paths.output.exists() {
            return Err(OrcalcError::MissingOutput {
                path: self.paths.output.display().to_string(),
            });
        }

        let mut results = OrcaResults::new(orca_out::read_energy_file(&self.paths.output)?);

        if self.parameters.wants_forces() {
            if !self.paths.engrad.exists() {
                return Err(OrcalcError::MissingOutput {
                    path: self.paths.engrad.display().to_string(),
                });
            }

            let block = engrad::read_gradient_file(&self.paths.engrad)?;
            if block.dropped > 0 {
                self.warnings.push(format!(
                    "{}: dropped {} trailing gradient component(s) outside a full vector",
                    self.paths.engrad.display(),
                    block.dropped
                ));
            }
            results = results.with_forces(block.to_forces());
        }

        Ok(&*self.results.insert(results))
    }

    /// 完整单点计算：写输入 -> 运行 -> 读结果
    pub fn calculate(&mut self, molecule: &Molecule) -> Result<&OrcaResults> {
        self.write_input(molecule)?;
        self.execute()?;
        self.read_results()?;

        let count = self
            .results
            .as_ref()
            .and_then(|r| r.forces.as_ref())
            .map(Vec::len);
        if let Some(n) = count.filter(|&n| n != molecule.len()) {
            self.warnings.push(format!(
                "Read {} force vectors for {} atoms",
                n,
                molecule.len()
            ));
        }

        self.results.as_ref().ok_or_else(|| OrcalcError::MissingOutput {
            path: self.paths.output.display().to_string(),
        })
    }

    /// 从已有 label 恢复计算器、结构和结果，不重新运行 ORCA
    pub fn read(label: impl AsRef<Path>, command: OrcaCommand) -> Result<(Self, Molecule)> {
        let paths = CalcPaths::from_label(label);
        if !paths.output.exists() {
            return Err(OrcalcError::MissingOutput {
                path: paths.output.display().to_string(),
            });
        }

        let atoms = orca_inp::read_geometry_file(&paths.input)?;
        let parameters = OrcaParameters::read(&paths.params)?;
        let molecule = Molecule::new(paths.stem(), atoms);

        let mut calc = Orca {
            paths,
            parameters,
            command,
            results: None,
            warnings: Vec::new(),
        };
        calc.read_results()?;

        Ok((calc, molecule))
    }
}

/// 删除文件，不存在时忽略
fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(OrcalcError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        }),
    }
}
