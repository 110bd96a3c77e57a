//! # ORCA .engrad 梯度文件解析器
//!
//! 解析 ORCA 的 `<label>.engrad` 文件中的梯度块。
//!
//! ## .engrad 格式说明
//! ```text
//! #
//! # Number of atoms
//! #
//!  2
//! #
//! # The current total energy in Eh
//! #
//!     -40.123456
//! #
//! # The current gradient in Eh/bohr
//! #
//!       0.000123
//!      -0.000456
//!       ...
//! #
//! # The atomic numbers and current coordinates in Bohr
//! #
//!    6     0.0000000    0.0000000    0.0000000
//! ```
//!
//! ## 状态机
//! - `Idle` --"# The current gradient"--> `Capturing`（清空累积）
//! - `Capturing` --"# The at"--> `Idle`
//! - `Capturing` 中不含 `#` 的行：取最后一个字段为数值，每 3 个组成一个向量
//!
//! 文件结束时未凑满 3 个的分量被丢弃，丢弃数记录在 [`GradientBlock::dropped`]。
//!
//! ## 依赖关系
//! - 被 `calculator/mod.rs` 使用
//! - 使用 `units.rs`

use crate::error::{OrcalcError, Result};
use crate::parsers::orca_out::parse_last_token;
use crate::units;
use std::fs;
use std::path::Path;

/// 梯度块起始标记
pub const GRADIENT_START: &str = "# The current gradient";

/// 梯度块结束标记（"# The atomic numbers ..."）
pub const GRADIENT_STOP: &str = "# The at";

/// 解析器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientState {
    Idle,
    Capturing,
}

/// 梯度块 (Eh/Bohr)
#[derive(Debug, Clone, PartialEq)]
pub struct GradientBlock {
    /// 每原子梯度向量，文件顺序
    pub vectors: Vec<[f64; 3]>,

    /// 末尾未凑满三元组而被丢弃的分量数 (0, 1 或 2)
    pub dropped: usize,
}

impl GradientBlock {
    /// 换算为力 (eV/Å)
    pub fn to_forces(&self) -> Vec<[f64; 3]> {
        self.vectors
            .iter()
            .map(|g| units::gradient_to_force(*g))
            .collect()
    }
}

/// 逐行驱动的梯度块解析器
#[derive(Debug)]
pub struct GradientParser {
    state: GradientState,
    seen_start: bool,
    vectors: Vec<[f64; 3]>,
    pending: Vec<f64>,
}

impl Default for GradientParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GradientParser {
    pub fn new() -> Self {
        GradientParser {
            state: GradientState::Idle,
            seen_start: false,
            vectors: Vec::new(),
            pending: Vec::with_capacity(3),
        }
    }

    /// 处理一行
    pub fn feed(&mut self, line: &str) -> Result<()> {
        if line.contains(GRADIENT_START) {
            self.state = GradientState::Capturing;
            self.seen_start = true;
            self.vectors.clear();
            self.pending.clear();
            return Ok(());
        }

        match self.state {
            GradientState::Idle => {}
            GradientState::Capturing => {
                if line.contains(GRADIENT_STOP) {
                    self.state = GradientState::Idle;
                } else if !line.contains('#') && !line.trim().is_empty() {
                    self.pending.push(parse_last_token(line)?);
                    if self.pending.len() == 3 {
                        self.vectors
                            .push([self.pending[0], self.pending[1], self.pending[2]]);
                        self.pending.clear();
                    }
                }
            }
        }

        Ok(())
    }

    /// 结束解析；从未出现起始标记时报错
    pub fn finish(self, source_name: &str) -> Result<GradientBlock> {
        if !self.seen_start {
            return Err(OrcalcError::GradientBlockNotFound {
                path: source_name.to_string(),
            });
        }

        Ok(GradientBlock {
            vectors: self.vectors,
            dropped: self.pending.len(),
        })
    }
}

/// 从行序列中解析梯度块
pub fn parse_gradient<I, S>(lines: I, source_name: &str) -> Result<GradientBlock>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = GradientParser::new();
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    parser.finish(source_name)
}

/// 读取 .engrad 文件中的梯度块
pub fn read_gradient_file(path: &Path) -> Result<GradientBlock> {
    let content = fs::read_to_string(path).map_err(|e| OrcalcError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_gradient(content.lines(), &path.display().to_string())
}
