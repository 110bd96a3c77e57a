//! # 计算参数 CLI 定义
//!
//! `run` 和 `write` 共用的参数选项。
//! 优先级：默认值 < `--config` 文件 < 命令行选项。
//!
//! ## 依赖关系
//! - 被 `cli/run.rs`, `cli/write.rs` 使用
//! - 由 `commands/mod.rs` 转换为 `OrcaParameters`

use clap::Args;
use std::path::PathBuf;

/// 计算参数
#[derive(Args, Debug)]
pub struct ParamArgs {
    /// Path to the structure file (.xyz)
    #[arg(short, long)]
    pub structure: PathBuf,

    /// Label (file prefix) for <label>.inp, <label>.out, <label>.engrad, <label>.ase
    #[arg(short, long, default_value = "orca")]
    pub label: PathBuf,

    /// TOML file with calculation parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Total charge
    #[arg(long, allow_hyphen_values = true)]
    pub charge: Option<i32>,

    /// Spin multiplicity
    #[arg(long)]
    pub mult: Option<u32>,

    /// Task; forces are computed when it contains 'gradient'
    #[arg(long)]
    pub task: Option<String>,

    /// ORCA simple-input line (method, basis set, keywords)
    #[arg(long)]
    pub simple_input: Option<String>,

    /// ORCA block input, written verbatim
    #[arg(long)]
    pub blocks: Option<String>,

    /// ORCA command, shell-quoted (defaults to 'orca' from PATH)
    #[arg(long, env = "ORCA_COMMAND")]
    pub orca_command: Option<String>,
}
