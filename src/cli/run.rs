//! # run 子命令 CLI 定义
//!
//! 完整单点计算
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::params::ParamArgs;
use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Save forces to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
