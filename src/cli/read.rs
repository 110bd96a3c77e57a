//! # read 子命令 CLI 定义
//!
//! 读取已有计算的结果
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/read.rs`

use clap::Args;
use std::path::PathBuf;

/// read 子命令参数
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Label (file prefix) of the previous calculation
    #[arg(short, long, default_value = "orca")]
    pub label: PathBuf,

    /// Save forces to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
