//! # write 子命令 CLI 定义
//!
//! 只生成输入文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/write.rs`

use super::params::ParamArgs;
use clap::Args;

/// write 子命令参数
#[derive(Args, Debug)]
pub struct WriteArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}
