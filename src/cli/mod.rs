//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 完整单点计算（写输入、调用 ORCA、读取结果）
//! - `write`: 只写输入文件
//! - `read`: 从已有 label 读取结果，不重新运行
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: params, run, write, read

pub mod params;
pub mod read;
pub mod run;
pub mod write;

use clap::{Parser, Subcommand};

/// orcalc - ORCA 单点能量与力计算器
#[derive(Parser)]
#[command(name = "orcalc")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Single-point energies and forces through the ORCA quantum chemistry program", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Write the ORCA input, run ORCA and read energy and forces
    Run(run::RunArgs),

    /// Write the ORCA input and parameter files without running ORCA
    Write(write::WriteArgs),

    /// Read results of a previous calculation without re-running ORCA
    Read(read::ReadArgs),
}
