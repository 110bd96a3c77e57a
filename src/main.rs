//! # orcalc - ORCA 单点计算适配器
//!
//! 将分子结构和方法/基组关键词写成 ORCA 输入文件，调用 ORCA，
//! 再从输出中读取能量 (eV) 和原子受力 (eV/Å)。
//!
//! ## 子命令
//! - `run`   - 写输入、运行 ORCA、读取结果
//! - `write` - 只写输入文件
//! - `read`  - 读取已有计算的结果
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── calculator/ (ORCA 会话: 写输入/运行/读结果)
//!   │     ├── parsers/    (格式读写)
//!   │     └── models/     (数据模型)
//!   ├── units.rs    (Hartree/Bohr 换算)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod calculator;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod units;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
