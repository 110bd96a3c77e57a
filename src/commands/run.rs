//! # run 命令实现
//!
//! 完整单点计算。
//!
//! ## 功能
//! - 读取 .xyz 结构
//! - 写入 `<label>.inp` / `<label>.ase`
//! - 调用 ORCA（阻塞，显示 spinner）
//! - 读取能量和力并显示，可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `calculator/`, `parsers/xyz.rs`, `utils/`

use super::{build_calculator, report};
use crate::cli::run::RunArgs;
use crate::error::{OrcalcError, Result};
use crate::parsers::xyz;
use crate::utils::{output, progress};

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("ORCA Single-Point Calculation");

    if !args.params.structure.exists() {
        return Err(OrcalcError::FileNotFound {
            path: args.params.structure.display().to_string(),
        });
    }

    let molecule = xyz::parse_xyz_file(&args.params.structure)?;
    let mut calc = build_calculator(&args.params)?;

    output::print_info(&format!(
        "Structure '{}' ({}, {} atoms)",
        molecule.name,
        molecule.formula(),
        molecule.len()
    ));

    output::print_info(&format!(
        "Running: {}",
        calc.command.command_line(&calc.paths)
    ));

    let spinner = progress::create_spinner("Waiting for ORCA...");
    let outcome = calc.calculate(&molecule).cloned();
    spinner.finish_and_clear();

    output::print_warnings(calc.take_warnings());
    let results = outcome?;

    output::print_separator();
    report::print_results(&molecule, &results);

    if let Some(ref csv_path) = args.csv {
        report::save_forces_csv(&molecule, &results, csv_path)?;
        output::print_success(&format!("Forces saved to '{}'", csv_path.display()));
    }

    output::print_done(&format!(
        "Results read from '{}'",
        calc.paths.output.display()
    ));

    Ok(())
}
