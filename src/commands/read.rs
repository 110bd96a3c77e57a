//! # read 命令实现
//!
//! 从已有 label 恢复结构、参数和结果，不重新运行 ORCA。
//!
//! ## 依赖关系
//! - 使用 `cli/read.rs` 定义的参数
//! - 使用 `calculator/`, `utils/output.rs`

use super::report;
use crate::calculator::{Orca, OrcaCommand};
use crate::cli::read::ReadArgs;
use crate::error::{OrcalcError, Result};
use crate::utils::output;

/// 执行 read 命令
pub fn execute(args: ReadArgs) -> Result<()> {
    output::print_header("Reading ORCA Results");

    let (mut calc, molecule) = Orca::read(&args.label, OrcaCommand::default())?;
    output::print_warnings(calc.take_warnings());

    let results = calc.results().cloned().ok_or_else(|| OrcalcError::MissingOutput {
        path: calc.paths.output.display().to_string(),
    })?;

    output::print_info(&format!(
        "Label '{}': {} ({} atoms), charge {}, multiplicity {}",
        calc.paths.label.display(),
        molecule.formula(),
        molecule.len(),
        calc.parameters.charge,
        calc.parameters.mult
    ));
    output::print_info(&format!("! {}", calc.parameters.orcasimpleinput));
    output::print_separator();

    report::print_results(&molecule, &results);

    if let Some(ref csv_path) = args.csv {
        report::save_forces_csv(&molecule, &results, csv_path)?;
        output::print_success(&format!("Forces saved to '{}'", csv_path.display()));
    }

    Ok(())
}
