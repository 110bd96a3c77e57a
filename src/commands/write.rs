//! # write 命令实现
//!
//! 只写入 `<label>.inp` 和 `<label>.ase`，不运行 ORCA。
//!
//! ## 依赖关系
//! - 使用 `cli/write.rs` 定义的参数
//! - 使用 `calculator/`, `parsers/xyz.rs`, `utils/output.rs`

use super::build_calculator;
use crate::cli::write::WriteArgs;
use crate::error::{OrcalcError, Result};
use crate::parsers::xyz;
use crate::utils::output;

/// 执行 write 命令
pub fn execute(args: WriteArgs) -> Result<()> {
    output::print_header("Writing ORCA Input");

    if !args.params.structure.exists() {
        return Err(OrcalcError::FileNotFound {
            path: args.params.structure.display().to_string(),
        });
    }

    let molecule = xyz::parse_xyz_file(&args.params.structure)?;
    let mut calc = build_calculator(&args.params)?;

    calc.write_input(&molecule)?;

    output::print_conversion(
        &args.params.structure.display().to_string(),
        &calc.paths.input.display().to_string(),
    );
    output::print_success(&format!(
        "Parameters saved to '{}'",
        calc.paths.params.display()
    ));
    output::print_info(&format!(
        "Run in '{}': {}",
        calc.paths.directory().display(),
        calc.command.command_line(&calc.paths)
    ));

    Ok(())
}
