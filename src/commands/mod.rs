//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `calculator/`, `parsers/`, `models/`, `utils/`
//! - 子模块: run, write, read, report

pub mod read;
pub mod report;
pub mod run;
pub mod write;

use crate::calculator::{Orca, OrcaCommand};
use crate::cli::params::ParamArgs;
use crate::cli::Commands;
use crate::error::{OrcalcError, Result};
use crate::models::parameters::read_overrides;
use crate::models::{OrcaParameters, ParameterOverrides};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run(args) => run::execute(args),
        Commands::Write(args) => write::execute(args),
        Commands::Read(args) => read::execute(args),
    }
}

/// 由命令行参数构造计算器
///
/// 参数依次叠加：默认值、`--config` 文件、命令行选项。
pub(crate) fn build_calculator(args: &ParamArgs) -> Result<Orca> {
    let command = OrcaCommand::from_override(args.orca_command.as_deref())?;
    let mut calc = Orca::new(&args.label, OrcaParameters::default(), command);

    if let Some(ref config) = args.config {
        if !config.exists() {
            return Err(OrcalcError::FileNotFound {
                path: config.display().to_string(),
            });
        }
        calc.set(read_overrides(config)?);
    }

    calc.set(ParameterOverrides {
        charge: args.charge,
        mult: args.mult,
        task: args.task.clone(),
        orcasimpleinput: args.simple_input.clone(),
        orcablocks: args.blocks.clone(),
    });

    Ok(calc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn param_args(argv: &[&str]) -> ParamArgs {
        match Cli::parse_from(argv).command {
            Commands::Run(args) => args.params,
            Commands::Write(args) => args.params,
            Commands::Read(_) => panic!("read has no parameter options"),
        }
    }

    #[test]
    fn test_defaults_without_flags() {
        let args = param_args(&["orcalc", "write", "--structure", "ch4.xyz"]);
        let calc = build_calculator(&args).unwrap();
        assert_eq!(calc.parameters, OrcaParameters::default());
        assert_eq!(calc.paths.input, std::path::PathBuf::from("orca.inp"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("params.toml");
        std::fs::write(
            &config,
            "charge = 1\nmult = 2\norcasimpleinput = \"B3LYP def2-TZVP\"\n",
        )
        .unwrap();

        let config_arg = config.display().to_string();
        let args = param_args(&[
            "orcalc",
            "run",
            "--structure",
            "ch4.xyz",
            "--config",
            &config_arg,
            "--charge",
            "-1",
        ]);
        let params = build_calculator(&args).unwrap().parameters;

        assert_eq!(params.charge, -1);
        assert_eq!(params.mult, 2);
        assert_eq!(params.orcasimpleinput, "B3LYP def2-TZVP");
        assert_eq!(params.task, "gradient");
    }

    #[test]
    fn test_missing_config_file() {
        let args = param_args(&[
            "orcalc",
            "write",
            "--structure",
            "ch4.xyz",
            "--config",
            "/nonexistent/params.toml",
        ]);
        assert!(matches!(
            build_calculator(&args),
            Err(OrcalcError::FileNotFound { .. })
        ));
    }
}
