//! # ORCA 进程调用
//!
//! 等价于 `<orca> <label>.inp > <label>.out`，在输入文件所在目录运行，
//! 阻塞直到进程退出，没有超时。
//!
//! ## 依赖关系
//! - 被 `calculator/mod.rs` 使用
//! - 使用 `calculator/paths.rs`

use super::paths::CalcPaths;
use crate::error::{OrcalcError, Result};

use std::fs::{self, File};
use std::io::ErrorKind;
use std::process::{Command, Stdio};

/// 默认可执行文件名，通过 PATH 查找
pub const DEFAULT_EXECUTABLE: &str = "orca";

/// ORCA 命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrcaCommand {
    /// 可执行文件
    pub program: String,

    /// 放在输入文件之前的额外参数
    pub args: Vec<String>,
}

impl Default for OrcaCommand {
    fn default() -> Self {
        OrcaCommand {
            program: DEFAULT_EXECUTABLE.to_string(),
            args: Vec::new(),
        }
    }
}

impl OrcaCommand {
    /// 由用户给出的命令字符串构造，按 shell 规则分词（支持引号和转义）
    pub fn parse(command: &str) -> Result<Self> {
        let words = shell_words::split(command).map_err(|e| {
            OrcalcError::InvalidArgument(format!("Invalid ORCA command '{}': {}", command, e))
        })?;
        let mut words = words.into_iter();
        let program = words.next().ok_or_else(|| {
            OrcalcError::InvalidArgument("ORCA command must not be empty".to_string())
        })?;
        Ok(OrcaCommand {
            program,
            args: words.collect(),
        })
    }

    /// 可选覆盖，缺省使用 `orca`
    pub fn from_override(command: Option<&str>) -> Result<Self> {
        match command {
            Some(c) => Self::parse(c),
            None => Ok(Self::default()),
        }
    }

    /// 用于显示的命令行，含空格的词加引号
    pub fn command_line(&self, paths: &CalcPaths) -> String {
        let words = std::iter::once(&self.program).chain(&self.args);
        format!(
            "{} {}.{} > {}.{}",
            shell_words::join(words),
            paths.stem(),
            super::paths::INPUT_EXT,
            paths.stem(),
            super::paths::OUTPUT_EXT
        )
    }

    /// 运行 ORCA，标准输出写入 `<label>.out`
    pub fn run(&self, paths: &CalcPaths) -> Result<()> {
        let input_name = paths
            .input
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| {
                OrcalcError::InvalidArgument(format!(
                    "Invalid input path: {}",
                    paths.input.display()
                ))
            })?;

        let stdout = File::create(&paths.output).map_err(|e| OrcalcError::FileWriteError {
            path: paths.output.display().to_string(),
            source: e,
        })?;

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(&input_name)
            .current_dir(paths.directory())
            .stdout(Stdio::from(stdout))
            .status();

        let status = match status {
            Ok(s) => s,
            Err(e) => {
                // 进程没有启动，不留下空的输出文件
                fs::remove_file(&paths.output).ok();
                return Err(if e.kind() == ErrorKind::NotFound {
                    OrcalcError::CommandNotFound {
                        command: self.program.clone(),
                    }
                } else {
                    OrcalcError::CommandFailed {
                        command: self.command_line(paths),
                        status: e.to_string(),
                    }
                });
            }
        };

        if !status.success() {
            return Err(OrcalcError::CommandFailed {
                command: self.command_line(paths),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
