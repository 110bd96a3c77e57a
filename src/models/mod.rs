//! # 数据模型模块
//!
//! 定义分子结构、计算参数和计算结果数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `calculator/` 和 `commands/` 使用
//! - 子模块: structure, parameters, calculation

pub mod calculation;
pub mod parameters;
pub mod structure;

pub use calculation::OrcaResults;
pub use parameters::{OrcaParameters, ParameterOverrides};
pub use structure::{Atom, Molecule};
