//! # 解析器模块
//!
//! ORCA 输入/输出文件和结构文件的读写。
//!
//! ## 依赖关系
//! - 被 `calculator/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: orca_inp, orca_out, engrad, xyz

pub mod engrad;
pub mod orca_inp;
pub mod orca_out;
pub mod xyz;
