//! # 单位换算常数
//!
//! ORCA 使用原子单位 (Hartree, Bohr)，宿主程序使用 eV 与 Å。
//! 数值取 CODATA 2014。
//!
//! ## 依赖关系
//! - 被 `parsers/orca_out.rs`, `parsers/engrad.rs` 使用

/// 1 Hartree (eV)
pub const HARTREE: f64 = 27.211386024367243;

/// 1 Bohr (Å)
pub const BOHR: f64 = 0.52917721067;

/// Hartree -> eV
pub fn hartree_to_ev(energy: f64) -> f64 {
    energy * HARTREE
}

/// 梯度 (Eh/Bohr) -> 力 (eV/Å)，力 = -梯度
pub fn gradient_to_force(gradient: [f64; 3]) -> [f64; 3] {
    let scale = HARTREE / BOHR;
    [
        -gradient[0] * scale,
        -gradient[1] * scale,
        -gradient[2] * scale,
    ]
}
