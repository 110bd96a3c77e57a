//! # 结果输出
//!
//! 终端表格和 CSV 导出，供 `run` 与 `read` 共用。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/read.rs` 使用
//! - 使用 `utils/output.rs`, `tabled`, `csv`

use crate::error::{OrcalcError, Result};
use crate::models::{Molecule, OrcaResults};
use crate::units::HARTREE;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 力表格行
#[derive(Debug, Clone, Tabled)]
struct ForceRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Atom")]
    symbol: String,
    #[tabled(rename = "Fx (eV/Å)")]
    fx: String,
    #[tabled(rename = "Fy (eV/Å)")]
    fy: String,
    #[tabled(rename = "Fz (eV/Å)")]
    fz: String,
}

/// 打印能量和力
pub fn print_results(molecule: &Molecule, results: &OrcaResults) {
    output::print_success(&format!(
        "Energy: {:.6} eV ({:.10} Eh)",
        results.energy,
        results.energy / HARTREE
    ));

    let Some(forces) = &results.forces else {
        return;
    };

    let rows: Vec<ForceRow> = forces
        .iter()
        .enumerate()
        .map(|(i, f)| ForceRow {
            index: i + 1,
            symbol: molecule
                .atoms
                .get(i)
                .map(|a| a.symbol.clone())
                .unwrap_or_else(|| "?".to_string()),
            fx: format!("{:.6}", f[0]),
            fy: format!("{:.6}", f[1]),
            fz: format!("{:.6}", f[2]),
        })
        .collect();

    println!("{}", Table::new(rows));

    if let Some(max) = results.max_force() {
        output::print_info(&format!("Max force: {:.6} eV/Å", max));
    }
}

/// 保存力到 CSV
pub fn save_forces_csv(
    molecule: &Molecule,
    results: &OrcaResults,
    output_path: &Path,
) -> Result<()> {
    let forces = results.forces.as_ref().ok_or_else(|| {
        OrcalcError::InvalidArgument(
            "No forces available; task does not request a gradient".to_string(),
        )
    })?;

    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["index", "symbol", "fx_eV_A", "fy_eV_A", "fz_eV_A"])?;

    for (i, f) in forces.iter().enumerate() {
        let symbol = molecule.atoms.get(i).map(|a| a.symbol.as_str()).unwrap_or("?");
        wtr.write_record(&[
            (i + 1).to_string(),
            symbol.to_string(),
            format!("{:.10}", f[0]),
            format!("{:.10}", f[1]),
            format!("{:.10}", f[2]),
        ])?;
    }

    wtr.flush().map_err(|e| OrcalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Atom;

    #[test]
    fn test_save_forces_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forces.csv");
        let mol = Molecule::new(
            "h2",
            vec![Atom::new("H", [0.0, 0.0, 0.0]), Atom::new("H", [0.0, 0.0, 0.74])],
        );
        let results =
            OrcaResults::new(-30.0).with_forces(vec![[0.0, 0.0, 1.0], [0.0, 0.0, -1.0]]);

        save_forces_csv(&mol, &results, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "index,symbol,fx_eV_A,fy_eV_A,fz_eV_A");
        assert!(lines[2].starts_with("2,H,"));
    }

    #[test]
    fn test_save_forces_csv_without_forces() {
        let dir = tempfile::tempdir().unwrap();
        let mol = Molecule::new("h2", vec![]);
        let err = save_forces_csv(&mol, &OrcaResults::new(-1.0), &dir.path().join("f.csv"));
        assert!(matches!(err, Err(OrcalcError::InvalidArgument(_))));
    }
}
