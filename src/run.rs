//! Checking and exporting a finished minimization
//!
//! [`verify`] re-parses the rendered expressions and compares them with the table, so a
//! renderer bug cannot slip past the cover-level checks. [`write_artifacts`] stores
//! everything a run produces in one directory:
//!
//! | File                | Contents                                   |
//! |---------------------|--------------------------------------------|
//! | `module.v`          | [`VerilogModule`]                          |
//! | `testbench.v`       | [`Testbench`]                              |
//! | `minimized_SOP.txt` | Human SOP                                  |
//! | `minimized_POS.txt` | Human POS (only if it was derived)         |
//! | `kmap_run.txt`      | The input table in the text table format   |

use crate::error::KmapError;
use crate::expression::BoolExpr;
use crate::hdl::{HdlWriter, Testbench, VerilogModule};
use crate::minimize::Minimization;
use crate::render::Notation;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse every rendering of `minimization` and check it against the table
///
/// Checks the human and code SOP, the Verilog expression and, when derived, the human POS.
/// Fails with [`KmapError::Verification`] at the first rendering that disagrees on a
/// specified row.
pub fn verify(minimization: &Minimization) -> Result<(), KmapError> {
    let labels = minimization.labels();
    let mut forms = vec![
        ("SOP", minimization.sop()),
        ("code SOP", minimization.sop_code()),
        ("Verilog SOP", minimization.sop_with(&Notation::VERILOG)),
    ];
    if let Some(pos) = minimization.pos() {
        forms.push(("POS", pos));
    }

    for (form, text) in forms {
        let expr = BoolExpr::parse_over(&text, labels)?;
        let indices = expr.mismatches(minimization.table());
        if !indices.is_empty() {
            return Err(KmapError::Verification { form, indices });
        }
        debug!("{} verified: {}", form, text);
    }
    Ok(())
}

/// Write the artifacts of a run into `dir`, creating it if needed
///
/// Returns the paths written, in the order of the table above.
pub fn write_artifacts<P: AsRef<Path>>(
    minimization: &Minimization,
    dir: P,
) -> Result<Vec<PathBuf>, KmapError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let path = dir.join("module.v");
    VerilogModule::from_minimization(minimization).to_hdl_file(&path)?;
    written.push(path);

    let path = dir.join("testbench.v");
    Testbench::from_minimization(minimization).to_hdl_file(&path)?;
    written.push(path);

    let path = dir.join("minimized_SOP.txt");
    fs::write(&path, format!("{}\n", minimization.sop()))?;
    written.push(path);

    if let Some(pos) = minimization.pos() {
        let path = dir.join("minimized_POS.txt");
        fs::write(&path, format!("{}\n", pos))?;
        written.push(path);
    }

    let path = dir.join("kmap_run.txt");
    minimization.table().to_file(&path)?;
    written.push(path);

    info!("wrote {} files to {}", written.len(), dir.display());
    Ok(written)
}
