//! Verilog artifacts for a minimized function
//!
//! [`VerilogModule`] declares one input per variable and a single output driven by the
//! minimized SOP. [`Testbench`] drives every term index through that module and checks the
//! output against the table, using the minimized value for don't-care rows.
//!
//! Both implement [`HdlWriter`], so they can be written to any [`Write`], a `String` or a
//! file in the same way.
//!
//! ```
//! use kmap_logic::{HdlWriter, Minimizable, TruthTable, Value, VerilogModule};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut table = TruthTable::new(2)?;
//! table.set(3, Value::True)?;
//! let verilog = VerilogModule::from_minimization(&table.minimize()?).to_hdl_string();
//! assert!(verilog.contains("assign out = A & B;"));
//! # Ok(())
//! # }
//! ```

mod testbench;
mod verilog;

pub use testbench::{TestStep, Testbench};
pub use verilog::VerilogModule;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Serialisation of hardware description text
pub trait HdlWriter {
    /// Write the text to any writer
    ///
    /// `to_hdl_string` and `to_hdl_file` both delegate to this method.
    fn write_hdl<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    /// Render the text into a string
    fn to_hdl_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_hdl(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Write the text to a file
    fn to_hdl_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_hdl(&mut writer)?;
        writer.flush()
    }
}

/// Default module name for an `n`-variable function
pub(crate) fn module_name(num_vars: usize) -> String {
    format!("kmap_{}v", num_vars)
}

#[cfg(test)]
mod tests;
