use super::{module_name, HdlWriter};
use crate::minimize::Minimization;
use crate::table::OUTPUT_NAME;
use crate::render::Notation;
use std::io::{self, Write};
use std::sync::Arc;

/// Combinational module computing the minimized SOP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerilogModule {
    name: String,
    inputs: Vec<Arc<str>>,
    output: String,
    expression: String,
}

impl VerilogModule {
    /// Module `kmap_<n>v` with the table's variables as inputs and output `out`
    ///
    /// A constant function is assigned the literal `0` or `1`.
    pub fn from_minimization(minimization: &Minimization) -> Self {
        VerilogModule {
            name: module_name(minimization.num_vars()),
            inputs: minimization.labels().to_vec(),
            output: OUTPUT_NAME.to_string(),
            expression: minimization.sop_with(&Notation::VERILOG),
        }
    }

    /// Rename the module
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input port names, most significant first
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    /// Output port name
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Right-hand side of the output assignment
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl HdlWriter for VerilogModule {
    fn write_hdl<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "module {} (", self.name)?;
        for input in &self.inputs {
            writeln!(writer, "    input wire {},", input)?;
        }
        writeln!(writer, "    output wire {}", self.output)?;
        writeln!(writer, ");")?;
        writeln!(writer)?;
        writeln!(writer, "    assign {} = {};", self.output, self.expression)?;
        writeln!(writer)?;
        writeln!(writer, "endmodule")?;
        Ok(())
    }
}
