use super::{module_name, HdlWriter};
use crate::minimize::Minimization;
use crate::table::OUTPUT_NAME;
use std::io::{self, Write};
use std::sync::Arc;

/// One stimulus of the testbench
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestStep {
    /// Term index applied to the inputs
    pub index: u32,
    /// Output bit the module must produce
    pub expected: bool,
}

/// Exhaustive self-checking testbench for a [`VerilogModule`](super::VerilogModule)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testbench {
    module: String,
    inputs: Vec<Arc<str>>,
    output: String,
    steps: Vec<TestStep>,
}

impl Testbench {
    /// One step per term index, expecting the table's value or, for a don't-care row, the
    /// value the minimized function chose
    pub fn from_minimization(minimization: &Minimization) -> Self {
        let steps = (0..minimization.table().len() as u32)
            .map(|index| TestStep {
                index,
                expected: minimization.expected(index),
            })
            .collect();
        Testbench {
            module: module_name(minimization.num_vars()),
            inputs: minimization.labels().to_vec(),
            output: OUTPUT_NAME.to_string(),
            steps,
        }
    }

    /// Point the testbench at a renamed module
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module = name.into();
        self
    }

    /// Name of the module under test
    pub fn module_name(&self) -> &str {
        &self.module
    }

    /// Stimuli in application order
    pub fn steps(&self) -> &[TestStep] {
        &self.steps
    }

    fn pattern(&self, index: u32) -> String {
        let width = self.inputs.len();
        format!("{}'b{:0width$b}", width, index, width = width)
    }
}

impl HdlWriter for Testbench {
    fn write_hdl<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let ports: Vec<&str> = self.inputs.iter().map(|s| s.as_ref()).collect();

        writeln!(writer, "`timescale 1ns / 1ps")?;
        writeln!(writer)?;
        writeln!(writer, "module {}_tb;", self.module)?;
        writeln!(writer, "    reg {};", ports.join(", "))?;
        writeln!(writer, "    wire {};", self.output)?;
        writeln!(writer, "    integer errors = 0;")?;
        writeln!(writer)?;

        let mut connections: Vec<String> =
            ports.iter().map(|p| format!(".{0}({0})", p)).collect();
        connections.push(format!(".{0}({0})", self.output));
        writeln!(writer, "    {} dut ({});", self.module, connections.join(", "))?;
        writeln!(writer)?;

        writeln!(writer, "    initial begin")?;
        for step in &self.steps {
            let bit = u8::from(step.expected);
            writeln!(
                writer,
                "        {{{}}} = {}; #1;",
                ports.join(", "),
                self.pattern(step.index)
            )?;
            writeln!(
                writer,
                "        if ({} !== 1'b{}) begin $display(\"FAIL index {}: expected {}, got %b\", {}); errors = errors + 1; end",
                self.output, bit, step.index, bit, self.output
            )?;
        }
        writeln!(
            writer,
            "        if (errors == 0) $display(\"PASS: all {} rows\");",
            self.steps.len()
        )?;
        writeln!(
            writer,
            "        else $display(\"FAIL: %0d mismatches\", errors);"
        )?;
        writeln!(writer, "        $finish;")?;
        writeln!(writer, "    end")?;
        writeln!(writer, "endmodule")?;
        Ok(())
    }
}
