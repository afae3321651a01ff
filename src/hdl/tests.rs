use super::*;
use crate::expression::BoolExpr;
use crate::minimize::{Minimizable, Minimization};
use crate::table::{TruthTable, Value};
use tempfile::TempDir;

fn minimized(values: &[Value]) -> Minimization {
    let n = values.len().trailing_zeros() as usize;
    TruthTable::from_values(n, values)
        .unwrap()
        .minimize()
        .unwrap()
}

#[test]
fn test_module_declaration() {
    let m = minimized(&[Value::False, Value::False, Value::False, Value::True]);
    let module = VerilogModule::from_minimization(&m);
    assert_eq!(module.name(), "kmap_2v");
    assert_eq!(module.expression(), "A & B");

    let text = module.to_hdl_string();
    assert!(text.starts_with("module kmap_2v (\n"));
    assert!(text.contains("    input wire A,\n    input wire B,\n    output wire out\n);"));
    assert!(text.contains("assign out = A & B;"));
    assert!(text.trim_end().ends_with("endmodule"));
}

#[test]
fn test_multi_term_expression_uses_verilog_operators() {
    let m = minimized(&[Value::True, Value::False, Value::False, Value::True]);
    let module = VerilogModule::from_minimization(&m);
    assert_eq!(module.expression(), "(~A & ~B) | (A & B)");
    // The assigned expression is the same function as the table
    let expr = BoolExpr::parse(module.expression()).unwrap();
    assert!(expr.mismatches(m.table()).is_empty());
}

#[test]
fn test_constant_functions() {
    let zero = minimized(&[Value::False; 4]);
    assert_eq!(VerilogModule::from_minimization(&zero).expression(), "0");
    let one = minimized(&[Value::True; 8]);
    let module = VerilogModule::from_minimization(&one);
    assert_eq!(module.expression(), "1");
    assert_eq!(module.name(), "kmap_3v");
}

#[test]
fn test_renamed_module() {
    let m = minimized(&[Value::False, Value::True]);
    let module = VerilogModule::from_minimization(&m).with_name("select");
    let bench = Testbench::from_minimization(&m).with_module_name(module.name());
    assert!(module.to_hdl_string().starts_with("module select ("));
    assert!(bench.to_hdl_string().contains("select dut (.A(A), .out(out));"));
}

#[test]
fn test_testbench_covers_every_index() {
    let m = minimized(&[
        Value::False,
        Value::DontCare,
        Value::False,
        Value::True,
    ]);
    let bench = Testbench::from_minimization(&m);
    let expected: Vec<(u32, bool)> = bench.steps().iter().map(|s| (s.index, s.expected)).collect();
    // The don't-care at index 1 was absorbed into B, so the bench expects 1 there
    assert_eq!(expected, vec![(0, false), (1, true), (2, false), (3, true)]);

    let text = bench.to_hdl_string();
    assert!(text.contains("module kmap_2v_tb;"));
    assert!(text.contains("reg A, B;"));
    assert!(text.contains("{A, B} = 2'b01; #1;"));
    assert!(text.contains("if (out !== 1'b1) begin $display(\"FAIL index 3"));
    assert!(text.contains("$finish;"));
    assert_eq!(text.matches("#1;").count(), 4);
}

#[test]
fn test_testbench_agrees_with_generated_module() {
    let m = minimized(&[
        Value::True,
        Value::False,
        Value::DontCare,
        Value::True,
        Value::False,
        Value::True,
        Value::DontCare,
        Value::False,
    ]);
    let module = VerilogModule::from_minimization(&m);
    let expr = BoolExpr::parse(module.expression()).unwrap();
    for step in Testbench::from_minimization(&m).steps() {
        assert_eq!(expr.evaluate_index(m.labels(), step.index), step.expected);
    }
}

#[test]
fn test_write_to_file() {
    let dir = TempDir::new().unwrap();
    let m = minimized(&[Value::False, Value::True, Value::True, Value::False]);

    let module_path = dir.path().join("module.v");
    VerilogModule::from_minimization(&m)
        .to_hdl_file(&module_path)
        .unwrap();
    let written = std::fs::read_to_string(&module_path).unwrap();
    assert_eq!(written, VerilogModule::from_minimization(&m).to_hdl_string());

    let bench_path = dir.path().join("testbench.v");
    Testbench::from_minimization(&m)
        .to_hdl_file(&bench_path)
        .unwrap();
    assert!(std::fs::read_to_string(&bench_path)
        .unwrap()
        .contains("kmap_2v dut"));
}
