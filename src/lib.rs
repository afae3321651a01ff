//! # K-map Logic Minimizer
//!
//! Minimizes a single-output Boolean function, given as a truth table with optional
//! don't-care rows, into a two-level expression and generates a small Verilog module and
//! testbench for it.
//!
//! ## Overview
//!
//! The pipeline is the textbook Quine-McCluskey method:
//!
//! 1. Minterms and don't-cares are merged into prime implicants ([`minimize::prime_implicants`]).
//! 2. A covering chart selects the essential primes and completes the cover greedily, or with
//!    an exact search when [`CoverStrategy::Exact`] is configured.
//! 3. The same steps over the zero rows give the product-of-sums form.
//!
//! Results are rendered in human (`~A & B + C`), C-like (`(!A && B) || C`) and Verilog
//! notation, and every term index can be placed on a Gray-coded Karnaugh map.
//!
//! ## Quick Start
//!
//! ```
//! use kmap_logic::{Minimizable, TruthTable, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // f(A, B, C) = majority
//! let mut table = TruthTable::new(3)?;
//! for index in [3, 5, 6, 7] {
//!     table.set(index, Value::True)?;
//! }
//!
//! let result = table.minimize()?;
//! assert_eq!(result.sop_cover().len(), 3);
//! println!("SOP: {}", result.sop());
//! println!("POS: {}", result.pos().unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! ## Reading Tables from Text
//!
//! ```
//! use kmap_logic::{Minimizable, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = TruthTable::from_text(".i 2\n.ilb sel en\n01 1\n10 1\n")?;
//! assert_eq!(table.minimize()?.sop(), "~sel & en + sel & ~en");
//! # Ok(())
//! # }
//! ```
//!
//! See [`table::format`] for the full format.
//!
//! ## Generating Verilog
//!
//! ```
//! use kmap_logic::{HdlWriter, Minimizable, Testbench, TruthTable, VerilogModule};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = TruthTable::from_text(".i 2\n0 1\n3 1\n")?;
//! let result = table.minimize()?;
//! let module = VerilogModule::from_minimization(&result).to_hdl_string();
//! let bench = Testbench::from_minimization(&result).to_hdl_string();
//! assert!(module.contains("assign out = (~A & ~B) | (A & B);"));
//! assert!(bench.contains("$finish;"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade: per-round prime counts and cover sizes at
//! `debug`, individual merges and greedy picks at `trace`, and recoverable input problems
//! (coerced cells, unsupported map sizes) at `warn`. Install any logger to see them.

pub mod error;
pub mod expression;
pub mod hdl;
pub mod implicant;
pub mod kmap;
pub mod minimize;
pub mod render;
pub mod run;
pub mod table;

pub use error::KmapError;
pub use expression::{BoolExpr, ExpressionParseError, ParseBoolExprError};
pub use hdl::{HdlWriter, TestStep, Testbench, VerilogModule};
pub use implicant::{Implicant, ImplicantParseError, ImplicantSet};
pub use kmap::{KmapLayout, MAX_GRAY_VARIABLES};
pub use minimize::{
    CoverChart, CoverStrategy, Minimizable, Minimization, MinimizationError, MinimizerConfig,
};
pub use render::Notation;
pub use table::{
    LabelProblem, TableError, TableReadError, TruthTable, Value, MAX_VARIABLES, OUTPUT_NAME,
};
