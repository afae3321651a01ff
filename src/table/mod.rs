//! Truth tables with don't-care entries
//!
//! A [`TruthTable`] assigns every term index in `[0, 2^n)` one of three [`Value`]s. It is the
//! only input the minimizer consumes. Construction is forgiving about cells (anything that is
//! not recognisably `1` or a don't-care becomes `0`) and strict about shape.
//!
//! The [`format`] submodule reads and writes a small line-oriented text format.

mod error;
pub mod format;

pub use error::{LabelProblem, TableError, TableReadError};

use log::warn;
use std::fmt;
use std::sync::Arc;

/// Largest supported variable count
///
/// Karnaugh layouts only exist up to 5 variables. Beyond that minimization still works, but
/// pairwise prime generation grows as `3^n` on dense tables, so the count is capped where a
/// full table still minimizes in about a second.
pub const MAX_VARIABLES: usize = 10;

/// Name of the output port in generated Verilog; variables may not use it
pub const OUTPUT_NAME: &str = "out";

/// Words the expression grammar reads as constants
const RESERVED_LABELS: [&str; 2] = ["true", "false"];

/// Output value of a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Value {
    /// The function is 0
    #[default]
    False,
    /// The function is 1 (a minterm)
    True,
    /// The output is unconstrained
    DontCare,
}

impl Value {
    /// Parse a cell symbol: `0`, `1`, or one of `x`, `X`, `-`, `2` for don't-care
    pub fn from_symbol(symbol: &str) -> Option<Value> {
        match symbol.trim() {
            "0" => Some(Value::False),
            "1" => Some(Value::True),
            "x" | "X" | "-" | "2" => Some(Value::DontCare),
            _ => None,
        }
    }

    /// Parse a cell symbol, falling back to [`Value::False`] for anything unrecognised
    pub fn coerce(symbol: &str) -> Value {
        Value::from_symbol(symbol).unwrap_or_else(|| {
            warn!("malformed cell value {:?}, treating as 0", symbol);
            Value::False
        })
    }

    /// The output bit, or `None` for a don't-care
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::False => Some(false),
            Value::True => Some(true),
            Value::DontCare => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Value::False => "0",
            Value::True => "1",
            Value::DontCare => "x",
        };
        write!(f, "{}", symbol)
    }
}

/// A single-output truth table over `n` variables
///
/// # Examples
///
/// ```
/// use kmap_logic::{TruthTable, Value};
///
/// # fn main() -> Result<(), kmap_logic::TableError> {
/// let mut table = TruthTable::new(2)?;
/// table.set(3, Value::True)?;
/// table.set(1, Value::DontCare)?;
///
/// assert_eq!(table.minterms(), vec![3]);
/// assert_eq!(table.dont_cares(), vec![1]);
/// assert_eq!(table.zeros(), vec![0, 2]);
/// assert_eq!(table.labels()[0].as_ref(), "A");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    num_vars: usize,
    labels: Vec<Arc<str>>,
    values: Vec<Value>,
}

impl TruthTable {
    /// Create an all-zero table over `num_vars` variables labelled `A`, `B`, ...
    pub fn new(num_vars: usize) -> Result<Self, TableError> {
        if num_vars == 0 || num_vars > MAX_VARIABLES {
            return Err(TableError::InvalidVariableCount { count: num_vars });
        }
        Ok(TruthTable {
            num_vars,
            labels: default_labels(num_vars),
            values: vec![Value::False; 1 << num_vars],
        })
    }

    /// Create a table from a row-ordered value list
    ///
    /// A short list is padded with `0` and a long one truncated; both are logged.
    pub fn from_values(num_vars: usize, values: &[Value]) -> Result<Self, TableError> {
        let mut table = TruthTable::new(num_vars)?;
        let size = table.len();
        if values.len() != size {
            warn!(
                "expected {} table rows, got {}; missing rows default to 0",
                size,
                values.len()
            );
        }
        for (slot, value) in table.values.iter_mut().zip(values.iter()) {
            *slot = *value;
        }
        Ok(table)
    }

    /// Create a table from raw `(index, cell text)` pairs as an editor would supply them
    ///
    /// Cells are coerced with [`Value::coerce`]; indices outside the table are skipped with a
    /// warning and unmentioned indices stay `0`.
    pub fn from_cells<I, S>(num_vars: usize, cells: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let mut table = TruthTable::new(num_vars)?;
        for (index, cell) in cells {
            let value = Value::coerce(cell.as_ref());
            if table.set(index, value).is_err() {
                warn!("ignoring cell for out-of-range index {}", index);
            }
        }
        Ok(table)
    }

    /// Replace the variable labels
    ///
    /// Every label must be an identifier (`[A-Za-z_][A-Za-z0-9_]*`), distinct from the others,
    /// and neither a constant keyword (`true`, `false`) nor the output port name
    /// [`OUTPUT_NAME`]. Otherwise the rendered expressions would not parse back to the table.
    pub fn with_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Result<Self, TableError> {
        if labels.len() != self.num_vars {
            return Err(TableError::LabelCountMismatch {
                expected: self.num_vars,
                actual: labels.len(),
            });
        }
        let mut checked: Vec<Arc<str>> = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.as_ref();
            let reason = if !is_identifier(label) {
                Some(LabelProblem::NotIdentifier)
            } else if RESERVED_LABELS.contains(&label) || label == OUTPUT_NAME {
                Some(LabelProblem::Reserved)
            } else if checked.iter().any(|l| l.as_ref() == label) {
                Some(LabelProblem::Duplicate)
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(TableError::InvalidLabel {
                    label: Arc::from(label),
                    reason,
                });
            }
            checked.push(Arc::from(label));
        }
        self.labels = checked;
        Ok(self)
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of rows (`2^n`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a table has at least two rows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Variable labels, most significant first
    pub fn labels(&self) -> &[Arc<str>] {
        &self.labels
    }

    /// Value at `index`; indices outside the table read as `0`
    pub fn get(&self, index: usize) -> Value {
        self.values.get(index).copied().unwrap_or_default()
    }

    /// Assign a value to one row
    pub fn set(&mut self, index: usize, value: Value) -> Result<(), TableError> {
        let size = self.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(TableError::IndexOutOfRange { index, size }),
        }
    }

    /// Reset every row to `0`
    pub fn clear(&mut self) {
        self.values.fill(Value::False);
    }

    /// Row values in index order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterate over `(index, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u32, Value)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as u32, *v))
    }

    /// Indices whose value is `1`
    pub fn minterms(&self) -> Vec<u32> {
        self.indices_of(Value::True)
    }

    /// Indices whose value is don't-care
    pub fn dont_cares(&self) -> Vec<u32> {
        self.indices_of(Value::DontCare)
    }

    /// Indices whose value is `0`
    pub fn zeros(&self) -> Vec<u32> {
        self.indices_of(Value::False)
    }

    fn indices_of(&self, wanted: Value) -> Vec<u32> {
        self.iter()
            .filter(|(_, v)| *v == wanted)
            .map(|(i, _)| i)
            .collect()
    }

    /// Bit pattern of `index`, most significant variable first
    pub fn bit_pattern(&self, index: u32) -> String {
        format!("{:0width$b}", index, width = self.num_vars)
    }
}

/// `A`, `B`, `C`, ...
fn default_labels(num_vars: usize) -> Vec<Arc<str>> {
    (0..num_vars)
        .map(|i| Arc::from(((b'A' + i as u8) as char).to_string().as_str()))
        .collect()
}

fn is_identifier(label: &str) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_counts() {
        assert_eq!(
            TruthTable::new(0),
            Err(TableError::InvalidVariableCount { count: 0 })
        );
        assert!(TruthTable::new(MAX_VARIABLES + 1).is_err());
        assert_eq!(TruthTable::new(3).unwrap().len(), 8);
    }

    #[test]
    fn test_coerce_defaults_to_zero() {
        assert_eq!(Value::coerce("1"), Value::True);
        assert_eq!(Value::coerce(" x "), Value::DontCare);
        assert_eq!(Value::coerce("-"), Value::DontCare);
        assert_eq!(Value::coerce("maybe"), Value::False);
        assert_eq!(Value::coerce(""), Value::False);
    }

    #[test]
    fn test_from_values_pads_and_truncates() {
        let short = TruthTable::from_values(2, &[Value::True]).unwrap();
        assert_eq!(short.values(), &[Value::True, Value::False, Value::False, Value::False]);

        let long = TruthTable::from_values(1, &[Value::True, Value::True, Value::True]).unwrap();
        assert_eq!(long.len(), 2);
        assert_eq!(long.minterms(), vec![0, 1]);
    }

    #[test]
    fn test_from_cells_coerces_and_skips() {
        let table =
            TruthTable::from_cells(2, vec![(0, "1"), (1, "?"), (2, "x"), (9, "1")]).unwrap();
        assert_eq!(table.minterms(), vec![0]);
        assert_eq!(table.dont_cares(), vec![2]);
        assert_eq!(table.zeros(), vec![1, 3]);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut table = TruthTable::new(2).unwrap();
        assert_eq!(
            table.set(4, Value::True),
            Err(TableError::IndexOutOfRange { index: 4, size: 4 })
        );
        assert_eq!(table.get(4), Value::False);
    }

    #[test]
    fn test_labels() {
        let table = TruthTable::new(3).unwrap();
        let names: Vec<&str> = table.labels().iter().map(|l| l.as_ref()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let renamed = table.clone().with_labels(&["x", "y", "z"]).unwrap();
        assert_eq!(renamed.labels()[2].as_ref(), "z");

        assert_eq!(
            table.with_labels(&["x"]),
            Err(TableError::LabelCountMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_labels_must_be_identifiers() {
        let table = TruthTable::new(2).unwrap();
        for bad in ["0", "1", "2x", "a b", "A+", ""] {
            assert_eq!(
                table.clone().with_labels(&[bad, "B"]),
                Err(TableError::InvalidLabel {
                    label: Arc::from(bad),
                    reason: LabelProblem::NotIdentifier
                }),
                "label {:?}",
                bad
            );
        }
        assert!(table.with_labels(&["_in0", "sel_1"]).is_ok());
    }

    #[test]
    fn test_labels_reject_reserved_words() {
        let table = TruthTable::new(2).unwrap();
        for bad in ["true", "false", OUTPUT_NAME] {
            assert_eq!(
                table.clone().with_labels(&["A", bad]),
                Err(TableError::InvalidLabel {
                    label: Arc::from(bad),
                    reason: LabelProblem::Reserved
                })
            );
        }
        // Matching is case sensitive
        assert!(table.with_labels(&["True", "OUT"]).is_ok());
    }

    #[test]
    fn test_labels_reject_duplicates() {
        let table = TruthTable::new(3).unwrap();
        assert_eq!(
            table.with_labels(&["A", "B", "A"]),
            Err(TableError::InvalidLabel {
                label: Arc::from("A"),
                reason: LabelProblem::Duplicate
            })
        );
    }

    #[test]
    fn test_variable_count_boundary() {
        let table = TruthTable::new(MAX_VARIABLES).unwrap();
        assert_eq!(table.len(), 1 << MAX_VARIABLES);
        assert_eq!(table.labels()[MAX_VARIABLES - 1].as_ref(), "J");
        assert_eq!(
            TruthTable::new(MAX_VARIABLES + 1),
            Err(TableError::InvalidVariableCount {
                count: MAX_VARIABLES + 1
            })
        );
    }

    #[test]
    fn test_bit_pattern() {
        let table = TruthTable::new(4).unwrap();
        assert_eq!(table.bit_pattern(5), "0101");
    }

    #[test]
    fn test_clear() {
        let mut table = TruthTable::from_values(1, &[Value::True, Value::DontCare]).unwrap();
        table.clear();
        assert_eq!(table.zeros(), vec![0, 1]);
    }
}
