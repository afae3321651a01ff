//! Line-oriented text format for truth tables
//!
//! ```text
//! # majority of three
//! .i 3
//! .ilb A B C
//! 011 1
//! 5 1
//! 110 1
//! 7 x
//! .e
//! ```
//!
//! - `.i N` declares the variable count and must precede any data line.
//! - `.ilb` optionally names the variables (most significant first).
//! - A data line is `<key> <value>`. The key is read as a bit pattern when it is exactly `N`
//!   characters of `0`/`1`, otherwise as a decimal term index.
//! - Values are coerced like editor cells, so an unknown symbol becomes `0`.
//! - Rows that are never mentioned are `0`. Blank lines and `#` comments are ignored, and
//!   `.e`/`.end` stops reading.
//!
//! The writer emits every row as `<bit pattern> <value>`, which the reader accepts back.

use super::{TableError, TableReadError, TruthTable, Value};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

impl TruthTable {
    /// Read a table from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TableReadError> {
        let mut table: Option<TruthTable> = None;
        let mut labels: Option<Vec<String>> = None;

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = line_index + 1;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(directive) = line.strip_prefix('.') {
                let mut parts = directive.split_whitespace();
                match parts.next() {
                    Some("i") => {
                        let value = parts.next().unwrap_or("");
                        let count: usize = value.parse().map_err(|_| {
                            TableError::InvalidVariableDirective {
                                value: Arc::from(value),
                            }
                        })?;
                        table = Some(TruthTable::new(count)?);
                    }
                    Some("ilb") => labels = Some(parts.map(str::to_string).collect()),
                    Some("e") | Some("end") => break,
                    _ => log::debug!("line {}: ignoring unknown directive {:?}", line_no, line),
                }
                continue;
            }

            let current = table
                .as_mut()
                .ok_or(TableError::MissingVariableDirective)?;
            let mut fields = line.split_whitespace();
            let key = fields.next().unwrap_or("");
            let value = fields.next().ok_or(TableError::MissingValue { line: line_no })?;
            let index = parse_key(key, current.num_vars(), line_no)?;
            current.set(index, Value::coerce(value))?;
        }

        let table = table.ok_or(TableError::MissingVariableDirective)?;
        match labels {
            Some(labels) => Ok(table.with_labels(labels.as_slice())?),
            None => Ok(table),
        }
    }

    /// Parse a table from a string
    pub fn from_text(text: &str) -> Result<Self, TableReadError> {
        Self::from_reader(text.as_bytes())
    }

    /// Read a table from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableReadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Write every row of this table in the text format
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, ".i {}", self.num_vars())?;
        write!(writer, ".ilb")?;
        for label in self.labels() {
            write!(writer, " {}", label)?;
        }
        writeln!(writer)?;
        for (index, value) in self.iter() {
            writeln!(writer, "{} {}", self.bit_pattern(index), value)?;
        }
        writeln!(writer, ".e")?;
        Ok(())
    }

    /// Render the table in the text format
    pub fn to_text(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Write the table to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}

fn parse_key(key: &str, num_vars: usize, line: usize) -> Result<usize, TableError> {
    let invalid = || TableError::InvalidIndex {
        line,
        value: Arc::from(key),
    };
    if key.len() == num_vars && key.chars().all(|c| c == '0' || c == '1') {
        usize::from_str_radix(key, 2).map_err(|_| invalid())
    } else {
        key.parse().map_err(|_| invalid())
    }
}
