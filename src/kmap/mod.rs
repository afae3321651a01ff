//! Karnaugh map layout
//!
//! Places every term index on a two-dimensional grid. The high-order variables select the row
//! and the low-order variables the column, each through a reflected Gray code, so up to four
//! variables any two indices differing in exactly one bit are neighbours, with wraparound at
//! the edges.
//!
//! The five-variable 4x8 map keeps that guarantee for the row bits and the lowest column bit
//! only. Flipping either of the two high column bits moves an index to the mirrored column
//! (for example `001` and `101`), which is not an edge neighbour.
//!
//! | vars | grid | row bits | column bits |
//! |------|------|----------|-------------|
//! | 1    | 1x2  | 0        | 1           |
//! | 2    | 2x2  | 1        | 1           |
//! | 3    | 2x4  | 1        | 2           |
//! | 4    | 4x4  | 2        | 2           |
//! | 5    | 4x8  | 2        | 3           |
//!
//! Beyond five variables the grid falls back to a single row in index order. That row is never
//! wider than a table can be ([`MAX_VARIABLES`] bits).

use crate::table::{TruthTable, MAX_VARIABLES};
use log::warn;
use std::fmt::Write;

/// Largest variable count with a Gray-code layout
pub const MAX_GRAY_VARIABLES: usize = 5;

const GRAY1: [u32; 2] = [0, 1];
const GRAY2: [u32; 4] = [0, 1, 3, 2];
const GRAY3: [u32; 8] = [0, 1, 3, 2, 6, 7, 5, 4];

/// Grid shape and coordinate mapping for a fixed variable count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmapLayout {
    num_vars: usize,
    row_bits: usize,
    col_bits: usize,
}

impl KmapLayout {
    /// Layout for `num_vars` variables
    ///
    /// Counts above [`MAX_GRAY_VARIABLES`] produce the linear fallback layout, whose width is
    /// capped at `2^MAX_VARIABLES` columns.
    pub fn new(num_vars: usize) -> Self {
        let (row_bits, col_bits) = match num_vars {
            0 => (0, 0),
            1 => (0, 1),
            2 => (1, 1),
            3 => (1, 2),
            4 => (2, 2),
            5 => (2, 3),
            n => {
                warn!("no Karnaugh layout for {} variables, using a single row", n);
                (0, n.min(MAX_VARIABLES))
            }
        };
        KmapLayout {
            num_vars,
            row_bits,
            col_bits,
        }
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Whether this is the degraded single-row layout without the adjacency guarantee
    pub fn is_linear(&self) -> bool {
        self.num_vars > MAX_GRAY_VARIABLES
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        1 << self.row_bits
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        1 << self.col_bits
    }

    /// Variables (by position, most significant first) that select the row
    pub fn row_vars(&self) -> std::ops::Range<usize> {
        0..self.row_bits
    }

    /// Variables (by position, most significant first) that select the column
    pub fn col_vars(&self) -> std::ops::Range<usize> {
        self.row_bits..self.num_vars
    }

    /// Grid position `(row, col)` of a term index
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::KmapLayout;
    ///
    /// let layout = KmapLayout::new(4);
    /// // ABCD = 0110: row AB = 01 -> 1, column CD = 10 -> 3
    /// assert_eq!(layout.coords(0b0110), (1, 3));
    /// ```
    pub fn coords(&self, index: u32) -> (usize, usize) {
        if self.is_linear() {
            return (0, index as usize);
        }
        let col_mask = (1u32 << self.col_bits) - 1;
        let row = position_of(index >> self.col_bits, self.row_bits);
        let col = position_of(index & col_mask, self.col_bits);
        (row as usize, col as usize)
    }

    /// Term index at a grid position, if the position is on the grid
    pub fn index_at(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        if self.is_linear() {
            return Some(col as u32);
        }
        let r = value_at(row as u32, self.row_bits);
        let c = value_at(col as u32, self.col_bits);
        Some((r << self.col_bits) | c)
    }

    /// Term indices arranged row by row
    pub fn grid(&self) -> Vec<Vec<u32>> {
        (0..self.rows())
            .map(|r| {
                (0..self.cols())
                    .filter_map(|c| self.index_at(r, c))
                    .collect()
            })
            .collect()
    }

    /// Gray-coded header labels for the rows, e.g. `["00", "01", "11", "10"]`
    pub fn row_headers(&self) -> Vec<String> {
        headers(self.rows(), self.row_bits, self.is_linear())
    }

    /// Gray-coded header labels for the columns
    pub fn col_headers(&self) -> Vec<String> {
        headers(self.cols(), self.col_bits, self.is_linear())
    }

    /// Text rendering of a table's values on this grid
    ///
    /// The corner cell names the row and column variables, e.g. `AB\CD`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::{KmapLayout, TruthTable, Value};
    ///
    /// let mut table = TruthTable::new(2).unwrap();
    /// table.set(3, Value::True).unwrap();
    /// let text = KmapLayout::new(2).render(&table);
    /// assert_eq!(text, "A\\B | 0 1\n0   | 0 0\n1   | 0 1\n");
    /// ```
    pub fn render(&self, table: &TruthTable) -> String {
        let labels = table.labels();
        let names = |range: std::ops::Range<usize>| -> String {
            labels
                .get(range)
                .map(|ls| ls.iter().map(|l| l.as_ref()).collect::<Vec<_>>().join(""))
                .unwrap_or_default()
        };
        let corner = format!("{}\\{}", names(self.row_vars()), names(self.col_vars()));

        let row_headers = self.row_headers();
        let col_headers = self.col_headers();
        let row_width = row_headers
            .iter()
            .map(String::len)
            .chain(std::iter::once(corner.len()))
            .max()
            .unwrap_or(0);
        let col_width = col_headers.iter().map(String::len).max().unwrap_or(1).max(1);

        let mut out = String::new();
        let _ = write!(out, "{:<row_width$} |", corner);
        for header in &col_headers {
            let _ = write!(out, " {:>col_width$}", header);
        }
        out.push('\n');

        for (r, header) in row_headers.iter().enumerate() {
            let _ = write!(out, "{:<row_width$} |", header);
            for c in 0..self.cols() {
                let value = self
                    .index_at(r, c)
                    .map(|index| table.get(index as usize))
                    .unwrap_or_default();
                let _ = write!(out, " {:>col_width$}", value.to_string());
            }
            out.push('\n');
        }
        out
    }
}

/// Values of a `bits`-wide field in grid order
fn gray_sequence(bits: usize) -> &'static [u32] {
    match bits {
        1 => &GRAY1,
        2 => &GRAY2,
        3 => &GRAY3,
        _ => &[0],
    }
}

/// Grid position of a field value
fn position_of(value: u32, bits: usize) -> u32 {
    gray_sequence(bits)
        .iter()
        .position(|&g| g == value)
        .unwrap_or(0) as u32
}

/// Field value at a grid position
fn value_at(position: u32, bits: usize) -> u32 {
    gray_sequence(bits)
        .get(position as usize)
        .copied()
        .unwrap_or(0)
}

fn headers(count: usize, bits: usize, linear: bool) -> Vec<String> {
    (0..count as u32)
        .map(|pos| {
            let value = if linear { pos } else { value_at(pos, bits) };
            if bits == 0 {
                String::new()
            } else {
                format!("{:0width$b}", value, width = bits)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn adjacent(layout: &KmapLayout, a: (usize, usize), b: (usize, usize)) -> bool {
        let dr = (a.0 as isize - b.0 as isize).rem_euclid(layout.rows() as isize);
        let dc = (a.1 as isize - b.1 as isize).rem_euclid(layout.cols() as isize);
        let near = |d: isize, size: usize| d == 1 || d == size as isize - 1;
        (dr == 0 && near(dc, layout.cols())) || (dc == 0 && near(dr, layout.rows()))
    }

    #[test]
    fn test_shapes() {
        let shapes: Vec<(usize, usize)> = (1..=5)
            .map(|n| {
                let l = KmapLayout::new(n);
                (l.rows(), l.cols())
            })
            .collect();
        assert_eq!(shapes, vec![(1, 2), (2, 2), (2, 4), (4, 4), (4, 8)]);
    }

    #[test]
    fn test_known_coordinates() {
        assert_eq!(KmapLayout::new(1).coords(1), (0, 1));
        assert_eq!(KmapLayout::new(2).coords(2), (1, 0));
        assert_eq!(KmapLayout::new(3).coords(0b011), (0, 2));
        assert_eq!(KmapLayout::new(3).coords(0b110), (1, 3));
        assert_eq!(KmapLayout::new(5).coords(0b10100), (3, 7));
    }

    #[test]
    fn test_layout_is_a_bijection() {
        for n in 1..=5 {
            let layout = KmapLayout::new(n);
            let mut seen = vec![false; 1 << n];
            for index in 0..(1u32 << n) {
                let (r, c) = layout.coords(index);
                assert!(r < layout.rows() && c < layout.cols());
                assert_eq!(layout.index_at(r, c), Some(index));
                assert!(!seen[r * layout.cols() + c]);
                seen[r * layout.cols() + c] = true;
            }
        }
    }

    #[test]
    fn test_one_bit_neighbours_are_adjacent() {
        for n in 1..=4 {
            let layout = KmapLayout::new(n);
            for index in 0..(1u32 << n) {
                for bit in 0..n {
                    let other = index ^ (1 << bit);
                    assert!(
                        adjacent(&layout, layout.coords(index), layout.coords(other)),
                        "n={} {} and {} not adjacent",
                        n,
                        index,
                        other
                    );
                }
            }
        }
    }

    #[test]
    fn test_five_variable_rows_and_near_columns() {
        // In a 4x8 map only the row bits and the lowest column bit flip between neighbours
        let layout = KmapLayout::new(5);
        for index in 0..32u32 {
            for bit in [0, 3, 4] {
                let other = index ^ (1 << bit);
                assert!(adjacent(&layout, layout.coords(index), layout.coords(other)));
            }
        }
        // The high column bits land on mirrored columns
        assert!(!adjacent(&layout, layout.coords(0b00001), layout.coords(0b00101)));
        assert!(!adjacent(&layout, layout.coords(0b00000), layout.coords(0b00010)));
    }

    #[test]
    fn test_grid_matches_coords() {
        let layout = KmapLayout::new(4);
        let grid = layout.grid();
        assert_eq!(grid[0], vec![0, 1, 3, 2]);
        assert_eq!(grid[2], vec![12, 13, 15, 14]);
        assert_eq!(layout.row_headers(), vec!["00", "01", "11", "10"]);
        assert_eq!(layout.col_headers(), vec!["00", "01", "11", "10"]);
    }

    #[test]
    fn test_render_three_variables() {
        let table = TruthTable::from_values(
            3,
            &[
                Value::False,
                Value::True,
                Value::False,
                Value::DontCare,
                Value::True,
                Value::False,
                Value::False,
                Value::True,
            ],
        )
        .unwrap();
        let text = KmapLayout::new(3).render(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "A\\BC | 00 01 11 10");
        assert_eq!(lines[1], "0    |  0  1  x  0");
        assert_eq!(lines[2], "1    |  1  0  1  0");
    }

    #[test]
    fn test_linear_fallback() {
        let layout = KmapLayout::new(6);
        assert!(layout.is_linear());
        assert_eq!((layout.rows(), layout.cols()), (1, 64));
        assert_eq!(layout.coords(37), (0, 37));
        assert_eq!(layout.index_at(0, 37), Some(37));
        assert_eq!(layout.index_at(1, 0), None);
    }

    #[test]
    fn test_linear_width_is_capped() {
        let layout = KmapLayout::new(64);
        assert!(layout.is_linear());
        assert_eq!(layout.num_vars(), 64);
        assert_eq!((layout.rows(), layout.cols()), (1, 1 << MAX_VARIABLES));
        assert_eq!(layout.col_headers().len(), 1 << MAX_VARIABLES);
        assert_eq!(layout.index_at(0, 1 << MAX_VARIABLES), None);
        assert_eq!(layout.coords(5), (0, 5));
    }
}
