//! Ternary implicant algebra
//!
//! An [`Implicant`] is a fixed-width sequence of `0`, `1` and `-` symbols. Position 0 is the
//! most significant variable, so the implicant `01-` over variables `A B C` stands for `~A & B`
//! and covers term indices 2 and 3.
//!
//! The primitives here (combine, cover test, expansion, literal rendering) are everything the
//! Quine-McCluskey generator and the covering solver need.

mod error;
mod set;

pub use error::ImplicantParseError;
pub use set::ImplicantSet;

use crate::render::Notation;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A partially specified product term
///
/// Each position holds:
/// - `Some(false)` - variable must be 0
/// - `Some(true)` - variable must be 1
/// - `None` - don't care (`-`)
///
/// Uses `Arc` internally so implicants can be shared between the generator's sets, the
/// covering chart and the final result without copying.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Implicant {
    bits: Arc<[Option<bool>]>,
}

impl Implicant {
    /// Create an implicant from explicit symbols
    pub fn new(bits: &[Option<bool>]) -> Self {
        Implicant { bits: bits.into() }
    }

    /// The fully specified implicant for a single term index
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::Implicant;
    ///
    /// let imp = Implicant::from_index(5, 4);
    /// assert_eq!(imp.to_string(), "0101");
    /// ```
    pub fn from_index(index: u32, width: usize) -> Self {
        let bits: Vec<Option<bool>> = (0..width)
            .map(|pos| Some(bit_of(index, width, pos)))
            .collect();
        Implicant { bits: bits.into() }
    }

    /// The implicant of all don't-cares (constant true over `width` variables)
    pub fn universe(width: usize) -> Self {
        Implicant {
            bits: vec![None; width].into(),
        }
    }

    /// Number of symbols (the variable count)
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// The symbols of this implicant
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Number of `1` symbols; don't-care positions are not counted
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|b| **b == Some(true)).count()
    }

    /// Number of `-` symbols
    pub fn dont_cares(&self) -> usize {
        self.bits.iter().filter(|b| b.is_none()).count()
    }

    /// Number of literals this implicant contributes to an expression
    pub fn literal_count(&self) -> usize {
        self.width() - self.dont_cares()
    }

    /// Iterate over the specified positions as `(position, polarity)`
    pub fn literals(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(pos, bit)| bit.map(|value| (pos, value)))
    }

    /// Merge two implicants that differ in exactly one position
    ///
    /// A `-` facing a `0` or `1` counts as a difference, so two partially specified implicants
    /// only combine when their don't-care positions already line up.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::Implicant;
    ///
    /// let a: Implicant = "0-1".parse().unwrap();
    /// let b: Implicant = "1-1".parse().unwrap();
    /// assert_eq!(a.combine(&b).unwrap().to_string(), "--1");
    ///
    /// let c: Implicant = "11-".parse().unwrap();
    /// assert!(a.combine(&c).is_none());
    /// ```
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.width() != other.width() {
            return None;
        }

        let mut differing = None;
        for (pos, (a, b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            if a != b {
                if differing.is_some() {
                    return None;
                }
                differing = Some(pos);
            }
        }

        let pos = differing?;
        let mut bits = self.bits.to_vec();
        bits[pos] = None;
        Some(Implicant { bits: bits.into() })
    }

    /// Check whether `index` agrees with every specified position
    pub fn covers(&self, index: u32) -> bool {
        let width = self.width();
        self.literals()
            .all(|(pos, value)| bit_of(index, width, pos) == value)
    }

    /// Enumerate every term index consistent with this implicant, in ascending order
    ///
    /// The result has `2^k` entries where `k` is the number of don't-care positions.
    pub fn expand(&self) -> Vec<u32> {
        let width = self.width();
        let mut base = 0u32;
        let mut free = Vec::new();
        for (pos, bit) in self.bits.iter().enumerate() {
            let shift = (width - 1 - pos) as u32;
            match bit {
                Some(true) => base |= 1 << shift,
                Some(false) => {}
                None => free.push(shift),
            }
        }

        // The last free position is the least significant, so counting up keeps the
        // output sorted.
        (0..1u32 << free.len())
            .map(|mask| {
                free.iter()
                    .rev()
                    .enumerate()
                    .filter(|(i, _)| (mask >> *i) & 1 == 1)
                    .fold(base, |acc, (_, shift)| acc | (1u32 << *shift))
            })
            .collect()
    }

    /// Render as a product term: `1` gives the bare variable, `0` the negated one
    pub fn to_product<S: AsRef<str>>(&self, labels: &[S], notation: &Notation) -> String {
        let lits: Vec<String> = self
            .literals()
            .map(|(pos, value)| notation.literal(label(labels, pos), value))
            .collect();
        if lits.is_empty() {
            notation.one.to_string()
        } else {
            lits.join(notation.and)
        }
    }

    /// Render as a sum clause of the complement
    ///
    /// Used for implicants derived from the zero-set: polarity is inverted (`0` gives the bare
    /// variable, `1` the negated one) and literals are joined by OR, per De Morgan.
    pub fn to_sum_clause<S: AsRef<str>>(&self, labels: &[S], notation: &Notation) -> String {
        let lits: Vec<String> = self
            .literals()
            .map(|(pos, value)| notation.literal(label(labels, pos), !value))
            .collect();
        match lits.len() {
            0 => notation.zero.to_string(),
            _ => format!("({})", lits.join(notation.or)),
        }
    }

    /// Human-readable product term, e.g. `~A & B`; an empty product is `1`
    pub fn render_sop<S: AsRef<str>>(&self, labels: &[S]) -> String {
        self.to_product(labels, &Notation::HUMAN)
    }

    /// Human-readable sum clause, e.g. `(A + ~B)`; an empty clause is `0`
    pub fn render_pos_clause<S: AsRef<str>>(&self, labels: &[S]) -> String {
        self.to_sum_clause(labels, &Notation::HUMAN)
    }
}

/// Bit of `index` at `pos`, where position 0 is the most significant of `width` bits
pub(crate) fn bit_of(index: u32, width: usize, pos: usize) -> bool {
    (index >> (width - 1 - pos)) & 1 == 1
}

fn label<S: AsRef<str>>(labels: &[S], pos: usize) -> &str {
    labels.get(pos).map(|s| s.as_ref()).unwrap_or("?")
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            let symbol = match bit {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Implicant({})", self)
    }
}

impl FromStr for Implicant {
    type Err = ImplicantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ImplicantParseError::Empty);
        }
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' => Ok(None),
                _ => Err(ImplicantParseError::InvalidCharacter {
                    character,
                    position,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Implicant { bits: bits.into() })
    }
}
