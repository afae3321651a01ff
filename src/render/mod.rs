//! Expression rendering for minimized covers
//!
//! Turns a cover (a list of implicants) into text. The literal structure is fixed by the
//! implicants; a [`Notation`] only decides how operators and constants are spelled, so the
//! human form, the code form and the Verilog form always encode the same function.

use crate::implicant::Implicant;

/// Operator and constant spelling for a target syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notation {
    /// Prefix for a negated variable
    pub not: &'static str,
    /// Separator between literals of a product
    pub and: &'static str,
    /// Separator between terms of a sum
    pub or: &'static str,
    /// Constant false
    pub zero: &'static str,
    /// Constant true
    pub one: &'static str,
    /// Wrap multi-literal products in parentheses when they appear in a sum
    pub group_products: bool,
}

impl Notation {
    /// Textbook notation: `~A & B + C`, clauses `(A + ~B)`
    pub const HUMAN: Notation = Notation {
        not: "~",
        and: " & ",
        or: " + ",
        zero: "0",
        one: "1",
        group_products: false,
    };

    /// C-like expression syntax: `(!A && B) || C`
    pub const CODE: Notation = Notation {
        not: "!",
        and: " && ",
        or: " || ",
        zero: "0",
        one: "1",
        group_products: true,
    };

    /// Verilog continuous-assignment syntax: `(~A & B) | C`
    pub const VERILOG: Notation = Notation {
        not: "~",
        and: " & ",
        or: " | ",
        zero: "0",
        one: "1",
        group_products: true,
    };

    /// Spell a single literal
    pub fn literal(&self, name: &str, positive: bool) -> String {
        if positive {
            name.to_string()
        } else {
            format!("{}{}", self.not, name)
        }
    }
}

impl Default for Notation {
    fn default() -> Self {
        Notation::HUMAN
    }
}

/// Render a cover as a sum of products
///
/// An empty cover is the constant `0`.
///
/// # Examples
///
/// ```
/// use kmap_logic::{render, Implicant, Notation};
///
/// let cover: Vec<Implicant> = vec!["00".parse().unwrap(), "11".parse().unwrap()];
/// assert_eq!(render::sop(&cover, &["A", "B"], &Notation::HUMAN), "~A & ~B + A & B");
/// assert_eq!(render::sop(&cover, &["A", "B"], &Notation::CODE), "(!A && !B) || (A && B)");
/// ```
pub fn sop<S: AsRef<str>>(cover: &[Implicant], labels: &[S], notation: &Notation) -> String {
    if cover.is_empty() {
        return notation.zero.to_string();
    }
    let grouped = notation.group_products && cover.len() > 1;
    cover
        .iter()
        .map(|imp| {
            let product = imp.to_product(labels, notation);
            if grouped && imp.literal_count() > 1 {
                format!("({})", product)
            } else {
                product
            }
        })
        .collect::<Vec<_>>()
        .join(notation.or)
}

/// Render a cover of the zero-set as a product of sums
///
/// Each implicant becomes one clause with inverted polarity. An empty cover means the
/// function has no zeros, so the result is the constant `1`.
pub fn pos<S: AsRef<str>>(cover: &[Implicant], labels: &[S], notation: &Notation) -> String {
    if cover.is_empty() {
        return notation.one.to_string();
    }
    let joiner = notation.and;
    cover
        .iter()
        .map(|imp| imp.to_sum_clause(labels, notation))
        .collect::<Vec<_>>()
        .join(joiner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover(terms: &[&str]) -> Vec<Implicant> {
        terms.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_empty_covers_render_constants() {
        let labels = ["A", "B"];
        assert_eq!(sop(&[], &labels, &Notation::HUMAN), "0");
        assert_eq!(pos(&[], &labels, &Notation::HUMAN), "1");
    }

    #[test]
    fn test_universe_renders_constants() {
        let labels = ["A", "B"];
        let all = cover(&["--"]);
        assert_eq!(sop(&all, &labels, &Notation::HUMAN), "1");
        assert_eq!(pos(&all, &labels, &Notation::HUMAN), "0");
    }

    #[test]
    fn test_single_product_is_not_grouped() {
        let labels = ["A", "B"];
        assert_eq!(sop(&cover(&["11"]), &labels, &Notation::CODE), "A && B");
        assert_eq!(sop(&cover(&["11"]), &labels, &Notation::HUMAN), "A & B");
    }

    #[test]
    fn test_single_literals_are_not_grouped() {
        let labels = ["A", "B", "C"];
        let c = cover(&["1--", "-0-"]);
        assert_eq!(sop(&c, &labels, &Notation::VERILOG), "A | ~B");
    }

    #[test]
    fn test_pos_clauses_invert_polarity() {
        let labels = ["A", "B", "C"];
        // zero-set implicant 01- means the function is 0 whenever ~A & B
        let c = cover(&["01-", "--0"]);
        assert_eq!(pos(&c, &labels, &Notation::HUMAN), "(A + ~B) & (C)");
    }

    #[test]
    fn test_code_and_human_share_literal_structure() {
        let labels = ["A", "B", "C"];
        let c = cover(&["0-1", "11-"]);
        let human = sop(&c, &labels, &Notation::HUMAN);
        let code = sop(&c, &labels, &Notation::CODE);
        assert_eq!(human, "~A & C + A & B");
        assert_eq!(code, "(!A && C) || (A && B)");
    }
}
