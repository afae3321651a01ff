//! Building expressions from implicant covers

use super::BoolExpr;
use crate::implicant::Implicant;

fn literal(name: &str, positive: bool) -> BoolExpr {
    let var = BoolExpr::variable(name);
    if positive {
        var
    } else {
        var.not()
    }
}

fn label<S: AsRef<str>>(labels: &[S], pos: usize) -> &str {
    labels.get(pos).map(|s| s.as_ref()).unwrap_or("?")
}

impl BoolExpr {
    /// Conjunction of an implicant's literals; the universe is `1`
    pub fn from_product<S: AsRef<str>>(implicant: &Implicant, labels: &[S]) -> Self {
        implicant
            .literals()
            .map(|(pos, positive)| literal(label(labels, pos), positive))
            .reduce(|acc, lit| acc.and(&lit))
            .unwrap_or_else(|| BoolExpr::constant(true))
    }

    /// Sum of products over a cover; the empty cover is `0`
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::{BoolExpr, Implicant};
    ///
    /// let cover: Vec<Implicant> = vec!["1-".parse().unwrap(), "01".parse().unwrap()];
    /// let expr = BoolExpr::from_sop(&cover, &["A", "B"]);
    /// assert_eq!(expr.to_string(), "A + ~A * B");
    /// ```
    pub fn from_sop<S: AsRef<str>>(cover: &[Implicant], labels: &[S]) -> Self {
        cover
            .iter()
            .map(|imp| Self::from_product(imp, labels))
            .reduce(|acc, term| acc.or(&term))
            .unwrap_or_else(|| BoolExpr::constant(false))
    }

    /// Product of sums from a cover of the zero-set; the empty cover is `1`
    ///
    /// Each implicant becomes a clause with its literals inverted, so the result is true
    /// exactly where no implicant of `zero_cover` applies.
    pub fn from_pos<S: AsRef<str>>(zero_cover: &[Implicant], labels: &[S]) -> Self {
        zero_cover
            .iter()
            .map(|imp| {
                imp.literals()
                    .map(|(pos, positive)| literal(label(labels, pos), !positive))
                    .reduce(|acc, lit| acc.or(&lit))
                    .unwrap_or_else(|| BoolExpr::constant(false))
            })
            .reduce(|acc, clause| acc.and(&clause))
            .unwrap_or_else(|| BoolExpr::constant(true))
    }
}
