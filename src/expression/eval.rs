//! Evaluation and truth-table checking for boolean expressions

use super::{BoolExpr, BoolExprInner};
use crate::implicant::bit_of;
use crate::table::TruthTable;
use std::collections::HashMap;
use std::sync::Arc;

impl BoolExpr {
    fn eval_with<F: Fn(&str) -> bool>(&self, lookup: &F) -> bool {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => lookup(name),
            BoolExprInner::And(l, r) => l.eval_with(lookup) && r.eval_with(lookup),
            BoolExprInner::Or(l, r) => l.eval_with(lookup) || r.eval_with(lookup),
            BoolExprInner::Not(e) => !e.eval_with(lookup),
            BoolExprInner::Constant(value) => *value,
        }
    }

    /// Evaluate under a variable assignment; unassigned variables are false
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = BoolExpr::parse("A & ~B").unwrap();
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("A"), true);
    /// assert!(expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        self.eval_with(&|name| assignment.get(name).copied().unwrap_or(false))
    }

    /// Evaluate on the bit pattern of a term index
    ///
    /// `labels[0]` is bound to the most significant bit of `index`. Variables that are not
    /// among the labels are false.
    pub fn evaluate_index<S: AsRef<str>>(&self, labels: &[S], index: u32) -> bool {
        let width = labels.len();
        self.eval_with(&|name| {
            labels
                .iter()
                .position(|l| l.as_ref() == name)
                .map(|pos| bit_of(index, width, pos))
                .unwrap_or(false)
        })
    }

    /// Value at every term index over `labels`, in index order
    pub fn truth_vector<S: AsRef<str>>(&self, labels: &[S]) -> Vec<bool> {
        (0..1u32 << labels.len())
            .map(|index| self.evaluate_index(labels, index))
            .collect()
    }

    /// Whether two expressions agree on every assignment of their combined variables
    pub fn equivalent_to(&self, other: &BoolExpr) -> bool {
        let mut vars = self.collect_variables();
        vars.extend(other.collect_variables());
        let labels: Vec<Arc<str>> = vars.into_iter().collect();
        self.truth_vector(&labels) == other.truth_vector(&labels)
    }

    /// Specified rows of `table` where this expression disagrees, ascending
    ///
    /// Don't-care rows never count as disagreements.
    pub fn mismatches(&self, table: &TruthTable) -> Vec<u32> {
        table
            .iter()
            .filter_map(|(index, value)| match value.as_bool() {
                Some(bit) if bit != self.evaluate_index(table.labels(), index) => Some(index),
                _ => None,
            })
            .collect()
    }
}
