//! Insertion-ordered implicant set with value equality

use super::Implicant;
use std::collections::HashSet;

/// A set of implicants that remembers insertion order
///
/// Every stage of the minimizer (candidate generation, prime promotion, the selected cover)
/// needs set semantics, but the covering solver also needs a stable iteration order so that
/// ties are broken the same way on every run. Iteration yields implicants in the order they
/// were first inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImplicantSet {
    items: Vec<Implicant>,
    seen: HashSet<Implicant>,
}

impl ImplicantSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an implicant; returns `false` if an equal one was already present
    pub fn insert(&mut self, implicant: Implicant) -> bool {
        if self.seen.contains(&implicant) {
            return false;
        }
        self.seen.insert(implicant.clone());
        self.items.push(implicant);
        true
    }

    /// Check membership by value
    pub fn contains(&self, implicant: &Implicant) -> bool {
        self.seen.contains(implicant)
    }

    /// Number of distinct implicants
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Implicant> {
        self.items.iter()
    }

    /// View the implicants in insertion order
    pub fn as_slice(&self) -> &[Implicant] {
        &self.items
    }

    /// Implicant at insertion position `index`
    pub fn get(&self, index: usize) -> Option<&Implicant> {
        self.items.get(index)
    }

    /// Consume the set, returning the implicants in insertion order
    pub fn into_vec(self) -> Vec<Implicant> {
        self.items
    }
}

impl FromIterator<Implicant> for ImplicantSet {
    fn from_iter<I: IntoIterator<Item = Implicant>>(iter: I) -> Self {
        let mut set = ImplicantSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Implicant> for ImplicantSet {
    fn extend<I: IntoIterator<Item = Implicant>>(&mut self, iter: I) {
        for implicant in iter {
            self.insert(implicant);
        }
    }
}

impl IntoIterator for ImplicantSet {
    type Item = Implicant;
    type IntoIter = std::vec::IntoIter<Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ImplicantSet {
    type Item = &'a Implicant;
    type IntoIter = std::slice::Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
