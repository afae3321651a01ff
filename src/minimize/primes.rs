//! Prime implicant generation by iterative adjacency merging

use crate::implicant::{Implicant, ImplicantSet};
use log::{debug, trace};
use std::collections::{BTreeMap, HashSet};

/// Compute the prime implicants of a set of present terms
///
/// `terms` is the union of minterms and don't-cares; duplicates and ordering do not matter.
/// The returned set is in generation order: primes promoted in earlier rounds come first, and
/// within a round they keep the order of that round's candidate set.
///
/// An empty input yields an empty set.
///
/// # Examples
///
/// ```
/// use kmap_logic::minimize::prime_implicants;
///
/// let primes = prime_implicants(&[1, 3], 2);
/// let text: Vec<String> = primes.iter().map(|p| p.to_string()).collect();
/// assert_eq!(text, vec!["-1"]);
/// ```
pub fn prime_implicants(terms: &[u32], num_vars: usize) -> ImplicantSet {
    let mut sorted = terms.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut current: ImplicantSet = sorted
        .iter()
        .map(|&t| Implicant::from_index(t, num_vars))
        .collect();
    let mut primes = ImplicantSet::new();
    let mut round = 0;

    while !current.is_empty() {
        let (next, promoted) = merge_round(&current);
        debug!(
            "round {}: {} implicants, {} merged, {} promoted to prime",
            round,
            current.len(),
            next.len(),
            promoted.len()
        );
        primes.extend(promoted);

        if next.is_empty() {
            break;
        }
        current = next;
        round += 1;
    }

    primes
}

/// One merging round: returns the next generation and the implicants that merged with nothing
fn merge_round(current: &ImplicantSet) -> (ImplicantSet, Vec<Implicant>) {
    // Group by the number of 1 symbols; only neighbouring groups can combine
    let mut groups: BTreeMap<usize, Vec<&Implicant>> = BTreeMap::new();
    for imp in current {
        groups.entry(imp.ones()).or_default().push(imp);
    }

    let mut next = ImplicantSet::new();
    let mut consumed: HashSet<&Implicant> = HashSet::new();
    for (&ones, lower) in &groups {
        let Some(upper) = groups.get(&(ones + 1)) else {
            continue;
        };
        for &a in lower {
            for &b in upper {
                if let Some(merged) = a.combine(b) {
                    trace!("{} + {} -> {}", a, b, merged);
                    next.insert(merged);
                    consumed.insert(a);
                    consumed.insert(b);
                }
            }
        }
    }

    let promoted = current
        .iter()
        .filter(|imp| !consumed.contains(imp))
        .cloned()
        .collect();
    (next, promoted)
}
