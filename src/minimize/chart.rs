//! Prime implicant chart and covering solver
//!
//! The chart records, for every prime, which required minterms it covers. Solving picks the
//! essential primes first and then completes the cover greedily or by an exact search.

use super::config::{CoverStrategy, MinimizerConfig};
use super::error::MinimizationError;
use crate::implicant::Implicant;
use log::{debug, trace, warn};
use std::collections::BTreeSet;

/// Covering chart over a fixed prime list and required-term list
///
/// Primes are referred to by their position in the list handed to [`CoverChart::new`], which
/// is also the order used to break ties.
#[derive(Debug, Clone)]
pub struct CoverChart<'a> {
    primes: &'a [Implicant],
    required: Vec<u32>,
    /// Per prime: positions in `required` that it covers
    rows: Vec<Vec<usize>>,
    /// Per required term: primes that cover it
    columns: Vec<Vec<usize>>,
}

impl<'a> CoverChart<'a> {
    /// Build the chart; `required` is deduplicated and sorted
    pub fn new(primes: &'a [Implicant], required: &[u32]) -> Self {
        let required: Vec<u32> = required
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut rows = vec![Vec::new(); primes.len()];
        let mut columns = vec![Vec::new(); required.len()];
        for (p, prime) in primes.iter().enumerate() {
            for (r, &term) in required.iter().enumerate() {
                if prime.covers(term) {
                    rows[p].push(r);
                    columns[r].push(p);
                }
            }
        }

        CoverChart {
            primes,
            required,
            rows,
            columns,
        }
    }

    /// The primes this chart was built over
    pub fn primes(&self) -> &'a [Implicant] {
        self.primes
    }

    /// The required minterms, ascending
    pub fn required(&self) -> &[u32] {
        &self.required
    }

    /// Required minterms covered by the prime at `prime`
    pub fn covered_by(&self, prime: usize) -> Vec<u32> {
        self.rows
            .get(prime)
            .map(|row| row.iter().map(|&r| self.required[r]).collect())
            .unwrap_or_default()
    }

    /// Number of primes covering each required minterm, in `required()` order
    pub fn cover_counts(&self) -> Vec<usize> {
        self.columns.iter().map(Vec::len).collect()
    }

    /// Primes that are the sole coverer of at least one required minterm, ascending
    pub fn essential_primes(&self) -> Vec<usize> {
        self.columns
            .iter()
            .filter(|col| col.len() == 1)
            .map(|col| col[0])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Select a cover of every required minterm
    ///
    /// Returns prime positions in ascending order. Fails with
    /// [`MinimizationError::UnsolvableCover`] if some minterm has no coverer at all.
    pub fn solve(&self, config: &MinimizerConfig) -> Result<Vec<usize>, MinimizationError> {
        let orphans: Vec<u32> = self
            .columns
            .iter()
            .zip(self.required.iter())
            .filter(|(col, _)| col.is_empty())
            .map(|(_, &term)| term)
            .collect();
        if !orphans.is_empty() {
            return Err(MinimizationError::UnsolvableCover {
                uncovered: orphans,
            });
        }

        let essentials = self.essential_primes();
        debug!(
            "{} primes, {} required terms, {} essential",
            self.primes.len(),
            self.required.len(),
            essentials.len()
        );

        let greedy = self.complete_greedy(&essentials)?;
        match config.strategy {
            CoverStrategy::Greedy => Ok(greedy),
            CoverStrategy::Exact => Ok(self.complete_exact(&essentials, greedy, config)),
        }
    }

    fn hits_for(&self, selected: &[usize]) -> Vec<usize> {
        let mut hits = vec![0; self.required.len()];
        for &p in selected {
            for &r in &self.rows[p] {
                hits[r] += 1;
            }
        }
        hits
    }

    fn cost(&self, selected: &[usize]) -> (usize, usize) {
        let literals = selected
            .iter()
            .map(|&p| self.primes[p].literal_count())
            .sum();
        (selected.len(), literals)
    }

    /// Essential primes plus, repeatedly, the first prime covering the most uncovered terms
    fn complete_greedy(&self, essentials: &[usize]) -> Result<Vec<usize>, MinimizationError> {
        let mut selected: BTreeSet<usize> = essentials.iter().copied().collect();
        let mut hits = self.hits_for(essentials);

        while hits.iter().any(|&h| h == 0) {
            let mut best: Option<(usize, usize)> = None;
            for p in (0..self.primes.len()).filter(|p| !selected.contains(p)) {
                let gain = self.rows[p].iter().filter(|&&r| hits[r] == 0).count();
                if gain > best.map_or(0, |(_, g)| g) {
                    best = Some((p, gain));
                }
            }

            let Some((pick, gain)) = best else {
                let uncovered = hits
                    .iter()
                    .zip(self.required.iter())
                    .filter(|(&h, _)| h == 0)
                    .map(|(_, &term)| term)
                    .collect();
                return Err(MinimizationError::UnsolvableCover { uncovered });
            };

            trace!("greedy pick {} covering {} new terms", self.primes[pick], gain);
            selected.insert(pick);
            for &r in &self.rows[pick] {
                hits[r] += 1;
            }
        }

        Ok(selected.into_iter().collect())
    }

    /// Branch-and-bound search seeded with the greedy cover
    fn complete_exact(
        &self,
        essentials: &[usize],
        greedy: Vec<usize>,
        config: &MinimizerConfig,
    ) -> Vec<usize> {
        let mut search = ExactSearch {
            chart: self,
            best_cost: self.cost(&greedy),
            best: greedy,
            nodes: 0,
            limit: config.exact_node_limit,
            exhausted: false,
        };
        let mut chosen = essentials.to_vec();
        let mut hits = self.hits_for(essentials);
        search.run(&mut chosen, &mut hits);

        if search.exhausted {
            warn!(
                "exact cover search stopped after {} nodes; result may not be minimum",
                search.nodes
            );
        } else {
            debug!("exact cover search finished after {} nodes", search.nodes);
        }

        let mut best = search.best;
        best.sort_unstable();
        best
    }
}

struct ExactSearch<'c, 'a> {
    chart: &'c CoverChart<'a>,
    best: Vec<usize>,
    best_cost: (usize, usize),
    nodes: usize,
    limit: usize,
    exhausted: bool,
}

impl ExactSearch<'_, '_> {
    fn run(&mut self, chosen: &mut Vec<usize>, hits: &mut [usize]) {
        if self.nodes >= self.limit {
            self.exhausted = true;
            return;
        }
        self.nodes += 1;

        let chart = self.chart;
        // Branch on the uncovered term with the fewest coverers
        let target = (0..hits.len())
            .filter(|&r| hits[r] == 0)
            .min_by_key(|&r| chart.columns[r].len());

        let Some(target) = target else {
            let cost = chart.cost(chosen);
            if cost < self.best_cost {
                self.best_cost = cost;
                self.best = chosen.clone();
            }
            return;
        };

        // Every branch adds at least one more prime
        if chosen.len() + 1 > self.best_cost.0 {
            return;
        }

        for &p in &chart.columns[target] {
            chosen.push(p);
            for &r in &chart.rows[p] {
                hits[r] += 1;
            }
            self.run(chosen, hits);
            for &r in &chart.rows[p] {
                hits[r] -= 1;
            }
            chosen.pop();
        }
    }
}
