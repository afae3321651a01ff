//! Minimizer configuration

/// How the covering solver completes a cover once essential implicants are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverStrategy {
    /// Repeatedly take the prime covering the most uncovered minterms
    ///
    /// Ties go to the earliest prime in generation order. Fast and deterministic, but not
    /// guaranteed to find a minimum cover.
    #[default]
    Greedy,
    /// Branch-and-bound search for a cover with the fewest terms (then fewest literals)
    ///
    /// Seeded with the greedy cover, so the result is never larger than [`CoverStrategy::Greedy`].
    Exact,
}

/// Configuration for truth table minimization
///
/// # Examples
///
/// ```
/// use kmap_logic::{CoverStrategy, MinimizerConfig};
///
/// let config = MinimizerConfig {
///     strategy: CoverStrategy::Exact,
///     ..Default::default()
/// };
/// assert!(config.pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Cover completion strategy
    ///
    /// **Default:** [`CoverStrategy::Greedy`]
    pub strategy: CoverStrategy,

    /// Search-node budget for [`CoverStrategy::Exact`]
    ///
    /// When the budget runs out the best cover found so far is kept.
    ///
    /// **Default:** `100_000`
    pub exact_node_limit: usize,

    /// Also derive the product-of-sums form from the zero-set
    ///
    /// **Default:** `true`
    pub pos: bool,
}

impl MinimizerConfig {
    /// Default configuration with the exact covering search enabled
    pub fn exact() -> Self {
        MinimizerConfig {
            strategy: CoverStrategy::Exact,
            ..Default::default()
        }
    }
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            strategy: CoverStrategy::Greedy,
            exact_node_limit: 100_000,
            pos: true,
        }
    }
}
