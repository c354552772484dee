//! Ranked alternate paths (Yen's k-shortest simple paths).
//!
//! Starting from the best path, each round takes the most recently accepted
//! path and, for every location on it except the destination, searches for a
//! detour ("spur") that leaves the shared prefix ("root") by a link no
//! accepted path with the same root has already used. Spur searches exclude
//! the root's earlier locations so every candidate stays simple. The best
//! unseen candidate is accepted and the rest stay pooled for later rounds.

use tracing::debug;

use super::config::ScoreWeights;
use super::solver::{Exclusions, ShortestPathSolver};
use crate::domain::{LocationId, Path};

/// Finds up to `k` distinct simple paths in ascending score order.
pub struct AlternatePathFinder<'a> {
    solver: ShortestPathSolver<'a>,
}

impl<'a> AlternatePathFinder<'a> {
    pub fn new(solver: ShortestPathSolver<'a>) -> Self {
        Self { solver }
    }

    fn weights(&self) -> ScoreWeights {
        self.solver.options().weights
    }

    fn score(&self, path: &Path) -> f64 {
        self.weights().score(path.cost(), path.time())
    }

    /// Up to `k` distinct simple paths from `source` to `destination`, best
    /// first.
    ///
    /// Returns fewer than `k` when the network has fewer simple paths, and
    /// none when `k` is zero or the destination is unreachable. Candidates
    /// with equal scores are accepted in the order they were found.
    pub fn find(&self, source: LocationId, destination: LocationId, k: usize) -> Vec<Path> {
        if k == 0 {
            return Vec::new();
        }

        let Some(first) = self.solver.solve(source, destination, &Exclusions::new()) else {
            debug!(%source, %destination, "no path");
            return Vec::new();
        };

        let mut accepted = vec![first];
        let mut candidates: Vec<Path> = Vec::new();

        while accepted.len() < k {
            let previous = &accepted[accepted.len() - 1];

            for spur_index in 0..previous.segments().len() {
                let root = &previous.locations()[..=spur_index];
                let spur_node = root[spur_index];

                let mut exclusions = Exclusions::new();
                for path in &accepted {
                    if path.starts_with(root) && path.locations().len() > spur_index + 1 {
                        exclusions.exclude_link(spur_node, path.locations()[spur_index + 1]);
                    }
                }
                for &location in &root[..spur_index] {
                    exclusions.exclude_location(location);
                }

                let Some(spur) = self.solver.solve(spur_node, destination, &exclusions) else {
                    continue;
                };
                let Ok(candidate) = previous.splice(spur_index, &spur) else {
                    continue;
                };

                let known = accepted
                    .iter()
                    .chain(candidates.iter())
                    .any(|p| p.locations() == candidate.locations());
                if !known {
                    candidates.push(candidate);
                }
            }

            let Some(best) = self.cheapest(&candidates) else {
                break;
            };
            accepted.push(candidates.remove(best));
        }

        debug!(
            %source,
            %destination,
            requested = k,
            found = accepted.len(),
            pooled = candidates.len(),
            "alternate paths"
        );
        accepted
    }

    /// Index of the lowest-scoring candidate; the earliest wins ties.
    fn cheapest(&self, candidates: &[Path]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, path) in candidates.iter().enumerate() {
            let score = self.score(path);
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((i, score));
            }
        }
        best.map(|(i, _)| i)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::planner::solver::SolverOptions;
    use crate::planner::test_support::random_network;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        /// At most k results, each simple and distinct, scores never
        /// decreasing
        #[test]
        fn results_are_ranked_distinct_simple_paths(
            (net, source, target) in random_network(7, 18),
            k in 0usize..6,
        ) {
            let options = SolverOptions::default();
            let finder = AlternatePathFinder::new(ShortestPathSolver::new(&net, options));
            let paths = finder.find(source, target, k);

            prop_assert!(paths.len() <= k);

            let mut sequences = HashSet::new();
            for path in &paths {
                prop_assert_eq!(path.origin(), source);
                prop_assert_eq!(path.destination(), target);
                let mut seen = HashSet::new();
                prop_assert!(path.locations().iter().all(|l| seen.insert(*l)));
                prop_assert!(sequences.insert(path.locations().to_vec()));
            }

            let scores: Vec<f64> = paths
                .iter()
                .map(|p| options.weights.score(p.cost(), p.time()))
                .collect();
            prop_assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        }

        /// Asking for more paths never reorders the ones already found
        #[test]
        fn larger_k_extends_smaller(
            (net, source, target) in random_network(6, 14),
        ) {
            let finder = AlternatePathFinder::new(ShortestPathSolver::new(&net, SolverOptions::default()));
            let short = finder.find(source, target, 2);
            let long = finder.find(source, target, 4);
            prop_assert!(long.len() >= short.len());
            prop_assert_eq!(&long[..short.len()], &short[..]);
        }
    }
}
