//! Single-source shortest path search.
//!
//! Dijkstra over the network's link table, scoring each link with the
//! request's [`ScoreWeights`]. The solver never modifies the network: links
//! and locations to avoid are passed in as [`Exclusions`], which is what lets
//! the alternate-path search run many spur searches against one shared,
//! read-only network.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::trace;

use super::config::ScoreWeights;
use crate::domain::{LocationId, ModeSet, Path, Segment};
use crate::network::{Link, Network};

/// Links and locations a single search must not use.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    links: HashSet<(LocationId, LocationId)>,
    locations: HashSet<LocationId>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid travelling from `from` to `to` by any mode.
    pub fn exclude_link(&mut self, from: LocationId, to: LocationId) {
        self.links.insert((from, to));
    }

    /// Forbid passing through `location`.
    pub fn exclude_location(&mut self, location: LocationId) {
        self.locations.insert(location);
    }

    pub fn is_location_excluded(&self, location: LocationId) -> bool {
        self.locations.contains(&location)
    }

    fn blocks(&self, link: &Link) -> bool {
        self.links.contains(&(link.from, link.to)) || self.locations.contains(&link.to)
    }
}

/// Per-request search options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub weights: ScoreWeights,
    /// Only links of these modes are used.
    pub modes: ModeSet,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            modes: ModeSet::all(),
        }
    }
}

/// Frontier entry, ordered so the max-heap pops the lowest score first and,
/// among equal scores, the entry discovered first.
struct Frontier {
    score: f64,
    seq: u64,
    location: LocationId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Minimum-score path search over a borrowed network.
///
/// Holds no mutable state, so one solver can serve any number of searches.
pub struct ShortestPathSolver<'a> {
    network: &'a Network,
    options: SolverOptions,
}

impl<'a> ShortestPathSolver<'a> {
    pub fn new(network: &'a Network, options: SolverOptions) -> Self {
        Self { network, options }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Find the minimum-score path from `source` to `target`.
    ///
    /// Returns `None` when the target cannot be reached, when either endpoint
    /// is excluded, or when `source == target` (a path needs two distinct
    /// locations). Equal-score alternatives resolve to the one whose links
    /// were discovered first.
    pub fn solve(
        &self,
        source: LocationId,
        target: LocationId,
        exclusions: &Exclusions,
    ) -> Option<Path> {
        let n = self.network.registry().len();
        if source == target || source.0 >= n || target.0 >= n {
            return None;
        }
        if exclusions.is_location_excluded(source) || exclusions.is_location_excluded(target) {
            return None;
        }

        let links = self.network.links();
        let mut best = vec![f64::INFINITY; n];
        let mut via: Vec<Option<Link>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut frontier = BinaryHeap::new();
        let mut seq = 0u64;

        best[source.0] = 0.0;
        frontier.push(Frontier {
            score: 0.0,
            seq,
            location: source,
        });

        while let Some(Frontier {
            score, location, ..
        }) = frontier.pop()
        {
            if settled[location.0] {
                continue;
            }
            settled[location.0] = true;

            if location == target {
                break;
            }

            for link in links.outgoing(location) {
                if settled[link.to.0]
                    || !self.options.modes.contains(link.mode)
                    || exclusions.blocks(link)
                {
                    continue;
                }

                let candidate = score + self.options.weights.score(link.cost, link.time);
                if candidate < best[link.to.0] {
                    best[link.to.0] = candidate;
                    via[link.to.0] = Some(*link);
                    seq += 1;
                    frontier.push(Frontier {
                        score: candidate,
                        seq,
                        location: link.to,
                    });
                }
            }
        }

        if !settled[target.0] {
            trace!(%source, %target, "target unreachable");
            return None;
        }

        let mut hops = Vec::new();
        let mut at = target;
        while at != source {
            let link = via[at.0]?;
            hops.push(link);
            at = link.from;
        }
        hops.reverse();

        let segments = hops.iter().map(|link| self.segment(link)).collect();
        Path::from_segments(segments).ok()
    }

    fn segment(&self, link: &Link) -> Segment {
        Segment {
            from: link.from,
            to: link.to,
            mode: link.mode,
            cost: link.cost,
            time: link.time,
            capacity: link.capacity,
            from_coords: self.network.location(link.from).coordinates,
            to_coords: self.network.location(link.to).coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationKind, TransportMode};
    use crate::network::Tariff;
    use crate::planner::test_support::{names, scenario_network};

    fn solve(net: &Network, from: &str, to: &str) -> Option<Path> {
        ShortestPathSolver::new(net, SolverOptions::default()).solve(
            net.id(from).unwrap(),
            net.id(to).unwrap(),
            &Exclusions::new(),
        )
    }

    #[test]
    fn prefers_lower_combined_score() {
        let net = scenario_network();
        let path = solve(&net, "A", "C").unwrap();

        // A-B-C scores 6 + 6 = 12, A-C direct scores 25.5
        assert_eq!(names(&net, &path), vec!["A", "B", "C"]);
        assert_eq!(path.cost(), 20.0);
        assert_eq!(path.time(), 4.0);
        assert!(path.segments().iter().all(|s| s.mode == TransportMode::Land));
    }

    #[test]
    fn weights_change_the_answer() {
        let net = scenario_network();
        let time_only = SolverOptions {
            weights: ScoreWeights::new(0.0, 1.0),
            ..SolverOptions::default()
        };
        let path = ShortestPathSolver::new(&net, time_only)
            .solve(net.id("A").unwrap(), net.id("C").unwrap(), &Exclusions::new())
            .unwrap();

        assert_eq!(names(&net, &path), vec!["A", "C"]);
        assert_eq!(path.segments()[0].mode, TransportMode::Air);
    }

    #[test]
    fn segments_carry_coordinates_and_capacity() {
        let net = scenario_network();
        let path = solve(&net, "A", "C").unwrap();
        let first = &path.segments()[0];

        assert_eq!(first.from_coords, net.location(net.id("A").unwrap()).coordinates);
        assert_eq!(first.to_coords, net.location(net.id("B").unwrap()).coordinates);
        assert_eq!(first.capacity, 2000.0);
    }

    #[test]
    fn unreachable_is_none() {
        let mut net = scenario_network();
        net.add_location("Island", LocationKind::City, ModeSet::all(), 10.0, 10.0);

        assert!(solve(&net, "A", "Island").is_none());
        assert!(solve(&net, "Island", "A").is_none());
    }

    #[test]
    fn same_source_and_target_is_none() {
        let net = scenario_network();
        assert!(solve(&net, "A", "A").is_none());
    }

    #[test]
    fn mode_restriction() {
        let net = scenario_network();
        let air_only = SolverOptions {
            modes: ModeSet::empty().with(TransportMode::Air),
            ..SolverOptions::default()
        };
        let solver = ShortestPathSolver::new(&net, air_only);
        let (a, b, c) = (net.id("A").unwrap(), net.id("B").unwrap(), net.id("C").unwrap());

        let path = solver.solve(a, c, &Exclusions::new()).unwrap();
        assert_eq!(names(&net, &path), vec!["A", "C"]);
        assert!(solver.solve(a, b, &Exclusions::new()).is_none());
    }

    #[test]
    fn excluded_link_is_avoided() {
        let net = scenario_network();
        let (a, b, c) = (net.id("A").unwrap(), net.id("B").unwrap(), net.id("C").unwrap());

        let mut exclusions = Exclusions::new();
        exclusions.exclude_link(a, b);
        let path = ShortestPathSolver::new(&net, SolverOptions::default())
            .solve(a, c, &exclusions)
            .unwrap();
        assert_eq!(names(&net, &path), vec!["A", "C"]);

        // The exclusion is directed
        let back = ShortestPathSolver::new(&net, SolverOptions::default())
            .solve(b, a, &exclusions)
            .unwrap();
        assert_eq!(names(&net, &back), vec!["B", "A"]);
    }

    #[test]
    fn excluded_location_is_avoided() {
        let net = scenario_network();
        let (a, b, c) = (net.id("A").unwrap(), net.id("B").unwrap(), net.id("C").unwrap());

        let mut exclusions = Exclusions::new();
        exclusions.exclude_location(b);
        let path = ShortestPathSolver::new(&net, SolverOptions::default())
            .solve(a, c, &exclusions)
            .unwrap();
        assert_eq!(names(&net, &path), vec!["A", "C"]);

        exclusions.exclude_location(a);
        assert!(
            ShortestPathSolver::new(&net, SolverOptions::default())
                .solve(a, c, &exclusions)
                .is_none()
        );
    }

    #[test]
    fn exclusions_leave_network_untouched() {
        let net = scenario_network();
        let before = net.links().iter().count();

        let mut exclusions = Exclusions::new();
        exclusions.exclude_link(net.id("A").unwrap(), net.id("B").unwrap());
        let _ = solve(&net, "A", "C");
        let _ = ShortestPathSolver::new(&net, SolverOptions::default()).solve(
            net.id("A").unwrap(),
            net.id("C").unwrap(),
            &exclusions,
        );

        assert_eq!(net.links().iter().count(), before);
        assert_eq!(names(&net, &solve(&net, "A", "C").unwrap()), vec!["A", "B", "C"]);
    }

    #[test]
    fn ties_follow_discovery_order() {
        // Two equal-score routes S-X-T and S-Y-T; X's link is added first
        let mut net = Network::default();
        for (name, lng) in [("S", 0.0), ("X", 1.0), ("Y", 1.0), ("T", 2.0)] {
            net.add_location(name, LocationKind::Hub, ModeSet::all(), 0.0, lng);
        }
        let fixed = Tariff::Fixed {
            cost: 5.0,
            time: 1.0,
        };
        net.add_link("S", "X", TransportMode::Land, fixed).unwrap();
        net.add_link("S", "Y", TransportMode::Land, fixed).unwrap();
        net.add_link("Y", "T", TransportMode::Land, fixed).unwrap();
        net.add_link("X", "T", TransportMode::Land, fixed).unwrap();

        let path = solve(&net, "S", "T").unwrap();
        assert_eq!(names(&net, &path), vec!["S", "X", "T"]);

        // Same links, Y first
        let mut net = Network::default();
        for (name, lng) in [("S", 0.0), ("X", 1.0), ("Y", 1.0), ("T", 2.0)] {
            net.add_location(name, LocationKind::Hub, ModeSet::all(), 0.0, lng);
        }
        net.add_link("S", "Y", TransportMode::Land, fixed).unwrap();
        net.add_link("S", "X", TransportMode::Land, fixed).unwrap();
        net.add_link("X", "T", TransportMode::Land, fixed).unwrap();
        net.add_link("Y", "T", TransportMode::Land, fixed).unwrap();

        let path = solve(&net, "S", "T").unwrap();
        assert_eq!(names(&net, &path), vec!["S", "Y", "T"]);
    }

    #[test]
    fn picks_cheaper_parallel_mode() {
        let mut net = Network::default();
        net.add_location("Delhi", LocationKind::City, ModeSet::all(), 28.6139, 77.209);
        net.add_location("Mumbai", LocationKind::City, ModeSet::all(), 19.076, 72.8777);
        net.add_link(
            "Delhi",
            "Mumbai",
            TransportMode::Land,
            Tariff::Fixed {
                cost: 100.0,
                time: 24.0,
            },
        )
        .unwrap();
        net.add_link(
            "Delhi",
            "Mumbai",
            TransportMode::Air,
            Tariff::Fixed {
                cost: 150.0,
                time: 2.0,
            },
        )
        .unwrap();

        // land scores 62, air scores 76
        let path = solve(&net, "Delhi", "Mumbai").unwrap();
        assert_eq!(path.segments()[0].mode, TransportMode::Land);
    }
}
