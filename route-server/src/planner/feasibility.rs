//! Capacity feasibility of candidate paths.

use crate::domain::Path;

use super::plan::PlanError;

/// What to do with paths that cannot carry the shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeasibilityPolicy {
    /// Keep every path and mark each one feasible or not.
    #[default]
    Annotate,
    /// Drop infeasible paths.
    Enforce,
}

/// A candidate path and whether it can carry the requested weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOption {
    pub path: Path,
    pub feasible: bool,
}

/// Returns true if every segment of `path` can carry `weight`.
pub fn is_feasible(path: &Path, weight: f64) -> bool {
    path.segments().iter().all(|s| s.capacity >= weight)
}

/// Mark or filter `paths` by feasibility, keeping their order.
///
/// # Errors
///
/// Under [`FeasibilityPolicy::Enforce`], returns
/// [`PlanError::NoFeasibleRoute`] when paths were found but none can carry
/// `weight`.
pub fn assess(
    paths: Vec<Path>,
    weight: f64,
    policy: FeasibilityPolicy,
) -> Result<Vec<RouteOption>, PlanError> {
    let best_capacity = paths
        .iter()
        .map(Path::bottleneck_capacity)
        .fold(0.0, f64::max);

    let options: Vec<RouteOption> = paths
        .into_iter()
        .map(|path| {
            let feasible = is_feasible(&path, weight);
            RouteOption { path, feasible }
        })
        .filter(|option| policy == FeasibilityPolicy::Annotate || option.feasible)
        .collect();

    if options.is_empty() && policy == FeasibilityPolicy::Enforce {
        return Err(PlanError::NoFeasibleRoute {
            weight,
            best_capacity,
        });
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::seg;
    use crate::domain::TransportMode;

    fn land_then_air() -> Path {
        Path::from_segments(vec![
            seg(0, 1, TransportMode::Land, 10.0, 2.0, 2000.0),
            seg(1, 2, TransportMode::Air, 50.0, 1.0, 1000.0),
        ])
        .unwrap()
    }

    fn all_land() -> Path {
        Path::from_segments(vec![
            seg(0, 3, TransportMode::Land, 10.0, 2.0, 2000.0),
            seg(3, 2, TransportMode::Land, 10.0, 2.0, 2000.0),
        ])
        .unwrap()
    }

    #[test]
    fn bottleneck_decides() {
        assert!(is_feasible(&land_then_air(), 1000.0));
        assert!(!is_feasible(&land_then_air(), 1000.5));
        assert!(is_feasible(&all_land(), 2000.0));
    }

    #[test]
    fn annotate_keeps_order_and_marks() {
        let options = assess(
            vec![all_land(), land_then_air()],
            1500.0,
            FeasibilityPolicy::Annotate,
        )
        .unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].path, all_land());
        assert!(options[0].feasible);
        assert!(!options[1].feasible);
    }

    #[test]
    fn enforce_drops_infeasible() {
        let options = assess(
            vec![land_then_air(), all_land()],
            1500.0,
            FeasibilityPolicy::Enforce,
        )
        .unwrap();

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].path, all_land());
    }

    #[test]
    fn enforce_with_nothing_feasible() {
        let err = assess(
            vec![land_then_air(), all_land()],
            2500.0,
            FeasibilityPolicy::Enforce,
        )
        .unwrap_err();

        assert_eq!(
            err,
            PlanError::NoFeasibleRoute {
                weight: 2500.0,
                best_capacity: 2000.0,
            }
        );
    }

    #[test]
    fn empty_input_annotates_to_empty() {
        assert!(
            assess(Vec::new(), 1.0, FeasibilityPolicy::Annotate)
                .unwrap()
                .is_empty()
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::test_support::seg;
    use crate::domain::TransportMode;
    use proptest::prelude::*;

    proptest! {
        /// A path is feasible exactly when its smallest capacity covers the weight
        #[test]
        fn feasible_iff_bottleneck_covers_weight(
            capacities in prop::collection::vec(1.0f64..10_000.0, 1..6),
            weight in 0.0f64..12_000.0,
        ) {
            let segments = capacities
                .iter()
                .enumerate()
                .map(|(i, c)| seg(i, i + 1, TransportMode::Land, 1.0, 1.0, *c))
                .collect();
            let path = Path::from_segments(segments).unwrap();

            let min = capacities.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(is_feasible(&path, weight), min >= weight);
        }
    }
}
