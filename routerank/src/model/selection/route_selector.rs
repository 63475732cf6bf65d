use itertools::Itertools;
use ordered_float::OrderedFloat;
use routerank_core::model::ScoredRoute;

/// routes in display order along with the identity of the best route.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub ranked: Vec<ScoredRoute>,
    pub best_route_index: Option<usize>,
}

/// orders routes by (calculated_cost, route_index) ascending. the first
/// route after sorting is the best. no route is dropped, and the result
/// does not depend on the order routes are passed in.
pub fn select(scored_routes: Vec<ScoredRoute>) -> Selection {
    let ranked = scored_routes
        .into_iter()
        .sorted_by_key(|r| (OrderedFloat(r.calculated_cost), r.route_index))
        .collect_vec();
    let best_route_index = ranked.first().map(|r| r.route_index);
    Selection {
        ranked,
        best_route_index,
    }
}

#[cfg(test)]
mod test {
    use super::select;
    use itertools::Itertools;
    use routerank_core::model::{CongestionPrediction, ScoredRoute};

    fn route(route_index: usize, calculated_cost: f64) -> ScoredRoute {
        ScoredRoute {
            route_index,
            travel_time_s: 0.0,
            no_traffic_s: 0.0,
            delay_s: 0.0,
            length_m: 0.0,
            congestion_ratio: None,
            calculated_cost,
            ml_predicted_congestion: CongestionPrediction::absent(),
            geometry: vec![],
        }
    }

    #[test]
    fn test_sorted_ascending_with_best_first() {
        let s = select(vec![route(0, 2110.0), route(1, 2058.0), route(2, 1515.0)]);
        let order = s.ranked.iter().map(|r| r.route_index).collect_vec();
        assert_eq!(order, vec![2, 1, 0]);
        assert_eq!(s.best_route_index, Some(2));
    }

    #[test]
    fn test_tie_broken_by_route_index() {
        let s = select(vec![route(3, 10.0), route(1, 10.0), route(2, 12.0)]);
        let order = s.ranked.iter().map(|r| r.route_index).collect_vec();
        assert_eq!(order, vec![1, 3, 2]);
        assert_eq!(s.best_route_index, Some(1));
    }

    #[test]
    fn test_independent_of_input_order() {
        let routes = vec![route(0, 5.0), route(1, 3.0), route(2, 3.0), route(3, 9.0)];
        let expected = select(routes.clone());
        for perm in routes.into_iter().permutations(4) {
            assert_eq!(select(perm), expected);
        }
    }

    #[test]
    fn test_empty_has_no_best() {
        let s = select(vec![]);
        assert!(s.ranked.is_empty());
        assert_eq!(s.best_route_index, None);
    }

    #[test]
    fn test_nan_cost_sorts_last() {
        let s = select(vec![route(0, f64::NAN), route(1, 100.0)]);
        assert_eq!(s.ranked.len(), 2);
        assert_eq!(s.best_route_index, Some(1));
    }
}
