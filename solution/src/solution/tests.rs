// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use itertools::Itertools;
use model::base_types::Duration;

use crate::cv_route::CvRoute;
use crate::test_utilities::{init_test_data, TestData};
use crate::tv_route::TvRoute;

use super::VrptSolution;

fn route_via(d: &TestData, stops: &[model::base_types::LocationId]) -> CvRoute {
    let mut route = CvRoute::new(
        "CV".to_string(),
        d.problem.cv_capacity(),
        d.problem.cv_max_duration(),
    );
    for stop in stops {
        route.add_location(*stop, &d.problem).unwrap();
    }
    route.return_to_depot(&d.problem).unwrap();
    route
}

#[test]
fn derived_queries() {
    // ARRANGE
    let d = init_test_data();
    let mut solution = VrptSolution::new();
    solution.push_cv_route(route_via(&d, &[d.zone_1, d.swts_1]));
    solution.push_cv_route(route_via(&d, &[d.zone_2, d.zone_3, d.swts_1]));

    // ASSERT
    assert_eq!(solution.cv_count(), 2);
    assert_eq!(solution.tv_count(), 0);
    assert!(!solution.is_complete());
    assert_eq!(solution.visited_zones(&d.problem), 3);
    assert_eq!(solution.total_waste_collected().value(), 13.0);
    assert_eq!(
        solution.total_cv_duration(),
        solution.cv_routes().map(|r| r.total_duration()).sum()
    );
    assert!(solution.is_valid(&d.problem));
}

#[test]
fn delivery_tasks_are_merged_in_arrival_order() {
    let d = init_test_data();
    let mut solution = VrptSolution::new();
    // first route delivers at 5s, second at 65s (60s of service at zone_2)
    solution.push_cv_route(route_via(&d, &[d.zone_1, d.swts_1]));
    solution.push_cv_route(route_via(&d, &[d.zone_2, d.swts_1]));

    let tasks = solution.delivery_tasks();
    assert_eq!(tasks.len(), 2);
    let arrivals: Vec<Duration> = tasks.iter().map(|t| t.arrival_time()).collect();
    assert!(arrivals.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(
        tasks.iter().map(|t| t.amount().value()).collect_vec(),
        vec![3.0, 6.0]
    );
}

#[test]
fn visited_zones_counts_distinct_zones_only() {
    let d = init_test_data();
    let mut solution = VrptSolution::new();
    // zone_1 appears twice, SWTS and depot never count
    solution.push_cv_route(route_via(&d, &[d.zone_1, d.swts_1]));
    solution.push_cv_route(route_via(&d, &[d.zone_1, d.swts_1]));

    assert_eq!(solution.visited_zones(&d.problem), 1);
}

#[test]
fn empty_routes_can_be_dropped() {
    let d = init_test_data();
    let mut solution = VrptSolution::new();
    solution.push_cv_route(route_via(&d, &[d.zone_1, d.swts_1]));
    solution.push_cv_route(CvRoute::new(
        "CV2".to_string(),
        d.problem.cv_capacity(),
        d.problem.cv_max_duration(),
    ));

    assert_eq!(solution.cv_count(), 2);
    solution.remove_empty_cv_routes();
    assert_eq!(solution.cv_count(), 1);
}

#[test]
fn completeness_includes_tv_routes_in_the_audit() {
    let d = init_test_data();
    let mut solution = VrptSolution::new();
    solution.push_cv_route(route_via(&d, &[d.zone_1, d.swts_1]));

    let mut tv = TvRoute::new(
        "TV1".to_string(),
        d.problem.tv_capacity(),
        d.problem.tv_max_duration(),
    );
    tv.add_location(d.landfill, &d.problem).unwrap();
    tv.add_pickup(
        d.swts_1,
        Duration::from_seconds(5.0).unwrap(),
        solution.delivery_tasks()[0].amount(),
        &d.problem,
    )
    .unwrap();

    // not finalized: invalid once the solution claims to be complete
    solution.push_tv_route(tv.clone());
    solution.set_complete(true);
    assert!(!solution.is_valid(&d.problem));

    let mut finalized = VrptSolution::new();
    finalized.push_cv_route(route_via(&d, &[d.zone_1, d.swts_1]));
    tv.finalize(&d.problem).unwrap();
    finalized.push_tv_route(tv);
    finalized.set_complete(true);
    assert!(finalized.is_valid(&d.problem));
}
