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

use model::base_types::LocationId;
use solution::VrptSolution;

use crate::errors::SolverError;
use crate::generator::{GreedyCvGenerator, SolutionGenerator};
use crate::test_utilities::{line_instance, random_instance, single_zone_instance};
use crate::{
    benchmark, solve, solve_phase1, solve_phase1_with_control, solve_phase2, Algorithm, Generator,
    LocalSearchParams, Neighborhood, SearchControl,
};

fn sequences(solution: &VrptSolution) -> Vec<Vec<LocationId>> {
    solution
        .cv_routes()
        .map(|route| route.sequence().to_vec())
        .collect()
}

fn all_algorithms() -> Vec<Algorithm> {
    vec![
        Algorithm::Greedy,
        Algorithm::Grasp {
            alpha: 0.3,
            rcl_size: 5,
        },
        Algorithm::MultiStart {
            starts: 3,
            generator: Generator::Grasp {
                alpha: 0.5,
                rcl_size: 4,
            },
            local_search: Neighborhood::TaskReinsertionWithinRoute(LocalSearchParams {
                max_iterations: 10,
                first_improvement: true,
            }),
        },
        Algorithm::Gvns {
            max_iterations: 3,
            generator: Generator::Greedy,
            neighborhoods: Neighborhood::default_order(),
        },
    ]
}

#[test]
fn every_algorithm_produces_a_full_cover() {
    let problem = line_instance();
    for algorithm in all_algorithms() {
        let solution = solve_phase1(&problem, &algorithm, Some(17)).unwrap();

        assert!(!solution.is_complete(), "{} ran phase 2", algorithm);
        assert_eq!(
            solution.visited_zones(&problem),
            problem.number_of_zones(),
            "{} missed zones",
            algorithm
        );
        assert!(solution.is_valid(&problem), "{} broke a route", algorithm);
    }
}

#[test]
fn solve_chains_both_phases() {
    let problem = single_zone_instance();
    let complete = solve(&problem, &Algorithm::Greedy, None).unwrap();

    assert!(complete.is_complete());
    assert_eq!(complete.cv_count(), 1);
    assert_eq!(complete.tv_count(), 1);
    assert!(complete.is_valid(&problem));
}

#[test]
fn phase2_completes_a_phase1_solution() {
    let problem = line_instance();
    let phase1_solution = solve_phase1(&problem, &Algorithm::Greedy, None).unwrap();
    let complete = solve_phase2(&problem, phase1_solution.clone()).unwrap();

    assert!(complete.is_complete());
    assert_eq!(sequences(&complete), sequences(&phase1_solution)); // CV part untouched
    assert!(complete.tv_count() >= 1);
}

#[test]
fn seeded_runs_are_identical() {
    let problem = random_instance(2, 15);
    for algorithm in [
        Algorithm::Grasp {
            alpha: 0.6,
            rcl_size: 3,
        },
        Algorithm::Gvns {
            max_iterations: 3,
            generator: Generator::Grasp {
                alpha: 0.5,
                rcl_size: 4,
            },
            neighborhoods: Neighborhood::default_order(),
        },
    ] {
        let first = solve_phase1(&problem, &algorithm, Some(4242)).unwrap();
        let second = solve_phase1(&problem, &algorithm, Some(4242)).unwrap();
        assert_eq!(
            sequences(&first),
            sequences(&second),
            "{} is not reproducible",
            algorithm
        );
    }
}

#[test]
fn multi_start_is_not_worse_than_greedy() {
    let problem = line_instance();
    let greedy = GreedyCvGenerator::new().generate(&problem).unwrap();

    let multi_start = solve_phase1(
        &problem,
        &Algorithm::MultiStart {
            starts: 4,
            generator: Generator::Grasp {
                alpha: 0.4,
                rcl_size: 3,
            },
            local_search: Neighborhood::TaskReinsertionBetweenRoutes(LocalSearchParams::default()),
        },
        Some(7),
    )
    .unwrap();

    assert!(multi_start.cv_count() <= greedy.cv_count());
    assert_eq!(multi_start.visited_zones(&problem), problem.number_of_zones());
}

#[test]
fn cancelled_multi_start_returns_a_solution() {
    let problem = line_instance();
    let control = SearchControl::new();
    control.cancel();

    let solution = solve_phase1_with_control(
        &problem,
        &Algorithm::default_multi_start(),
        Some(1),
        &control,
    )
    .unwrap();

    assert_eq!(solution.visited_zones(&problem), problem.number_of_zones());
}

#[test]
fn invalid_selectors_are_rejected_at_dispatch() {
    let problem = line_instance();
    let result = solve_phase1(
        &problem,
        &Algorithm::Grasp {
            alpha: 2.0,
            rcl_size: 5,
        },
        None,
    );
    assert!(matches!(result, Err(SolverError::InvalidArgument(_))));
}

#[test]
fn benchmark_reports_one_record_per_run() {
    let problems = vec![single_zone_instance(), line_instance()];
    let records = benchmark(&problems, &Algorithm::Greedy, 2).unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].instance, "single-zone");
    assert_eq!(records[0].run, 0);
    assert_eq!(records[1].run, 1);
    assert_eq!(records[2].instance, "line");
    for record in &records {
        assert_eq!(record.algorithm, "Greedy");
        assert_eq!(record.zones_visited, record.zones);
        assert!(record.cv_count >= 1);
        assert!(record.tv_count >= 1);
        assert!(record.total_waste > 0.0);
        assert!(record.total_cv_duration_seconds > 0.0);
    }

    assert!(matches!(
        benchmark(&problems, &Algorithm::Greedy, 0),
        Err(SolverError::InvalidArgument(_))
    ));
}

#[test]
fn benchmark_records_serialize_to_camel_case() {
    let problems = vec![single_zone_instance()];
    let records = benchmark(&problems, &Algorithm::Greedy, 1).unwrap();
    let json = serde_json::to_value(&records[0]).unwrap();

    assert_eq!(json["instance"], "single-zone");
    assert_eq!(json["cvCount"], 1);
    assert_eq!(json["zonesVisited"], 1);
    assert!(json["wallClockMs"].is_u64());
}
