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

pub mod task_exchange_between_routes;
pub mod task_exchange_within_route;
pub mod task_reinsertion_between_routes;
pub mod task_reinsertion_within_route;
pub mod two_opt;

use std::sync::Arc;

use model::base_types::{Capacity, Duration, LocationId};
use model::location::LocationType;
use model::problem::VrptProblem;
use solution::{CvRoute, VrptSolution};
use tracing::trace;

use crate::objective;

/// Shared knobs of every neighborhood search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalSearchParams {
    /// how often the neighborhood is re-scanned before giving up
    pub max_iterations: usize,
    /// return the first strictly better neighbor instead of the best one
    pub first_improvement: bool,
}

impl Default for LocalSearchParams {
    fn default() -> LocalSearchParams {
        LocalSearchParams {
            max_iterations: 100,
            first_improvement: false,
        }
    }
}

/// A local-search operator: takes a feasible CV solution and returns one
/// that is no worse under the Phase-1 objective.
pub trait LocalSearch {
    fn improve(&self, problem: &Arc<VrptProblem>, solution: &VrptSolution) -> VrptSolution;

    fn name(&self) -> &'static str;
}

/// One scan over a neighborhood. Implementors only provide the scan; the
/// improve loop, which re-scans until the objective stalls or the
/// iteration budget runs out, is shared.
pub trait CvNeighborhood {
    fn params(&self) -> LocalSearchParams;

    fn neighborhood_name(&self) -> &'static str;

    /// Returns the best (or with first-improvement the first) accepted
    /// neighbor, or the unchanged solution if the scan finds none.
    fn search_neighborhood(
        &self,
        problem: &Arc<VrptProblem>,
        current: &VrptSolution,
    ) -> VrptSolution;
}

impl<T: CvNeighborhood> LocalSearch for T {
    fn improve(&self, problem: &Arc<VrptProblem>, solution: &VrptSolution) -> VrptSolution {
        let objective = objective::build(problem.clone());
        let mut best = objective.evaluate(solution.clone());
        let mut current = solution.clone();

        for iteration in 0..self.params().max_iterations {
            let neighbor = self.search_neighborhood(problem, &current);
            let evaluated = objective.evaluate(neighbor);
            if evaluated.objective_value() < best.objective_value() {
                trace!(
                    neighborhood = self.neighborhood_name(),
                    iteration,
                    "improved solution"
                );
                current = evaluated.solution().clone();
                best = evaluated;
            } else {
                break;
            }
        }

        best.into_solution()
    }

    fn name(&self) -> &'static str {
        self.neighborhood_name()
    }
}

/// Acceptance bookkeeping of a single neighborhood scan, shared by all
/// five operators: a neighbor is taken if it does not use more vehicles,
/// does not lose zones relative to the scanned solution and strictly
/// shortens the total duration.
pub(crate) struct NeighborhoodScan {
    best_cv_count: usize,
    zones_floor: usize,
    best_total_duration: Duration,
}

impl NeighborhoodScan {
    pub(crate) fn new(problem: &VrptProblem, current: &VrptSolution) -> NeighborhoodScan {
        NeighborhoodScan {
            best_cv_count: current.cv_count(),
            zones_floor: current.visited_zones(problem),
            best_total_duration: current.total_cv_duration(),
        }
    }

    /// Tests the candidate against the acceptance rule; on success the
    /// thresholds advance to the candidate.
    pub(crate) fn try_accept(&mut self, problem: &VrptProblem, candidate: &VrptSolution) -> bool {
        let zones = candidate.visited_zones(problem);
        let duration = candidate.total_cv_duration();
        if candidate.cv_count() <= self.best_cv_count
            && zones >= self.zones_floor
            && duration < self.best_total_duration
        {
            self.best_cv_count = candidate.cv_count();
            self.best_total_duration = duration;
            true
        } else {
            false
        }
    }
}

/// Replays an id sequence through a fresh route, skipping every id the
/// admissibility check rejects, then returns the route to the depot. The
/// neighbor only counts if nothing had to be skipped in a way that
/// matters: the rebuilt route must carry no residual load and pass the
/// closed-route audit. Returns None otherwise.
pub(crate) fn rebuild_cv_route(
    vehicle_id: &str,
    sequence: &[LocationId],
    problem: &VrptProblem,
) -> Option<CvRoute> {
    let mut route = CvRoute::new(
        vehicle_id.to_string(),
        problem.cv_capacity(),
        problem.cv_max_duration(),
    );
    for location_id in sequence {
        if !route.can_visit(*location_id, problem) {
            continue;
        }
        route.add_location(*location_id, problem).ok()?;
    }

    close_rebuilt_route(route, problem)
}

/// Strict replay used by the GVNS shaking: every id must be admissible,
/// and the result must close cleanly. Returns None on the first rejection.
pub(crate) fn rebuild_cv_route_strict(
    vehicle_id: &str,
    sequence: &[LocationId],
    problem: &VrptProblem,
) -> Option<CvRoute> {
    let mut route = CvRoute::new(
        vehicle_id.to_string(),
        problem.cv_capacity(),
        problem.cv_max_duration(),
    );
    for location_id in sequence {
        if !route.can_visit(*location_id, problem) {
            return None;
        }
        route.add_location(*location_id, problem).ok()?;
    }

    close_rebuilt_route(route, problem)
}

fn close_rebuilt_route(mut route: CvRoute, problem: &VrptProblem) -> Option<CvRoute> {
    if route.current_load() > Capacity::ZERO {
        return None;
    }
    route.return_to_depot(problem).ok()?;
    if !route.is_valid(problem) {
        return None;
    }
    Some(route)
}

/// The zone positions of a route: indices into the sequence that hold a
/// collection zone (transfer stations and the depot are never moved).
pub(crate) fn zone_positions(route: &CvRoute, problem: &VrptProblem) -> Vec<usize> {
    route
        .sequence()
        .iter()
        .enumerate()
        .filter(|(_, location_id)| {
            problem
                .location(**location_id)
                .map(|location| location.location_type() == LocationType::CollectionZone)
                .unwrap_or(false)
        })
        .map(|(position, _)| position)
        .collect()
}
