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

use std::sync::Arc;

use model::base_types::LocationId;
use model::problem::VrptProblem;
use solution::VrptSolution;

use super::{rebuild_cv_route, zone_positions, CvNeighborhood, LocalSearchParams, NeighborhoodScan};

/// Moves a single collection zone to a different position of the same
/// route. The no-op insertions (same position, directly behind itself) are
/// excluded.
pub struct TaskReinsertionWithinRoute {
    params: LocalSearchParams,
}

impl TaskReinsertionWithinRoute {
    pub fn new(params: LocalSearchParams) -> TaskReinsertionWithinRoute {
        TaskReinsertionWithinRoute { params }
    }
}

impl CvNeighborhood for TaskReinsertionWithinRoute {
    fn params(&self) -> LocalSearchParams {
        self.params
    }

    fn neighborhood_name(&self) -> &'static str {
        "TaskReinsertionWithinRoute"
    }

    fn search_neighborhood(
        &self,
        problem: &Arc<VrptProblem>,
        current: &VrptSolution,
    ) -> VrptSolution {
        let mut best_solution = current.clone();
        let mut scan = NeighborhoodScan::new(problem, current);

        for (route_index, route) in current.cv_routes().enumerate() {
            if route.len() < 2 {
                continue;
            }
            let sequence = route.sequence();

            for position in zone_positions(route, problem) {
                let zone_id = sequence[position];

                for insertion in 0..=sequence.len() {
                    if insertion == position || insertion == position + 1 {
                        continue;
                    }

                    let mut new_sequence: Vec<LocationId> = sequence
                        .iter()
                        .enumerate()
                        .filter(|(index, _)| *index != position)
                        .map(|(_, id)| *id)
                        .collect();
                    let target = if insertion > position {
                        insertion - 1
                    } else {
                        insertion
                    };
                    new_sequence.insert(target, zone_id);

                    let new_route =
                        match rebuild_cv_route(route.vehicle_id(), &new_sequence, problem) {
                            Some(new_route) => new_route,
                            None => continue,
                        };

                    let mut candidate = current.clone();
                    candidate.set_cv_route(route_index, new_route);

                    if scan.try_accept(problem, &candidate) {
                        if self.params.first_improvement {
                            return candidate;
                        }
                        best_solution = candidate;
                    }
                }
            }
        }

        best_solution
    }
}
