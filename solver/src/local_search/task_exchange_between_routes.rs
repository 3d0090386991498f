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

/// Swaps a collection zone of one route against a collection zone of
/// another route.
pub struct TaskExchangeBetweenRoutes {
    params: LocalSearchParams,
}

impl TaskExchangeBetweenRoutes {
    pub fn new(params: LocalSearchParams) -> TaskExchangeBetweenRoutes {
        TaskExchangeBetweenRoutes { params }
    }
}

impl CvNeighborhood for TaskExchangeBetweenRoutes {
    fn params(&self) -> LocalSearchParams {
        self.params
    }

    fn neighborhood_name(&self) -> &'static str {
        "TaskExchangeBetweenRoutes"
    }

    fn search_neighborhood(
        &self,
        problem: &Arc<VrptProblem>,
        current: &VrptSolution,
    ) -> VrptSolution {
        let mut best_solution = current.clone();
        if current.cv_count() < 2 {
            return best_solution;
        }
        let mut scan = NeighborhoodScan::new(problem, current);

        for (first_index, first_route) in current.cv_routes().enumerate() {
            for first_position in zone_positions(first_route, problem) {
                let first_zone = first_route.sequence()[first_position];

                for (second_index, second_route) in
                    current.cv_routes().enumerate().skip(first_index + 1)
                {
                    for second_position in zone_positions(second_route, problem) {
                        let second_zone = second_route.sequence()[second_position];

                        let mut new_first_sequence: Vec<LocationId> =
                            first_route.sequence().to_vec();
                        new_first_sequence[first_position] = second_zone;
                        let mut new_second_sequence: Vec<LocationId> =
                            second_route.sequence().to_vec();
                        new_second_sequence[second_position] = first_zone;

                        let new_first = match rebuild_cv_route(
                            first_route.vehicle_id(),
                            &new_first_sequence,
                            problem,
                        ) {
                            Some(route) => route,
                            None => continue,
                        };
                        let new_second = match rebuild_cv_route(
                            second_route.vehicle_id(),
                            &new_second_sequence,
                            problem,
                        ) {
                            Some(route) => route,
                            None => continue,
                        };

                        let mut candidate = current.clone();
                        candidate.set_cv_route(first_index, new_first);
                        candidate.set_cv_route(second_index, new_second);
                        candidate.remove_empty_cv_routes();

                        if scan.try_accept(problem, &candidate) {
                            if self.params.first_improvement {
                                return candidate;
                            }
                            best_solution = candidate;
                        }
                    }
                }
            }
        }

        best_solution
    }
}
