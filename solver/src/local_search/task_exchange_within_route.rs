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

use itertools::Itertools;
use model::base_types::LocationId;
use model::problem::VrptProblem;
use solution::VrptSolution;

use super::{rebuild_cv_route, zone_positions, CvNeighborhood, LocalSearchParams, NeighborhoodScan};

/// Swaps two collection zones of the same route.
pub struct TaskExchangeWithinRoute {
    params: LocalSearchParams,
}

impl TaskExchangeWithinRoute {
    pub fn new(params: LocalSearchParams) -> TaskExchangeWithinRoute {
        TaskExchangeWithinRoute { params }
    }
}

impl CvNeighborhood for TaskExchangeWithinRoute {
    fn params(&self) -> LocalSearchParams {
        self.params
    }

    fn neighborhood_name(&self) -> &'static str {
        "TaskExchangeWithinRoute"
    }

    fn search_neighborhood(
        &self,
        problem: &Arc<VrptProblem>,
        current: &VrptSolution,
    ) -> VrptSolution {
        let mut best_solution = current.clone();
        let mut scan = NeighborhoodScan::new(problem, current);

        for (route_index, route) in current.cv_routes().enumerate() {
            let sequence = route.sequence();

            for (first, second) in zone_positions(route, problem)
                .into_iter()
                .tuple_combinations()
            {
                let mut new_sequence: Vec<LocationId> = sequence.to_vec();
                new_sequence.swap(first, second);

                let new_route = match rebuild_cv_route(route.vehicle_id(), &new_sequence, problem)
                {
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

        best_solution
    }
}
