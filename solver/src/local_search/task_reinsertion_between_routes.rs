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

/// Moves a single collection zone from its route into any position of
/// another route. Emptying the donor route is how the search gets rid of
/// vehicles, so empty routes are dropped from the candidate.
pub struct TaskReinsertionBetweenRoutes {
    params: LocalSearchParams,
}

impl TaskReinsertionBetweenRoutes {
    pub fn new(params: LocalSearchParams) -> TaskReinsertionBetweenRoutes {
        TaskReinsertionBetweenRoutes { params }
    }
}

impl CvNeighborhood for TaskReinsertionBetweenRoutes {
    fn params(&self) -> LocalSearchParams {
        self.params
    }

    fn neighborhood_name(&self) -> &'static str {
        "TaskReinsertionBetweenRoutes"
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

        for (donor_index, donor) in current.cv_routes().enumerate() {
            let donor_sequence = donor.sequence();

            for position in zone_positions(donor, problem) {
                let zone_id = donor_sequence[position];

                let new_donor_sequence: Vec<LocationId> = donor_sequence
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != position)
                    .map(|(_, id)| *id)
                    .collect();

                for (receiver_index, receiver) in current.cv_routes().enumerate() {
                    if receiver_index == donor_index {
                        continue;
                    }
                    let receiver_sequence = receiver.sequence();

                    for insertion in 0..=receiver_sequence.len() {
                        let mut new_receiver_sequence: Vec<LocationId> =
                            receiver_sequence.to_vec();
                        new_receiver_sequence.insert(insertion, zone_id);

                        let new_donor =
                            match rebuild_cv_route(donor.vehicle_id(), &new_donor_sequence, problem)
                            {
                                Some(route) => route,
                                None => continue,
                            };
                        let new_receiver = match rebuild_cv_route(
                            receiver.vehicle_id(),
                            &new_receiver_sequence,
                            problem,
                        ) {
                            Some(route) => route,
                            None => continue,
                        };

                        let mut candidate = current.clone();
                        candidate.set_cv_route(donor_index, new_donor);
                        candidate.set_cv_route(receiver_index, new_receiver);
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
