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

use super::{rebuild_cv_route, CvNeighborhood, LocalSearchParams, NeighborhoodScan};

/// Classical 2-opt: reverses the segment between two cut points of a
/// single route. Needs a route of at least four stops to do anything
/// non-trivial.
pub struct TwoOpt {
    params: LocalSearchParams,
}

impl TwoOpt {
    pub fn new(params: LocalSearchParams) -> TwoOpt {
        TwoOpt { params }
    }
}

impl CvNeighborhood for TwoOpt {
    fn params(&self) -> LocalSearchParams {
        self.params
    }

    fn neighborhood_name(&self) -> &'static str {
        "TwoOpt"
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
            if sequence.len() < 4 {
                continue;
            }

            for i in 0..sequence.len() - 2 {
                for j in i + 2..sequence.len() {
                    // keep [0..=i], reverse (i..=j], keep the tail
                    let mut new_sequence: Vec<LocationId> =
                        Vec::with_capacity(sequence.len());
                    new_sequence.extend_from_slice(&sequence[..=i]);
                    new_sequence.extend(sequence[i + 1..=j].iter().rev());
                    new_sequence.extend_from_slice(&sequence[j + 1..]);

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
