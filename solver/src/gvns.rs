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
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solution::VrptSolution;
use tracing::{debug, info};

use crate::algorithm::{Generator, Neighborhood};
use crate::control::SearchControl;
use crate::errors::SolverError;
use crate::local_search::{rebuild_cv_route_strict, zone_positions, LocalSearch};

/// General Variable Neighborhood Search: a variable-neighborhood descent
/// over the configured operators, wrapped in a shake-and-retry loop that
/// swaps a random zone pair between two random routes to escape local
/// optima. Route count is the acceptance currency of the outer loop.
pub struct Gvns {
    max_iterations: usize,
    generator: Generator,
    neighborhoods: Vec<Neighborhood>,
}

// static functions
impl Gvns {
    pub fn new(max_iterations: usize, generator: Generator, neighborhoods: Vec<Neighborhood>) -> Gvns {
        Gvns {
            max_iterations,
            generator,
            neighborhoods,
        }
    }
}

// methods
impl Gvns {
    pub fn solve(
        &self,
        problem: &Arc<VrptProblem>,
        seed: Option<u64>,
        control: &SearchControl,
    ) -> Result<VrptSolution, SolverError> {
        let mut generator = self.generator.build(seed)?;
        let searches: Vec<Box<dyn LocalSearch>> = self
            .neighborhoods
            .iter()
            .map(|neighborhood| neighborhood.build())
            .collect();

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        let mut current = generator.generate(problem)?;
        let mut best = current.clone();

        for iteration in 0..self.max_iterations {
            // checkpoint: return the incumbent on cancellation
            if control.is_cancelled() {
                info!(iteration, "gvns cancelled, returning best-so-far");
                break;
            }

            // variable-neighborhood descent: restart at the first
            // neighborhood whenever the route count drops
            let mut k = 0;
            while k < searches.len() {
                if control.is_cancelled() {
                    break;
                }
                let improved = searches[k].improve(problem, &current);
                if improved.cv_count() < current.cv_count() {
                    debug!(
                        iteration,
                        neighborhood = searches[k].name(),
                        cv_count = improved.cv_count(),
                        "vnd improved route count"
                    );
                    current = improved;
                    k = 0;
                } else {
                    k += 1;
                }
            }

            if current.cv_count() < best.cv_count() {
                best = current.clone();
            }

            current = shake(problem, &current, &mut rng);
        }

        Ok(best)
    }
}

/// Perturbs a solution by swapping one random collection zone between two
/// random routes. If fewer than two routes exist, a chosen route has no
/// zone, or either rebuilt route is infeasible, the solution is returned
/// unperturbed.
pub(crate) fn shake(
    problem: &VrptProblem,
    solution: &VrptSolution,
    rng: &mut StdRng,
) -> VrptSolution {
    if solution.cv_count() < 2 {
        return solution.clone();
    }

    let first_index = rng.gen_range(0..solution.cv_count());
    let mut second_index = rng.gen_range(0..solution.cv_count());
    while second_index == first_index {
        second_index = rng.gen_range(0..solution.cv_count());
    }

    let first_route = solution.cv_route(first_index).unwrap();
    let second_route = solution.cv_route(second_index).unwrap();

    let first_zones = zone_positions(first_route, problem);
    let second_zones = zone_positions(second_route, problem);
    if first_zones.is_empty() || second_zones.is_empty() {
        return solution.clone();
    }

    let first_position = first_zones[rng.gen_range(0..first_zones.len())];
    let second_position = second_zones[rng.gen_range(0..second_zones.len())];

    let mut new_first_sequence: Vec<LocationId> = first_route.sequence().to_vec();
    let mut new_second_sequence: Vec<LocationId> = second_route.sequence().to_vec();
    let first_zone = new_first_sequence[first_position];
    new_first_sequence[first_position] = new_second_sequence[second_position];
    new_second_sequence[second_position] = first_zone;

    let new_first =
        match rebuild_cv_route_strict(first_route.vehicle_id(), &new_first_sequence, problem) {
            Some(route) => route,
            None => return solution.clone(),
        };
    let new_second =
        match rebuild_cv_route_strict(second_route.vehicle_id(), &new_second_sequence, problem) {
            Some(route) => route,
            None => return solution.clone(),
        };

    let mut perturbed = solution.clone();
    perturbed.set_cv_route(first_index, new_first);
    perturbed.set_cv_route(second_index, new_second);
    perturbed
}
