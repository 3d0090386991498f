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
use model::base_types::{Capacity, LocationId};
use model::problem::VrptProblem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solution::{CvRoute, VrptSolution};
use tracing::debug;

use crate::errors::SolverError;

use super::greedy::close_route;
use super::SolutionGenerator;

/// GRASP construction: the greedy skeleton, but each choice samples
/// uniformly from the restricted candidate list
/// `{c | d(c) <= d_min + alpha * (d_max - d_min)}`, truncated to
/// `rcl_size`. alpha = 0 degenerates to the pure greedy choice, alpha = 1
/// is uniformly random over all admissible candidates. The transfer
/// station detour is subject to the same rule.
pub struct GraspCvGenerator {
    alpha: f64,
    rcl_size: usize,
    rng: StdRng,
}

// static functions
impl GraspCvGenerator {
    pub fn new(
        alpha: f64,
        rcl_size: usize,
        seed: Option<u64>,
    ) -> Result<GraspCvGenerator, SolverError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SolverError::InvalidArgument(format!(
                "GRASP alpha must lie in [0, 1]: {}",
                alpha
            )));
        }
        if rcl_size == 0 {
            return Err(SolverError::InvalidArgument(
                "GRASP rcl_size must be at least 1".to_string(),
            ));
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(GraspCvGenerator {
            alpha,
            rcl_size,
            rng,
        })
    }
}

impl SolutionGenerator for GraspCvGenerator {
    fn generate(&mut self, problem: &VrptProblem) -> Result<VrptSolution, SolverError> {
        let mut solution = VrptSolution::new();
        let mut unassigned: Vec<LocationId> = problem.zones().map(|zone| zone.id()).collect();
        let depot_id = problem.depot().id();

        let mut route_count = 1;
        while !unassigned.is_empty() {
            let mut route = CvRoute::new(
                format!("CV{}", route_count),
                problem.cv_capacity(),
                problem.cv_max_duration(),
            );
            route_count += 1;
            let mut current = depot_id;

            loop {
                let candidates = admissible_sorted_by_distance(
                    &route,
                    current,
                    unassigned.iter().copied(),
                    problem,
                )?;

                if let Some(zone_id) = self.sample_from_rcl(&candidates) {
                    route.add_location(zone_id, problem)?;
                    current = zone_id;
                    unassigned.retain(|id| *id != zone_id);
                    continue;
                }

                if route.current_load() > Capacity::ZERO {
                    let swts_candidates = admissible_sorted_by_distance(
                        &route,
                        current,
                        problem.swts().map(|swts| swts.id()),
                        problem,
                    )?;
                    // randomize the detour as well, unless there is
                    // nothing to choose from
                    let selected = if swts_candidates.len() > 1 && self.alpha > 0.0 {
                        self.sample_from_rcl(&swts_candidates)
                    } else {
                        swts_candidates.first().map(|(id, _)| *id)
                    };
                    if let Some(swts_id) = selected {
                        route.add_location(swts_id, problem)?;
                        current = swts_id;
                        continue;
                    }
                }

                break;
            }

            if route.is_empty() {
                return Err(SolverError::Infeasible(format!(
                    "no vehicle can serve the remaining {} zones",
                    unassigned.len()
                )));
            }

            close_route(&mut route, current, problem)?;
            debug!(route = %route, "grasp opened route");
            solution.push_cv_route(route);
        }

        Ok(solution)
    }

    fn name(&self) -> String {
        format!(
            "GRASP CV Generator (alpha={}, rcl_size={})",
            self.alpha, self.rcl_size
        )
    }
}

// private methods
impl GraspCvGenerator {
    /// Uniform sample from the restricted candidate list of an ascending
    /// candidate slice. None on an empty slice.
    fn sample_from_rcl(&mut self, candidates: &[(LocationId, f64)]) -> Option<LocationId> {
        let (_, min_distance) = candidates.first()?;
        let (_, max_distance) = candidates.last()?;
        let threshold = min_distance + self.alpha * (max_distance - min_distance);

        let rcl: Vec<LocationId> = candidates
            .iter()
            .filter(|(_, distance)| *distance <= threshold)
            .take(self.rcl_size)
            .map(|(id, _)| *id)
            .collect();

        Some(rcl[self.rng.gen_range(0..rcl.len())])
    }
}

fn admissible_sorted_by_distance(
    route: &CvRoute,
    current: LocationId,
    candidates: impl Iterator<Item = LocationId>,
    problem: &VrptProblem,
) -> Result<Vec<(LocationId, f64)>, SolverError> {
    let mut result = Vec::new();
    for candidate in candidates {
        if !route.can_visit(candidate, problem) {
            continue;
        }
        let distance = problem.distance(current, candidate)?.in_meters();
        result.push((candidate, distance));
    }
    Ok(result
        .into_iter()
        .sorted_by(|(_, a), (_, b)| a.total_cmp(b))
        .collect())
}
