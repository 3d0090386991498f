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

use model::base_types::{Capacity, LocationId};
use model::location::LocationType;
use model::problem::VrptProblem;
use solution::{CvRoute, VrptSolution};
use tracing::debug;

use crate::errors::SolverError;

use super::SolutionGenerator;

/// Pure nearest-neighbor construction: grow the route with the closest
/// admissible zone, detour via the nearest transfer station when the
/// vehicle is full, open a new vehicle when neither works.
#[derive(Default)]
pub struct GreedyCvGenerator;

impl GreedyCvGenerator {
    pub fn new() -> GreedyCvGenerator {
        GreedyCvGenerator
    }
}

impl SolutionGenerator for GreedyCvGenerator {
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
                match closest_admissible_zone(&route, current, &unassigned, problem)? {
                    Some(zone_id) => {
                        route.add_location(zone_id, problem)?;
                        current = zone_id;
                        unassigned.retain(|id| *id != zone_id);
                    }
                    None => {
                        // a full vehicle may free capacity at a transfer
                        // station and then keep collecting
                        if route.current_load() > Capacity::ZERO {
                            let current_location = problem.location(current)?;
                            if let Some(swts) =
                                problem.nearest(current_location, LocationType::Swts)
                            {
                                let swts_id = swts.id();
                                if route.can_visit(swts_id, problem) {
                                    route.add_location(swts_id, problem)?;
                                    current = swts_id;
                                    continue;
                                }
                            }
                        }
                        break;
                    }
                }
            }

            if route.is_empty() {
                // a fresh vehicle cannot reach any remaining zone
                return Err(SolverError::Infeasible(format!(
                    "no vehicle can serve the remaining {} zones",
                    unassigned.len()
                )));
            }

            close_route(&mut route, current, problem)?;
            debug!(route = %route, "greedy opened route");
            solution.push_cv_route(route);
        }

        Ok(solution)
    }

    fn name(&self) -> String {
        String::from("Greedy CV Generator")
    }
}

fn closest_admissible_zone(
    route: &CvRoute,
    current: LocationId,
    unassigned: &[LocationId],
    problem: &VrptProblem,
) -> Result<Option<LocationId>, SolverError> {
    let mut closest: Option<(LocationId, f64)> = None;
    for zone_id in unassigned.iter() {
        if !route.can_visit(*zone_id, problem) {
            continue;
        }
        let distance = problem.distance(current, *zone_id)?.in_meters();
        if closest.map(|(_, best)| distance < best).unwrap_or(true) {
            closest = Some((*zone_id, distance));
        }
    }
    Ok(closest.map(|(zone_id, _)| zone_id))
}

/// Unload at the nearest transfer station if the vehicle still carries
/// waste, then return to the depot.
pub(super) fn close_route(
    route: &mut CvRoute,
    current: LocationId,
    problem: &VrptProblem,
) -> Result<(), SolverError> {
    if route.current_load() > Capacity::ZERO {
        let current_location = problem.location(current)?;
        if let Some(swts) = problem.nearest(current_location, LocationType::Swts) {
            route.add_location(swts.id(), problem)?;
        }
    }
    route.return_to_depot(problem)?;
    Ok(())
}
