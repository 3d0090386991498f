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

use model::base_types::VehicleCount;
use model::problem::VrptProblem;
use objective_framework::{BaseValue, Coefficient, Indicator, Level, Objective};
use solution::VrptSolution;

/// Number of CV routes beyond the allowed fleet size. A plan over the cap
/// is worse than any plan within it, whatever the rest looks like.
struct FleetExcessIndicator {
    fleet_size: VehicleCount,
}

impl Indicator<VrptSolution> for FleetExcessIndicator {
    fn evaluate(&self, solution: &VrptSolution) -> BaseValue {
        let excess = solution.cv_count() as i64 - self.fleet_size as i64;
        BaseValue::Integer(excess.max(0))
    }

    fn name(&self) -> String {
        String::from("fleetExcess")
    }
}

struct CvRouteCountIndicator;

impl Indicator<VrptSolution> for CvRouteCountIndicator {
    fn evaluate(&self, solution: &VrptSolution) -> BaseValue {
        BaseValue::Integer(solution.cv_count() as i64)
    }

    fn name(&self) -> String {
        String::from("cvRouteCount")
    }
}

/// Zones of the instance that no route covers. Minimizing this is the
/// "more zones visited is better" tie-break; it lets the search pass
/// through states that temporarily drop a hard-to-place zone.
struct UnservedZonesIndicator {
    problem: Arc<VrptProblem>,
}

impl Indicator<VrptSolution> for UnservedZonesIndicator {
    fn evaluate(&self, solution: &VrptSolution) -> BaseValue {
        let unserved = self.problem.number_of_zones() - solution.visited_zones(&self.problem);
        BaseValue::Integer(unserved as i64)
    }

    fn name(&self) -> String {
        String::from("unservedZones")
    }
}

struct TotalCvDurationIndicator;

impl Indicator<VrptSolution> for TotalCvDurationIndicator {
    fn evaluate(&self, solution: &VrptSolution) -> BaseValue {
        BaseValue::Duration(solution.total_cv_duration())
    }

    fn name(&self) -> String {
        String::from("totalCvDuration")
    }
}

/// The lexicographic objective of Phase 1: first stay within the fleet
/// cap, then use as few vehicles as possible, then cover as many zones as
/// possible, then be quick about it.
pub fn build(problem: Arc<VrptProblem>) -> Objective<VrptSolution> {
    let fleet_excess: Level<VrptSolution> = Level::new(vec![(
        Coefficient::Integer(1),
        Box::new(FleetExcessIndicator {
            fleet_size: problem.cv_fleet_size(),
        }),
    )]);
    let route_count: Level<VrptSolution> = Level::new(vec![(
        Coefficient::Integer(1),
        Box::new(CvRouteCountIndicator),
    )]);
    let unserved_zones: Level<VrptSolution> = Level::new(vec![(
        Coefficient::Integer(1),
        Box::new(UnservedZonesIndicator { problem }),
    )]);
    let total_duration: Level<VrptSolution> = Level::new(vec![(
        Coefficient::Integer(1),
        Box::new(TotalCvDurationIndicator),
    )]);

    Objective::new(vec![
        fleet_excess,
        route_count,
        unserved_zones,
        total_duration,
    ])
}
