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


use std::fmt;

use model::base_types::{Capacity, Duration, LocationId};
use model::errors::ModelError;
use model::location::LocationType;
use model::problem::VrptProblem;

use crate::delivery::DeliveryTask;

/// The route of a single collection vehicle. The following holds at all
/// times:
///
/// The route implicitly starts at the depot; `sequence` contains only the
/// visited non-depot location ids. A collection zone adds its waste and
/// its service time, a transfer station with positive load records a
/// DeliveryTask and resets the load to zero. `load_profile` and
/// `time_profile` have length |sequence|+1 and give load and elapsed time
/// after every step, starting at (0, 0).
///
/// A finished route is closed with `return_to_depot`, which charges the
/// travel back home into `total_duration` without appending a sequence
/// step; `ends_at_depot` reports the closure.
///
/// Appending never re-validates feasibility; callers gate every append
/// with `can_visit` and audit with `is_valid`.
#[derive(Clone)]
pub struct CvRoute {
    sequence: Vec<LocationId>,
    vehicle_id: String,
    max_capacity: Capacity,
    max_duration: Duration,
    current_load: Capacity,
    total_duration: Duration,
    ended_at_depot: bool,
    load_profile: Vec<Capacity>,
    time_profile: Vec<Duration>,
    deliveries: Vec<DeliveryTask>,
}

// static functions
impl CvRoute {
    pub fn new(vehicle_id: String, max_capacity: Capacity, max_duration: Duration) -> CvRoute {
        CvRoute {
            sequence: Vec::new(),
            vehicle_id,
            max_capacity,
            max_duration,
            current_load: Capacity::ZERO,
            total_duration: Duration::ZERO,
            ended_at_depot: false,
            load_profile: vec![Capacity::ZERO],
            time_profile: vec![Duration::ZERO],
            deliveries: Vec::new(),
        }
    }
}

// basic public methods
impl CvRoute {
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn sequence(&self) -> &[LocationId] {
        &self.sequence
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn max_capacity(&self) -> Capacity {
        self.max_capacity
    }

    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    pub fn current_load(&self) -> Capacity {
        self.current_load
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    pub fn load_profile(&self) -> &[Capacity] {
        &self.load_profile
    }

    pub fn time_profile(&self) -> &[Duration] {
        &self.time_profile
    }

    pub fn deliveries(&self) -> &[DeliveryTask] {
        &self.deliveries
    }

    pub fn last_location_id(&self) -> Option<LocationId> {
        self.sequence.last().copied()
    }

    /// true once the route has returned to the depot
    pub fn ends_at_depot(&self) -> bool {
        self.ended_at_depot
    }

    /// How much more waste fits on board.
    pub fn residual_capacity(&self) -> Capacity {
        self.max_capacity.sub_max_zero(self.current_load)
    }

    /// How much route time is left.
    pub fn residual_duration(&self) -> Duration {
        self.max_duration.sub_max_zero(self.total_duration)
    }
}

// modification methods
impl CvRoute {
    /// Conservative admissibility check: appending `location_id` must keep
    /// the capacity invariant and leave enough time to still return to the
    /// depot, via the nearest transfer station if the new location is not
    /// itself one (an open load has to be dropped off before going home).
    pub fn can_visit(&self, location_id: LocationId, problem: &VrptProblem) -> bool {
        let location = match problem.location(location_id) {
            Ok(location) => location,
            Err(_) => return false,
        };

        if location.location_type() == LocationType::CollectionZone
            && self.current_load + location.waste_amount() > self.max_capacity
        {
            return false;
        }

        let previous = self
            .last_location_id()
            .unwrap_or_else(|| problem.depot().id());
        let travel_time = match problem.travel_time(previous, location_id) {
            Ok(travel_time) => travel_time,
            Err(_) => return false,
        };

        let mut total_time = self.total_duration + travel_time;
        if location.location_type() == LocationType::CollectionZone {
            total_time = total_time + location.service_time();
        }

        let depot_id = problem.depot().id();
        let return_time = if location.location_type() == LocationType::Swts {
            match problem.travel_time(location_id, depot_id) {
                Ok(travel_time) => travel_time,
                Err(_) => return false,
            }
        } else {
            match problem.nearest(location, LocationType::Swts) {
                Some(swts) => {
                    let to_swts = match problem.travel_time(location_id, swts.id()) {
                        Ok(travel_time) => travel_time,
                        Err(_) => return false,
                    };
                    let to_depot = match problem.travel_time(swts.id(), depot_id) {
                        Ok(travel_time) => travel_time,
                        Err(_) => return false,
                    };
                    to_swts + to_depot
                }
                None => match problem.travel_time(location_id, depot_id) {
                    Ok(travel_time) => travel_time,
                    Err(_) => return false,
                },
            }
        };

        total_time + return_time <= self.max_duration
    }

    /// Appends a location, updating load, duration and the profiles. A
    /// transfer station visited with positive load records a DeliveryTask
    /// and resets the load. Feasibility is not re-checked here.
    pub fn add_location(
        &mut self,
        location_id: LocationId,
        problem: &VrptProblem,
    ) -> Result<(), ModelError> {
        debug_assert!(
            !self.ended_at_depot,
            "cannot extend a route that returned to the depot"
        );
        let location = problem.location(location_id)?;
        let previous = self
            .last_location_id()
            .unwrap_or_else(|| problem.depot().id());
        let travel_time = problem.travel_time(previous, location_id)?;

        self.total_duration = self.total_duration + travel_time;

        match location.location_type() {
            LocationType::CollectionZone => {
                self.current_load = self.current_load + location.waste_amount();
                self.total_duration = self.total_duration + location.service_time();
            }
            LocationType::Swts => {
                if self.current_load > Capacity::ZERO {
                    self.deliveries.push(DeliveryTask::new(
                        self.current_load,
                        location_id,
                        self.total_duration,
                    ));
                    self.current_load = Capacity::ZERO;
                }
            }
            _ => {}
        }

        self.sequence.push(location_id);
        self.load_profile.push(self.current_load);
        self.time_profile.push(self.total_duration);
        Ok(())
    }

    /// Closes the route: charges the travel leg back to the depot into the
    /// total duration. The depot is not a sequence step, so the profiles
    /// stay untouched. Closing an empty or already closed route changes
    /// nothing.
    pub fn return_to_depot(&mut self, problem: &VrptProblem) -> Result<(), ModelError> {
        if self.ended_at_depot {
            return Ok(());
        }
        if let Some(last) = self.last_location_id() {
            let travel_time = problem.travel_time(last, problem.depot().id())?;
            self.total_duration = self.total_duration + travel_time;
        }
        self.ended_at_depot = true;
        Ok(())
    }

    /// Full re-audit of the profiles. An empty route is valid.
    pub fn is_valid(&self, problem: &VrptProblem) -> bool {
        if self.sequence.is_empty() {
            return true;
        }

        if self.load_profile.iter().any(|load| *load > self.max_capacity) {
            return false;
        }

        self.total_duration <= self.max_duration + problem.epsilon()
    }
}

impl fmt::Display for CvRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: depot", self.vehicle_id)?;
        for location_id in self.sequence.iter() {
            write!(f, " - {}", location_id)?;
        }
        if self.ended_at_depot {
            write!(f, " - depot")?;
        }
        write!(
            f,
            " (duration: {}, deliveries: {})",
            self.total_duration,
            self.deliveries.len()
        )
    }
}
