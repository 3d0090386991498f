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
use model::problem::VrptProblem;

use crate::delivery::DeliveryTask;

/// The route of a single transportation vehicle. It implicitly starts at
/// the landfill; arriving at the landfill empties the vehicle. Pickups
/// wait for the delivering collection vehicle free of charge: the clock
/// advances to max(arrival by travel, task time).
///
/// `load_profile` and `time_profile` have length |sequence|+1, starting at
/// (0, 0). A closed route ends at the landfill (see `finalize`).
#[derive(Clone)]
pub struct TvRoute {
    sequence: Vec<LocationId>,
    vehicle_id: String,
    max_capacity: Capacity,
    max_duration: Duration,
    current_load: Capacity,
    current_time: Duration,
    load_profile: Vec<Capacity>,
    time_profile: Vec<Duration>,
    pickups: Vec<DeliveryTask>,
}

// static functions
impl TvRoute {
    pub fn new(vehicle_id: String, max_capacity: Capacity, max_duration: Duration) -> TvRoute {
        TvRoute {
            sequence: Vec::new(),
            vehicle_id,
            max_capacity,
            max_duration,
            current_load: Capacity::ZERO,
            current_time: Duration::ZERO,
            load_profile: vec![Capacity::ZERO],
            time_profile: vec![Duration::ZERO],
            pickups: Vec::new(),
        }
    }
}

// basic public methods
impl TvRoute {
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

    pub fn current_load(&self) -> Capacity {
        self.current_load
    }

    pub fn current_time(&self) -> Duration {
        self.current_time
    }

    pub fn load_profile(&self) -> &[Capacity] {
        &self.load_profile
    }

    pub fn time_profile(&self) -> &[Duration] {
        &self.time_profile
    }

    pub fn pickups(&self) -> &[DeliveryTask] {
        &self.pickups
    }

    pub fn last_location_id(&self) -> Option<LocationId> {
        self.sequence.last().copied()
    }

    pub fn residual_capacity(&self) -> Capacity {
        self.max_capacity.sub_max_zero(self.current_load)
    }

    pub fn residual_duration(&self) -> Duration {
        self.max_duration.sub_max_zero(self.current_time)
    }
}

// modification methods
impl TvRoute {
    /// Admissibility check: after traveling to `location_id` there must be
    /// enough time left to reach the landfill, within epsilon slack.
    pub fn can_visit(&self, location_id: LocationId, problem: &VrptProblem) -> bool {
        let previous = self
            .last_location_id()
            .unwrap_or_else(|| problem.landfill().id());
        let travel_time = match problem.travel_time(previous, location_id) {
            Ok(travel_time) => travel_time,
            Err(_) => return false,
        };

        let landfill_id = problem.landfill().id();
        let return_time = if location_id == landfill_id {
            Duration::ZERO
        } else {
            match problem.travel_time(location_id, landfill_id) {
                Ok(travel_time) => travel_time,
                Err(_) => return false,
            }
        };

        self.current_time + travel_time + return_time <= self.max_duration + problem.epsilon()
    }

    /// Appends a plain (non-pickup) step. Arriving at the landfill resets
    /// the load. A step that would overrun the duration limit is rejected
    /// and leaves the route untouched; legs into the landfill are always
    /// allowed (the final audit still checks the arrival time).
    pub fn add_location(
        &mut self,
        location_id: LocationId,
        problem: &VrptProblem,
    ) -> Result<bool, ModelError> {
        problem.location(location_id)?;
        let previous = self
            .last_location_id()
            .unwrap_or_else(|| problem.landfill().id());
        let travel_time = problem.travel_time(previous, location_id)?;

        let new_time = self.current_time + travel_time;
        let landfill_id = problem.landfill().id();

        if location_id != landfill_id && new_time > self.max_duration + problem.epsilon() {
            return Ok(false);
        }

        self.current_time = new_time;
        if location_id == landfill_id {
            self.current_load = Capacity::ZERO;
        }

        self.sequence.push(location_id);
        self.load_profile.push(self.current_load);
        self.time_profile.push(self.current_time);
        Ok(true)
    }

    /// Travels to `swts_id` and picks up `amount` that was delivered there
    /// at `task_arrival_time`. Waiting for the delivery is free: the clock
    /// advances to max(current + travel, task arrival). Rejects the pickup
    /// (leaving the route untouched) if it would overload the vehicle or
    /// overrun the duration limit beyond epsilon.
    pub fn add_pickup(
        &mut self,
        swts_id: LocationId,
        task_arrival_time: Duration,
        amount: Capacity,
        problem: &VrptProblem,
    ) -> Result<bool, ModelError> {
        problem.location(swts_id)?;
        let previous = self
            .last_location_id()
            .unwrap_or_else(|| problem.landfill().id());
        let travel_time = problem.travel_time(previous, swts_id)?;

        let arrival = (self.current_time + travel_time).max(task_arrival_time);

        if self.current_load + amount > self.max_capacity {
            return Ok(false);
        }
        if arrival > self.max_duration + problem.epsilon() {
            return Ok(false);
        }

        self.current_time = arrival;
        self.current_load = self.current_load + amount;
        self.sequence.push(swts_id);
        self.pickups
            .push(DeliveryTask::new(amount, swts_id, arrival));
        self.load_profile.push(self.current_load);
        self.time_profile.push(self.current_time);
        Ok(true)
    }

    /// Closes the route by returning to the landfill if it is not already
    /// there. An empty route stays empty.
    pub fn finalize(&mut self, problem: &VrptProblem) -> Result<bool, ModelError> {
        let landfill_id = problem.landfill().id();
        match self.last_location_id() {
            None => Ok(true),
            Some(last) if last == landfill_id => Ok(true),
            Some(_) => self.add_location(landfill_id, problem),
        }
    }

    /// Full re-audit: loads within capacity, arrival within the limit plus
    /// epsilon, and a non-empty route must end at the landfill.
    pub fn is_valid(&self, problem: &VrptProblem) -> bool {
        if self.sequence.is_empty() {
            return true;
        }

        if self.load_profile.iter().any(|load| *load > self.max_capacity) {
            return false;
        }

        if self.current_time > self.max_duration + problem.epsilon() {
            return false;
        }

        self.last_location_id() == Some(problem.landfill().id())
    }
}

impl fmt::Display for TvRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: landfill", self.vehicle_id)?;
        for location_id in self.sequence.iter() {
            write!(f, " - {}", location_id)?;
        }
        write!(
            f,
            " (finished: {}, pickups: {})",
            self.current_time,
            self.pickups.len()
        )
    }
}
