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

/// The event "a collection vehicle unloaded `amount` at transfer station
/// `swts_id` at time `arrival_time`". Produced by Phase 1, consumed by the
/// Phase-2 scheduler; also reused to record the pickups of a
/// transportation vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryTask {
    amount: Capacity,
    swts_id: LocationId,
    arrival_time: Duration,
}

// static functions
impl DeliveryTask {
    pub fn new(amount: Capacity, swts_id: LocationId, arrival_time: Duration) -> DeliveryTask {
        DeliveryTask {
            amount,
            swts_id,
            arrival_time,
        }
    }
}

// methods
impl DeliveryTask {
    pub fn amount(&self) -> Capacity {
        self.amount
    }

    pub fn swts_id(&self) -> LocationId {
        self.swts_id
    }

    pub fn arrival_time(&self) -> Duration {
        self.arrival_time
    }
}

impl fmt::Display for DeliveryTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} ({})",
            self.amount, self.swts_id, self.arrival_time
        )
    }
}
