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

use derive_more::Display;

use crate::base_types::{Capacity, Duration, LocationId};

/// The role a location plays in the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LocationType {
    Depot,
    #[display(fmt = "Collection Zone")]
    CollectionZone,
    #[display(fmt = "SWTS")]
    Swts,
    Landfill,
}

/// A point on the map. Immutable after construction.
/// Service time and waste amount are only non-zero for collection zones.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: LocationId,
    x: f64,
    y: f64,
    location_type: LocationType,
    name: String,
    service_time: Duration,
    waste_amount: Capacity,
}

// static functions
impl Location {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: LocationId,
        x: f64,
        y: f64,
        location_type: LocationType,
        name: String,
        service_time: Duration,
        waste_amount: Capacity,
    ) -> Location {
        Location {
            id,
            x,
            y,
            location_type,
            name,
            service_time,
            waste_amount,
        }
    }

    /// A location without service time or waste (depot, SWTS, landfill).
    pub fn new_plain(
        id: LocationId,
        x: f64,
        y: f64,
        location_type: LocationType,
        name: String,
    ) -> Location {
        Location::new(
            id,
            x,
            y,
            location_type,
            name,
            Duration::ZERO,
            Capacity::ZERO,
        )
    }
}

// methods
impl Location {
    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// The coordinate on the given K-D tree axis (0 = x, 1 = y).
    pub fn coordinate(&self, axis: usize) -> f64 {
        if axis % 2 == 0 {
            self.x
        } else {
            self.y
        }
    }

    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn service_time(&self) -> Duration {
        self.service_time
    }

    pub fn waste_amount(&self) -> Capacity {
        self.waste_amount
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
