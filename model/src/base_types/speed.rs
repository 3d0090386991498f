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

use crate::base_types::{Distance, DistanceUnit, Duration, TimeUnit};
use crate::errors::ModelError;

/// A distance-per-time pair, used to turn a distance into a travel
/// duration. Must be strictly positive.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct Speed {
    meters_per_second: f64,
}

// static functions:
impl Speed {
    pub fn new(
        value: f64,
        distance_unit: DistanceUnit,
        time_unit: TimeUnit,
    ) -> Result<Speed, ModelError> {
        if value <= 0.0 {
            return Err(ModelError::InvalidArgument(format!(
                "speed must be positive: {}{}/{}",
                value, distance_unit, time_unit
            )));
        }
        let meters = Distance::new(value, distance_unit)?.in_meters();
        let seconds = Duration::new(1.0, time_unit)?.in_seconds();
        Ok(Speed {
            meters_per_second: meters / seconds,
        })
    }

    pub fn from_km_per_hour(value: f64) -> Result<Speed, ModelError> {
        Speed::new(value, DistanceUnit::Kilometers, TimeUnit::Hours)
    }
}

// methods:
impl Speed {
    pub fn in_meters_per_second(&self) -> f64 {
        self.meters_per_second
    }

    /// The time it takes to cover `distance` at this speed.
    pub fn travel_duration(&self, distance: Distance) -> Duration {
        let seconds = distance.in_meters() / self.meters_per_second;
        Duration::from_nanos((seconds * 1e9) as i64)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}km/h", self.meters_per_second * 3.6)
    }
}

#[cfg(test)]
mod tests {
    use super::Speed;
    use crate::base_types::{Distance, DistanceUnit, Duration};

    #[test]
    fn non_positive_speed_is_rejected() {
        assert!(Speed::from_km_per_hour(0.0).is_err());
        assert!(Speed::from_km_per_hour(-30.0).is_err());
    }

    #[test]
    fn travel_duration_divides_distance_by_speed() {
        let speed = Speed::from_km_per_hour(50.0).unwrap();
        let distance = Distance::new(25.0, DistanceUnit::Kilometers).unwrap();
        let half_hour = Duration::from_minutes(30.0).unwrap();
        let travel = speed.travel_duration(distance);
        assert!((travel.in_seconds() - half_hour.in_seconds()).abs() < 1e-6);
        assert_eq!(speed.travel_duration(Distance::ZERO), Duration::ZERO);
    }
}
