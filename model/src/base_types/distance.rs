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
use std::iter::Sum;
use std::ops::Add;

use derive_more::Display;
use serde::{Serialize, Serializer};

use crate::errors::ModelError;

const KILOMETERS_TO_METERS: f64 = 1000.0;
const MILES_TO_METERS: f64 = 1609.34;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DistanceUnit {
    #[display(fmt = "m")]
    Meters,
    #[display(fmt = "km")]
    Kilometers,
    #[display(fmt = "mi")]
    Miles,
}

/// A length, stored internally in meters. Never negative.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct Distance {
    meters: f64,
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.meters)
    }
}

// static functions:
impl Distance {
    pub const ZERO: Distance = Distance { meters: 0.0 };

    pub fn new(value: f64, unit: DistanceUnit) -> Result<Distance, ModelError> {
        let meters = match unit {
            DistanceUnit::Meters => value,
            DistanceUnit::Kilometers => value * KILOMETERS_TO_METERS,
            DistanceUnit::Miles => value * MILES_TO_METERS,
        };
        if meters < 0.0 {
            return Err(ModelError::InvalidArgument(format!(
                "distance cannot be negative: {}{}",
                value, unit
            )));
        }
        Ok(Distance { meters })
    }

    /// Internal shortcut for geometry whose result is non-negative by
    /// construction.
    pub(crate) fn from_meters(meters: f64) -> Distance {
        debug_assert!(meters >= 0.0, "negative distance: {}m", meters);
        Distance { meters }
    }
}

// methods:
impl Distance {
    pub fn in_meters(&self) -> f64 {
        self.meters
    }

    pub fn in_kilometers(&self) -> f64 {
        self.meters / KILOMETERS_TO_METERS
    }

    pub fn in_miles(&self) -> f64 {
        self.meters / MILES_TO_METERS
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance {
            meters: self.meters + other.meters,
        }
    }
}

impl Sum<Self> for Distance {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Distance::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.3}km", self.in_kilometers())
    }
}
