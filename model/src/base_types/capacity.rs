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
use std::ops::{Add, Sub};

use serde::Serialize;

use crate::errors::ModelError;

/// An amount of waste in abstract load units. Never negative.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Serialize)]
pub struct Capacity(f64);

// static functions:
impl Capacity {
    pub const ZERO: Capacity = Capacity(0.0);

    pub fn new(value: f64) -> Result<Capacity, ModelError> {
        if value < 0.0 {
            return Err(ModelError::InvalidArgument(format!(
                "capacity cannot be negative: {}",
                value
            )));
        }
        Ok(Capacity(value))
    }
}

// methods:
impl Capacity {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns max{self-other, 0}
    pub fn sub_max_zero(self, other: Capacity) -> Capacity {
        if self.0 < other.0 {
            Capacity::ZERO
        } else {
            Capacity(self.0 - other.0)
        }
    }
}

impl Add for Capacity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Capacity(self.0 + other.0)
    }
}

impl Sub for Capacity {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        assert!(
            self.0 >= other.0,
            "Cannot subtract {} from {}",
            other,
            self
        );
        Capacity(self.0 - other.0)
    }
}

impl Sum<Self> for Capacity {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Capacity::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Capacity;

    #[test]
    fn negative_capacity_is_rejected() {
        assert!(Capacity::new(-0.5).is_err());
        assert!(Capacity::new(0.0).is_ok());
        assert!(Capacity::new(17.3).is_ok());
    }

    #[test]
    fn arithmetic_and_ordering() {
        let six = Capacity::new(6.0).unwrap();
        let ten = Capacity::new(10.0).unwrap();

        assert_eq!((six + six).value(), 12.0);
        assert_eq!((ten - six).value(), 4.0);
        assert!(six < ten);
        assert!(six <= six);
        assert_eq!(six.sub_max_zero(ten), Capacity::ZERO);
        assert_eq!(ten.sub_max_zero(six).value(), 4.0);
    }

    #[test]
    #[should_panic]
    fn subtraction_below_zero_panics() {
        let _ = Capacity::new(1.0).unwrap() - Capacity::new(2.0).unwrap();
    }
}
