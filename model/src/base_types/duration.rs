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
use std::ops::{Add, Mul, Sub};

use derive_more::Display;
use serde::{Serialize, Serializer};

use crate::errors::ModelError;

const SECONDS_TO_NS: f64 = 1e9;
const MINUTES_TO_NS: f64 = 6e10;
const HOURS_TO_NS: f64 = 3.6e12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TimeUnit {
    #[display(fmt = "ns")]
    Nanoseconds,
    #[display(fmt = "s")]
    Seconds,
    #[display(fmt = "min")]
    Minutes,
    #[display(fmt = "h")]
    Hours,
}

/// A span of time, stored exactly once as signed 64-bit nanoseconds.
/// Never negative; all feasibility comparisons against maxima use the
/// instance epsilon to absorb the float drift of speed/distance division.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Duration {
    nanoseconds: i64,
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.nanoseconds)
    }
}

// static functions:
impl Duration {
    pub const ZERO: Duration = Duration { nanoseconds: 0 };

    pub fn new(value: f64, unit: TimeUnit) -> Result<Duration, ModelError> {
        let nanoseconds = match unit {
            TimeUnit::Nanoseconds => value,
            TimeUnit::Seconds => value * SECONDS_TO_NS,
            TimeUnit::Minutes => value * MINUTES_TO_NS,
            TimeUnit::Hours => value * HOURS_TO_NS,
        } as i64;
        if nanoseconds < 0 {
            return Err(ModelError::InvalidArgument(format!(
                "duration cannot be negative: {}{}",
                value, unit
            )));
        }
        Ok(Duration { nanoseconds })
    }

    pub fn from_seconds(seconds: f64) -> Result<Duration, ModelError> {
        Duration::new(seconds, TimeUnit::Seconds)
    }

    pub fn from_minutes(minutes: f64) -> Result<Duration, ModelError> {
        Duration::new(minutes, TimeUnit::Minutes)
    }

    pub fn from_hours(hours: f64) -> Result<Duration, ModelError> {
        Duration::new(hours, TimeUnit::Hours)
    }

    /// Internal shortcut for arithmetic whose result is non-negative by
    /// construction.
    pub(crate) fn from_nanos(nanoseconds: i64) -> Duration {
        debug_assert!(nanoseconds >= 0, "negative duration: {}ns", nanoseconds);
        Duration { nanoseconds }
    }
}

// methods:
impl Duration {
    pub fn in_nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    pub fn in_seconds(&self) -> f64 {
        self.nanoseconds as f64 / SECONDS_TO_NS
    }

    pub fn in_minutes(&self) -> f64 {
        self.nanoseconds as f64 / MINUTES_TO_NS
    }

    pub fn in_hours(&self) -> f64 {
        self.nanoseconds as f64 / HOURS_TO_NS
    }

    /// Returns max{self-other, 0}
    pub fn sub_max_zero(self, other: Duration) -> Duration {
        if self.nanoseconds < other.nanoseconds {
            Duration::ZERO
        } else {
            Duration {
                nanoseconds: self.nanoseconds - other.nanoseconds,
            }
        }
    }

    pub fn checked_sub(self, other: Duration) -> Option<Duration> {
        if self.nanoseconds < other.nanoseconds {
            None
        } else {
            Some(Duration {
                nanoseconds: self.nanoseconds - other.nanoseconds,
            })
        }
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Duration {
            nanoseconds: self.nanoseconds + other.nanoseconds,
        }
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        assert!(
            self >= other,
            "Cannot subtract a longer duration ({}) from a shorter duration ({}).",
            other,
            self
        );
        Duration {
            nanoseconds: self.nanoseconds - other.nanoseconds,
        }
    }
}

impl Mul<f64> for Duration {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Duration::from_nanos((self.nanoseconds as f64 * factor) as i64)
    }
}

impl Sum for Duration {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Duration::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let total_seconds = self.nanoseconds / SECONDS_TO_NS as i64;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        if seconds > 0 {
            write!(f, "{:02}:{:02}:{:02}h", hours, minutes, seconds)
        } else {
            write!(f, "{:02}:{:02}h", hours, minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Duration, TimeUnit};

    #[test]
    fn negative_duration_is_rejected() {
        assert!(Duration::new(-1.0, TimeUnit::Seconds).is_err());
        assert!(Duration::new(0.0, TimeUnit::Seconds).is_ok());
    }

    #[test]
    fn unit_conversions_are_closed_form() {
        let d = Duration::new(90.0, TimeUnit::Minutes).unwrap();
        assert_eq!(d.in_nanoseconds(), 5_400_000_000_000);
        assert_eq!(d.in_seconds(), 5400.0);
        assert_eq!(d.in_minutes(), 90.0);
        assert_eq!(d.in_hours(), 1.5);

        assert_eq!(Duration::from_hours(2.0).unwrap().in_minutes(), 120.0);
        assert_eq!(
            Duration::new(2.5e9, TimeUnit::Nanoseconds).unwrap(),
            Duration::from_seconds(2.5).unwrap()
        );
    }

    #[test]
    fn arithmetic_and_ordering() {
        let ten = Duration::from_minutes(10.0).unwrap();
        let three = Duration::from_minutes(3.0).unwrap();

        assert_eq!(ten + three, Duration::from_minutes(13.0).unwrap());
        assert_eq!(ten - three, Duration::from_minutes(7.0).unwrap());
        assert!(three < ten);
        assert_eq!(three.checked_sub(ten), None);
        assert_eq!(three.sub_max_zero(ten), Duration::ZERO);
        assert_eq!(ten * 0.8, Duration::from_minutes(8.0).unwrap());
    }

    #[test]
    fn display_is_hours_minutes_seconds() {
        assert_eq!(
            format!("{}", Duration::from_seconds(3725.0).unwrap()),
            "01:02:05h"
        );
        assert_eq!(format!("{}", Duration::from_minutes(62.0).unwrap()), "01:02h");
    }
}
