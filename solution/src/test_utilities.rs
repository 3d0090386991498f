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

use model::base_types::{Capacity, Duration, DistanceUnit, LocationId, Speed, TimeUnit};
use model::location::{Location, LocationType};
use model::problem::{ProblemParameters, VrptProblem};

/// A line instance at 1 m/s, so travel seconds equal distance meters:
///
/// depot(0,0) - zone_1(1,0) - zone_2(2,0) - zone_3(3,0) - swts_1(5,0) -
/// landfill(10,0), plus swts_2 off the line at (0,5).
pub(crate) struct TestData {
    pub(crate) problem: Arc<VrptProblem>,
    pub(crate) zone_1: LocationId,
    pub(crate) zone_2: LocationId,
    pub(crate) zone_3: LocationId,
    pub(crate) swts_1: LocationId,
    pub(crate) swts_2: LocationId,
    pub(crate) landfill: LocationId,
}

pub(crate) fn init_test_data() -> TestData {
    init_test_data_with_limits(10.0, 10_000.0, 10_000.0)
}

pub(crate) fn init_test_data_with_limits(
    cv_capacity: f64,
    cv_max_seconds: f64,
    tv_max_seconds: f64,
) -> TestData {
    let zone = |id: &str, x: f64, waste: f64, service_seconds: f64| {
        Location::new(
            LocationId::from(id),
            x,
            0.0,
            LocationType::CollectionZone,
            id.to_string(),
            Duration::from_seconds(service_seconds).unwrap(),
            Capacity::new(waste).unwrap(),
        )
    };

    let locations = vec![
        Location::new_plain(
            LocationId::from("depot"),
            0.0,
            0.0,
            LocationType::Depot,
            "Depot".to_string(),
        ),
        zone("zone_1", 1.0, 3.0, 0.0),
        zone("zone_2", 2.0, 6.0, 60.0),
        zone("zone_3", 3.0, 4.0, 0.0),
        Location::new_plain(
            LocationId::from("swts_1"),
            5.0,
            0.0,
            LocationType::Swts,
            "SWTS 1".to_string(),
        ),
        Location::new_plain(
            LocationId::from("swts_2"),
            0.0,
            5.0,
            LocationType::Swts,
            "SWTS 2".to_string(),
        ),
        Location::new_plain(
            LocationId::from("landfill"),
            10.0,
            0.0,
            LocationType::Landfill,
            "Landfill".to_string(),
        ),
    ];

    let parameters = ProblemParameters {
        cv_capacity: Capacity::new(cv_capacity).unwrap(),
        tv_capacity: Capacity::new(20.0).unwrap(),
        cv_max_duration: Duration::from_seconds(cv_max_seconds).unwrap(),
        tv_max_duration: Duration::from_seconds(tv_max_seconds).unwrap(),
        cv_fleet_size: 5,
        vehicle_speed: Speed::new(1.0, DistanceUnit::Meters, TimeUnit::Seconds).unwrap(),
        epsilon: Duration::from_seconds(0.5).unwrap(),
    };

    TestData {
        problem: Arc::new(
            VrptProblem::new("test-line".to_string(), locations, parameters).unwrap(),
        ),
        zone_1: LocationId::from("zone_1"),
        zone_2: LocationId::from("zone_2"),
        zone_3: LocationId::from("zone_3"),
        swts_1: LocationId::from("swts_1"),
        swts_2: LocationId::from("swts_2"),
        landfill: LocationId::from("landfill"),
    }
}
