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

use model::base_types::{Capacity, DistanceUnit, Duration, LocationId, Speed, TimeUnit};
use model::location::{Location, LocationType};
use model::problem::{ProblemParameters, VrptProblem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub(crate) fn plain(id: &str, x: f64, y: f64, location_type: LocationType) -> Location {
    Location::new_plain(LocationId::from(id), x, y, location_type, id.to_string())
}

pub(crate) fn zone(id: &str, x: f64, y: f64, waste: f64, service_seconds: f64) -> Location {
    Location::new(
        LocationId::from(id),
        x,
        y,
        LocationType::CollectionZone,
        id.to_string(),
        Duration::from_seconds(service_seconds).unwrap(),
        Capacity::new(waste).unwrap(),
    )
}

/// All test instances move at 1 m/s, so travel seconds equal meters.
pub(crate) fn build_problem(
    name: &str,
    locations: Vec<Location>,
    cv_capacity: f64,
    tv_capacity: f64,
    cv_max_seconds: f64,
    tv_max_seconds: f64,
    cv_fleet_size: u32,
) -> Arc<VrptProblem> {
    let parameters = ProblemParameters {
        cv_capacity: Capacity::new(cv_capacity).unwrap(),
        tv_capacity: Capacity::new(tv_capacity).unwrap(),
        cv_max_duration: Duration::from_seconds(cv_max_seconds).unwrap(),
        tv_max_duration: Duration::from_seconds(tv_max_seconds).unwrap(),
        cv_fleet_size,
        vehicle_speed: Speed::new(1.0, DistanceUnit::Meters, TimeUnit::Seconds).unwrap(),
        epsilon: Duration::from_seconds(0.5).unwrap(),
    };
    Arc::new(VrptProblem::new(name.to_string(), locations, parameters).unwrap())
}

/// The smallest interesting instance: one zone at (1,0) with 3 units,
/// SWTS at (5,0), landfill at (10,0).
pub(crate) fn single_zone_instance() -> Arc<VrptProblem> {
    build_problem(
        "single-zone",
        vec![
            plain("depot", 0.0, 0.0, LocationType::Depot),
            plain("swts", 5.0, 0.0, LocationType::Swts),
            plain("landfill", 10.0, 0.0, LocationType::Landfill),
            zone("zone", 1.0, 0.0, 3.0, 0.0),
        ],
        10.0,
        20.0,
        100_000.0,
        100_000.0,
        5,
    )
}

/// Two 6-unit zones against a 10-unit vehicle: the route has to unload in
/// between.
pub(crate) fn capacity_split_instance() -> Arc<VrptProblem> {
    build_problem(
        "capacity-split",
        vec![
            plain("depot", 0.0, 0.0, LocationType::Depot),
            zone("zone_1", 1.0, 0.0, 6.0, 0.0),
            zone("zone_2", 2.0, 0.0, 6.0, 0.0),
            plain("swts", 3.0, 0.0, LocationType::Swts),
            plain("landfill", 20.0, 0.0, LocationType::Landfill),
        ],
        10.0,
        20.0,
        100_000.0,
        100_000.0,
        5,
    )
}

/// Six zones on a line with 600s of service each and a 2000s duration
/// limit: roughly three zones fit per vehicle, so constructive heuristics
/// need two routes.
pub(crate) fn line_instance() -> Arc<VrptProblem> {
    build_problem(
        "line",
        vec![
            plain("depot", 0.0, 0.0, LocationType::Depot),
            zone("zone_1", 1.0, 0.0, 3.0, 600.0),
            zone("zone_2", 2.0, 0.0, 6.0, 600.0),
            zone("zone_3", 3.0, 0.0, 4.0, 600.0),
            zone("zone_4", 4.0, 0.0, 5.0, 600.0),
            zone("zone_5", 5.0, 0.0, 2.0, 600.0),
            zone("zone_6", 6.0, 0.0, 7.0, 600.0),
            plain("swts_1", 8.0, 0.0, LocationType::Swts),
            plain("swts_2", 0.0, 8.0, LocationType::Swts),
            plain("landfill", 15.0, 0.0, LocationType::Landfill),
        ],
        10.0,
        20.0,
        2_000.0,
        100_000.0,
        3,
    )
}

/// Three vehicle-filling zones co-located with the depot and the transfer
/// station, landfill far away: all deliveries happen at time zero and no
/// transporter can come back in time for a second one.
pub(crate) fn colocated_heavy_instance() -> Arc<VrptProblem> {
    build_problem(
        "colocated-heavy",
        vec![
            plain("depot", 0.0, 0.0, LocationType::Depot),
            zone("heavy_1", 0.0, 0.0, 10.0, 0.0),
            zone("heavy_2", 0.0, 0.0, 10.0, 0.0),
            zone("heavy_3", 0.0, 0.0, 10.0, 0.0),
            plain("swts", 0.0, 0.0, LocationType::Swts),
            plain("landfill", 100.0, 0.0, LocationType::Landfill),
        ],
        10.0,
        10.0,
        100_000.0,
        100_000.0,
        5,
    )
}

/// Four one-unit zones on a line with plenty of capacity and time: order
/// is the only thing that matters here.
pub(crate) fn light_line_instance() -> Arc<VrptProblem> {
    build_problem(
        "light-line",
        vec![
            plain("depot", 0.0, 0.0, LocationType::Depot),
            zone("zone_a", 1.0, 0.0, 1.0, 0.0),
            zone("zone_b", 2.0, 0.0, 1.0, 0.0),
            zone("zone_c", 3.0, 0.0, 1.0, 0.0),
            zone("zone_d", 4.0, 0.0, 1.0, 0.0),
            plain("swts", 5.0, 0.0, LocationType::Swts),
            plain("landfill", 20.0, 0.0, LocationType::Landfill),
        ],
        10.0,
        20.0,
        100_000.0,
        100_000.0,
        5,
    )
}

/// Two zone pairs, one near the depot line and one off to the side. With
/// the pairs assigned crosswise, a single between-route exchange untangles
/// them.
pub(crate) fn crossed_pairs_instance() -> Arc<VrptProblem> {
    build_problem(
        "crossed-pairs",
        vec![
            plain("depot", 0.0, 0.0, LocationType::Depot),
            zone("near_1", 1.0, 0.0, 1.0, 0.0),
            zone("near_2", 2.0, 0.0, 1.0, 0.0),
            zone("far_1", 1.0, 3.0, 1.0, 0.0),
            zone("far_2", 2.0, 3.0, 1.0, 0.0),
            plain("swts", 3.0, 0.0, LocationType::Swts),
            plain("landfill", 20.0, 0.0, LocationType::Landfill),
        ],
        10.0,
        20.0,
        100_000.0,
        100_000.0,
        5,
    )
}

/// Randomized instance for the property tests. Deterministic in the seed.
pub(crate) fn random_instance(seed: u64, zone_count: usize) -> Arc<VrptProblem> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut locations = vec![
        plain("depot", 50.0, 50.0, LocationType::Depot),
        plain("landfill", 100.0, 100.0, LocationType::Landfill),
        plain("swts_a", 25.0, 25.0, LocationType::Swts),
        plain("swts_b", 75.0, 75.0, LocationType::Swts),
    ];
    for i in 0..zone_count {
        locations.push(zone(
            &format!("zone_{}", i),
            rng.gen_range(0.0..100.0),
            rng.gen_range(0.0..100.0),
            rng.gen_range(1.0..5.0),
            rng.gen_range(30.0..120.0),
        ));
    }
    build_problem("random", locations, 12.0, 40.0, 5_000.0, 100_000.0, 6)
}
