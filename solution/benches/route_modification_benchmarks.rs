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

use criterion::{criterion_group, criterion_main, Criterion};
use model::base_types::{Capacity, DistanceUnit, Duration, LocationId, Speed, TimeUnit};
use model::location::{Location, LocationType};
use model::problem::{ProblemParameters, VrptProblem};
use solution::CvRoute;

fn bench_problem(zone_count: usize) -> Arc<VrptProblem> {
    let mut locations = vec![
        Location::new_plain(
            LocationId::from("depot"),
            0.0,
            0.0,
            LocationType::Depot,
            "Depot".to_string(),
        ),
        Location::new_plain(
            LocationId::from("landfill"),
            100.0,
            0.0,
            LocationType::Landfill,
            "Landfill".to_string(),
        ),
        Location::new_plain(
            LocationId::from("swts_1"),
            50.0,
            0.0,
            LocationType::Swts,
            "SWTS 1".to_string(),
        ),
    ];
    for i in 0..zone_count {
        locations.push(Location::new(
            LocationId::from(format!("zone_{}", i).as_str()),
            (i % 10) as f64,
            (i / 10) as f64,
            LocationType::CollectionZone,
            format!("Zone {}", i),
            Duration::from_seconds(10.0).unwrap(),
            Capacity::new(1.0).unwrap(),
        ));
    }

    let parameters = ProblemParameters {
        cv_capacity: Capacity::new(1000.0).unwrap(),
        tv_capacity: Capacity::new(1000.0).unwrap(),
        cv_max_duration: Duration::from_hours(1000.0).unwrap(),
        tv_max_duration: Duration::from_hours(1000.0).unwrap(),
        cv_fleet_size: 10,
        vehicle_speed: Speed::new(1.0, DistanceUnit::Meters, TimeUnit::Seconds).unwrap(),
        epsilon: Duration::from_seconds(1.0).unwrap(),
    };

    Arc::new(VrptProblem::new("bench".to_string(), locations, parameters).unwrap())
}

fn route_replay_benchmark(c: &mut Criterion) {
    let problem = bench_problem(100);
    let sequence: Vec<LocationId> = problem.zones().map(|zone| zone.id()).collect();

    c.bench_function("replay 100-zone route", |b| {
        b.iter(|| {
            let mut route = CvRoute::new(
                "CV1".to_string(),
                problem.cv_capacity(),
                problem.cv_max_duration(),
            );
            for id in sequence.iter() {
                route.add_location(*id, &problem).unwrap();
            }
            route
        })
    });

    c.bench_function("can_visit scan over 100 zones", |b| {
        let route = CvRoute::new(
            "CV1".to_string(),
            problem.cv_capacity(),
            problem.cv_max_duration(),
        );
        b.iter(|| {
            sequence
                .iter()
                .filter(|id| route.can_visit(**id, &problem))
                .count()
        })
    });
}

criterion_group!(benches, route_replay_benchmark);
criterion_main!(benches);
