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

use crate::base_types::{Capacity, Distance, Duration, LocationId, Speed, VehicleCount};
use crate::errors::ModelError;
use crate::kd_tree::KdTree;
use crate::location::{Location, LocationType};

/// Fleet and tolerance parameters of an instance.
pub struct ProblemParameters {
    /// Q1: capacity of a collection vehicle
    pub cv_capacity: Capacity,
    /// Q2: capacity of a transportation vehicle
    pub tv_capacity: Capacity,
    /// L1: maximal route duration of a collection vehicle
    pub cv_max_duration: Duration,
    /// L2: maximal route duration of a transportation vehicle
    pub tv_max_duration: Duration,
    /// maximal number of collection vehicles
    pub cv_fleet_size: VehicleCount,
    /// speed of all vehicles; travel times are Euclidean distance / speed
    pub vehicle_speed: Speed,
    /// slack for duration comparisons at feasibility boundaries
    pub epsilon: Duration,
}

/// An instance of the vehicle routing problem with transshipments for
/// solid-waste collection. Owns all locations (exactly one depot, exactly
/// one landfill, at least one transfer station and at least one collection
/// zone), the fleet parameters and the spatial index.
///
/// Read-only after construction; algorithms share it by reference
/// (typically an Arc) and never mutate it.
pub struct VrptProblem {
    name: String,
    kd_tree: KdTree,
    depot_index: usize,
    landfill_index: usize,
    swts_indices: Vec<usize>,
    zone_indices: Vec<usize>,
    parameters: ProblemParameters,
}

// static functions
impl VrptProblem {
    pub fn new(
        name: String,
        locations: Vec<Location>,
        parameters: ProblemParameters,
    ) -> Result<VrptProblem, ModelError> {
        let mut depot_indices = Vec::new();
        let mut landfill_indices = Vec::new();
        let mut swts_indices = Vec::new();
        let mut zone_indices = Vec::new();

        for (index, location) in locations.iter().enumerate() {
            match location.location_type() {
                LocationType::Depot => depot_indices.push(index),
                LocationType::Landfill => landfill_indices.push(index),
                LocationType::Swts => swts_indices.push(index),
                LocationType::CollectionZone => zone_indices.push(index),
            }
        }

        if depot_indices.len() != 1 {
            return Err(ModelError::InvalidArgument(format!(
                "an instance needs exactly one depot, found {}",
                depot_indices.len()
            )));
        }
        if landfill_indices.len() != 1 {
            return Err(ModelError::InvalidArgument(format!(
                "an instance needs exactly one landfill, found {}",
                landfill_indices.len()
            )));
        }
        if swts_indices.is_empty() {
            return Err(ModelError::InvalidArgument(
                "an instance needs at least one transfer station".to_string(),
            ));
        }
        if zone_indices.is_empty() {
            return Err(ModelError::InvalidArgument(
                "an instance needs at least one collection zone".to_string(),
            ));
        }

        let kd_tree = KdTree::build(locations, parameters.vehicle_speed)?;

        Ok(VrptProblem {
            name,
            kd_tree,
            depot_index: depot_indices[0],
            landfill_index: landfill_indices[0],
            swts_indices,
            zone_indices,
            parameters,
        })
    }
}

// methods
impl VrptProblem {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depot(&self) -> &Location {
        &self.kd_tree.locations()[self.depot_index]
    }

    pub fn landfill(&self) -> &Location {
        &self.kd_tree.locations()[self.landfill_index]
    }

    pub fn swts(&self) -> impl Iterator<Item = &Location> + '_ {
        self.swts_indices
            .iter()
            .map(|index| &self.kd_tree.locations()[*index])
    }

    pub fn zones(&self) -> impl Iterator<Item = &Location> + '_ {
        self.zone_indices
            .iter()
            .map(|index| &self.kd_tree.locations()[*index])
    }

    pub fn number_of_zones(&self) -> usize {
        self.zone_indices.len()
    }

    pub fn location(&self, id: LocationId) -> Result<&Location, ModelError> {
        self.kd_tree.location(id)
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.kd_tree.contains(id)
    }

    pub fn distance(&self, from: LocationId, to: LocationId) -> Result<Distance, ModelError> {
        self.kd_tree.distance(from, to)
    }

    pub fn travel_time(&self, from: LocationId, to: LocationId) -> Result<Duration, ModelError> {
        self.kd_tree.travel_time(from, to)
    }

    pub fn nearest(&self, from: &Location, target_type: LocationType) -> Option<&Location> {
        self.kd_tree.nearest(from, target_type)
    }

    pub fn k_nearest(
        &self,
        from: &Location,
        target_type: LocationType,
        k: usize,
    ) -> Result<Vec<&Location>, ModelError> {
        self.kd_tree.k_nearest(from, target_type, k)
    }

    pub fn cv_capacity(&self) -> Capacity {
        self.parameters.cv_capacity
    }

    pub fn tv_capacity(&self) -> Capacity {
        self.parameters.tv_capacity
    }

    pub fn cv_max_duration(&self) -> Duration {
        self.parameters.cv_max_duration
    }

    pub fn tv_max_duration(&self) -> Duration {
        self.parameters.tv_max_duration
    }

    pub fn cv_fleet_size(&self) -> VehicleCount {
        self.parameters.cv_fleet_size
    }

    pub fn vehicle_speed(&self) -> Speed {
        self.parameters.vehicle_speed
    }

    pub fn epsilon(&self) -> Duration {
        self.parameters.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::{ProblemParameters, VrptProblem};
    use crate::base_types::{Capacity, Duration, LocationId, Speed};
    use crate::errors::ModelError;
    use crate::location::{Location, LocationType};

    fn parameters() -> ProblemParameters {
        ProblemParameters {
            cv_capacity: Capacity::new(10.0).unwrap(),
            tv_capacity: Capacity::new(20.0).unwrap(),
            cv_max_duration: Duration::from_hours(5.0).unwrap(),
            tv_max_duration: Duration::from_hours(6.0).unwrap(),
            cv_fleet_size: 4,
            vehicle_speed: Speed::from_km_per_hour(50.0).unwrap(),
            epsilon: Duration::from_seconds(1.0).unwrap(),
        }
    }

    fn plain(id: &str, x: f64, y: f64, location_type: LocationType) -> Location {
        Location::new_plain(LocationId::from(id), x, y, location_type, id.to_string())
    }

    fn valid_locations() -> Vec<Location> {
        vec![
            plain("depot", 0.0, 0.0, LocationType::Depot),
            plain("landfill", 9.0, 0.0, LocationType::Landfill),
            plain("swts_1", 4.0, 0.0, LocationType::Swts),
            Location::new(
                LocationId::from("zone_1"),
                1.0,
                1.0,
                LocationType::CollectionZone,
                "Zone 1".to_string(),
                Duration::from_minutes(2.0).unwrap(),
                Capacity::new(3.0).unwrap(),
            ),
        ]
    }

    #[test]
    fn construction_classifies_roles() {
        let problem =
            VrptProblem::new("test".to_string(), valid_locations(), parameters()).unwrap();

        assert_eq!(problem.depot().id(), LocationId::from("depot"));
        assert_eq!(problem.landfill().id(), LocationId::from("landfill"));
        assert_eq!(problem.swts().count(), 1);
        assert_eq!(problem.number_of_zones(), 1);
        assert_eq!(problem.zones().next().unwrap().id(), LocationId::from("zone_1"));
        assert_eq!(problem.cv_fleet_size(), 4);
    }

    #[test]
    fn missing_roles_are_rejected() {
        let mut no_depot = valid_locations();
        no_depot.remove(0);
        assert!(matches!(
            VrptProblem::new("t".to_string(), no_depot, parameters()),
            Err(ModelError::InvalidArgument(_))
        ));

        let mut two_landfills = valid_locations();
        two_landfills.push(plain("landfill_2", 8.0, 1.0, LocationType::Landfill));
        assert!(matches!(
            VrptProblem::new("t".to_string(), two_landfills, parameters()),
            Err(ModelError::InvalidArgument(_))
        ));

        let no_zones = valid_locations()
            .into_iter()
            .filter(|l| l.location_type() != LocationType::CollectionZone)
            .collect();
        assert!(matches!(
            VrptProblem::new("t".to_string(), no_zones, parameters()),
            Err(ModelError::InvalidArgument(_))
        ));
    }

    #[test]
    fn queries_are_forwarded_to_the_index() {
        let problem =
            VrptProblem::new("test".to_string(), valid_locations(), parameters()).unwrap();
        let depot = LocationId::from("depot");
        let landfill = LocationId::from("landfill");

        assert_eq!(problem.distance(depot, landfill).unwrap().in_meters(), 9.0);
        assert_eq!(
            problem.distance(depot, landfill).unwrap(),
            problem.distance(landfill, depot).unwrap()
        );
        assert!(problem
            .nearest(problem.depot(), LocationType::Swts)
            .is_some());
        assert!(matches!(
            problem.location(LocationId::from("ghost")),
            Err(ModelError::NotFound(_))
        ));
    }
}
