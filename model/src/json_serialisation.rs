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

use serde::{Deserialize, Serialize};

use crate::base_types::{Capacity, Duration, LocationId, Speed, VehicleCount};
use crate::errors::ModelError;
use crate::location::{Location, LocationType};
use crate::problem::{ProblemParameters, VrptProblem};

type IdType = String;

/// Mirror of the instance JSON. Durations are given in minutes, service
/// times in seconds, the vehicle speed in km/h and epsilon in seconds.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    name: Option<String>,
    locations: Vec<JsonLocation>,
    parameters: JsonParameters,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonLocation {
    id: IdType,
    x: f64,
    y: f64,
    #[serde(rename = "type")]
    location_type: JsonLocationType,
    name: Option<String>,
    waste_amount: Option<f64>,
    service_time: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
enum JsonLocationType {
    Depot,
    CollectionZone,
    TransferStation,
    Landfill,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonParameters {
    cv_capacity: f64,
    tv_capacity: f64,
    cv_max_duration: f64,
    tv_max_duration: f64,
    cv_fleet_size: VehicleCount,
    vehicle_speed: f64,
    epsilon: f64,
}

/// Builds a problem from an already-parsed JSON value. Parsing the
/// original plain-text instance format is the driver's concern.
pub fn load_vrpt_problem_instance_from_json(
    json_input: serde_json::Value,
) -> Result<Arc<VrptProblem>, ModelError> {
    let json_input: JsonInput = serde_json::from_value(json_input)
        .map_err(|e| ModelError::InvalidArgument(format!("malformed instance json: {}", e)))?;

    let locations = json_input
        .locations
        .into_iter()
        .map(create_location)
        .collect::<Result<Vec<_>, ModelError>>()?;

    let parameters = create_parameters(&json_input.parameters)?;
    let name = json_input.name.unwrap_or_else(|| "unnamed".to_string());

    Ok(Arc::new(VrptProblem::new(name, locations, parameters)?))
}

fn create_location(json_location: JsonLocation) -> Result<Location, ModelError> {
    if json_location.id.len() > 24 {
        return Err(ModelError::InvalidArgument(format!(
            "location id is too long (max 24 bytes): {}",
            json_location.id
        )));
    }
    let id = LocationId::from(json_location.id.as_str());
    let name = json_location.name.unwrap_or_else(|| json_location.id.clone());

    let location_type = match json_location.location_type {
        JsonLocationType::Depot => LocationType::Depot,
        JsonLocationType::CollectionZone => LocationType::CollectionZone,
        JsonLocationType::TransferStation => LocationType::Swts,
        JsonLocationType::Landfill => LocationType::Landfill,
    };

    if location_type != LocationType::CollectionZone
        && (json_location.waste_amount.is_some() || json_location.service_time.is_some())
    {
        return Err(ModelError::InvalidArgument(format!(
            "only collection zones carry waste or service time: {}",
            id
        )));
    }

    let waste_amount = Capacity::new(json_location.waste_amount.unwrap_or(0.0))?;
    let service_time = Duration::from_seconds(json_location.service_time.unwrap_or(0.0))?;

    Ok(Location::new(
        id,
        json_location.x,
        json_location.y,
        location_type,
        name,
        service_time,
        waste_amount,
    ))
}

fn create_parameters(json_parameters: &JsonParameters) -> Result<ProblemParameters, ModelError> {
    Ok(ProblemParameters {
        cv_capacity: Capacity::new(json_parameters.cv_capacity)?,
        tv_capacity: Capacity::new(json_parameters.tv_capacity)?,
        cv_max_duration: Duration::from_minutes(json_parameters.cv_max_duration)?,
        tv_max_duration: Duration::from_minutes(json_parameters.tv_max_duration)?,
        cv_fleet_size: json_parameters.cv_fleet_size,
        vehicle_speed: Speed::from_km_per_hour(json_parameters.vehicle_speed)?,
        epsilon: Duration::from_seconds(json_parameters.epsilon)?,
    })
}
