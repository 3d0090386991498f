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

use serde::Serialize;

use crate::cv_route::CvRoute;
use crate::delivery::DeliveryTask;
use crate::solution::VrptSolution;
use crate::tv_route::TvRoute;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSolution {
    is_complete: bool,
    cv_routes: Vec<JsonCvRoute>,
    tv_routes: Vec<JsonTvRoute>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonCvRoute {
    vehicle_id: String,
    sequence: Vec<String>,
    ends_at_depot: bool,
    total_duration_seconds: f64,
    deliveries: Vec<JsonTask>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTvRoute {
    vehicle_id: String,
    sequence: Vec<String>,
    finish_time_seconds: f64,
    pickups: Vec<JsonTask>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTask {
    swts_id: String,
    amount: f64,
    arrival_time_seconds: f64,
}

pub fn solution_to_json(solution: &VrptSolution) -> serde_json::Value {
    let json_solution = JsonSolution {
        is_complete: solution.is_complete(),
        cv_routes: solution.cv_routes().map(cv_route_to_json).collect(),
        tv_routes: solution.tv_routes().map(tv_route_to_json).collect(),
    };
    serde_json::to_value(json_solution).expect("solution serialisation cannot fail")
}

fn cv_route_to_json(route: &CvRoute) -> JsonCvRoute {
    JsonCvRoute {
        vehicle_id: route.vehicle_id().to_string(),
        sequence: route.sequence().iter().map(|id| id.to_string()).collect(),
        ends_at_depot: route.ends_at_depot(),
        total_duration_seconds: route.total_duration().in_seconds(),
        deliveries: route.deliveries().iter().map(task_to_json).collect(),
    }
}

fn tv_route_to_json(route: &TvRoute) -> JsonTvRoute {
    JsonTvRoute {
        vehicle_id: route.vehicle_id().to_string(),
        sequence: route.sequence().iter().map(|id| id.to_string()).collect(),
        finish_time_seconds: route.current_time().in_seconds(),
        pickups: route.pickups().iter().map(task_to_json).collect(),
    }
}

fn task_to_json(task: &DeliveryTask) -> JsonTask {
    JsonTask {
        swts_id: task.swts_id().to_string(),
        amount: task.amount().value(),
        arrival_time_seconds: task.arrival_time().in_seconds(),
    }
}
