use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: String,
    pub routing_preference: String,
    pub departure_time: String,
}

#[derive(Serialize, Debug)]
pub struct Waypoint {
    pub address: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ComputeRoutesResponse {
    pub routes: Vec<Route>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Route {
    pub duration: String,
    pub static_duration: String,
    pub distance_meters: f64,
    pub description: String,
}
