use serde::Deserialize;
use serde_json::Value;
use std::env;

use crate::entities::{Coordinates, Route};
use crate::error::{route_error, Error};

#[derive(Clone, Debug, Deserialize)]
struct RouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<CandidateRoute>,
}

#[derive(Clone, Debug, Deserialize)]
struct CandidateRoute {
    distance: f64,
    duration: f64,
    geometry: Value,
}

/// Computes a driving route visiting `waypoints` in order, with full path
/// geometry. Only the collaborator's best candidate is kept.
#[tracing::instrument]
pub async fn drive_route(waypoints: &[Coordinates]) -> Result<Route, Error> {
    let api_base = env::var("OSRM_API_BASE")?;
    let url = format!(
        "https://{}/route/v1/driving/{}",
        api_base,
        route_path(waypoints)
    );

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("overview", "full"), ("geometries", "geojson")])
        .send()
        .await
        .map_err(route_error)?;

    if !res.status().is_success() {
        return Err(route_error("upstream error"));
    }

    let data: RouteResponse = res.json().await.map_err(route_error)?;

    best_route(data)
}

// wire format: `longitude,latitude` pairs joined by semicolons, in visiting order
fn route_path(waypoints: &[Coordinates]) -> String {
    waypoints
        .iter()
        .map(|c| format!("{},{}", c.longitude, c.latitude))
        .collect::<Vec<_>>()
        .join(";")
}

fn best_route(data: RouteResponse) -> Result<Route, Error> {
    if data.code != "Ok" {
        return Err(route_error(
            data.message.as_deref().unwrap_or("unknown error"),
        ));
    }

    let candidate = data
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| route_error("unknown error"))?;

    Ok(Route::new(
        candidate.distance,
        candidate.duration,
        candidate.geometry,
    ))
}

#[cfg(test)]
fn coordinates(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates {
        latitude,
        longitude,
    }
}

#[test]
fn route_path_is_longitude_first_and_semicolon_separated() {
    let waypoints = vec![coordinates(-23.55, -46.63), coordinates(-22.9, -43.2)];

    assert_eq!(route_path(&waypoints), "-46.63,-23.55;-43.2,-22.9");
}

#[test]
fn route_path_is_order_sensitive() {
    let origin = coordinates(1.0, 2.0);
    let destination = coordinates(7.0, 8.0);
    let stop_a = coordinates(3.0, 4.0);
    let stop_b = coordinates(5.0, 6.0);

    let forward = route_path(&[origin, stop_a, stop_b, destination]);
    let swapped = route_path(&[origin, stop_b, stop_a, destination]);

    assert_eq!(forward, "2,1;4,3;6,5;8,7");
    assert_ne!(forward, swapped);
}

#[test]
fn best_route_keeps_the_first_candidate_and_derives_units() {
    let data = RouteResponse {
        code: "Ok".into(),
        message: None,
        routes: vec![
            CandidateRoute {
                distance: 10000.0,
                duration: 1800.0,
                geometry: serde_json::json!({ "type": "LineString", "coordinates": [] }),
            },
            CandidateRoute {
                distance: 99999.0,
                duration: 9999.0,
                geometry: serde_json::json!({}),
            },
        ],
    };

    let route = best_route(data).unwrap();
    assert_eq!(route.distance, 10000.0);
    assert_eq!(route.distance_km, 10.0);
    assert_eq!(route.duration_minutes, 30.0);
    assert_eq!(route.duration_hours, 0.5);
}

#[test]
fn non_ok_status_propagates_the_collaborator_message() {
    let data = RouteResponse {
        code: "NoRoute".into(),
        message: Some("Impossible route between points".into()),
        routes: vec![],
    };

    let err = best_route(data).unwrap_err();
    assert_eq!(err.code, 103);
    assert!(err.message.contains("Impossible route between points"));
}

#[test]
fn non_ok_status_without_message_marks_unknown_error() {
    let data = RouteResponse {
        code: "InvalidUrl".into(),
        message: None,
        routes: vec![],
    };

    let err = best_route(data).unwrap_err();
    assert!(err.message.contains("unknown error"));
}

#[test]
fn ok_status_with_no_candidates_is_an_error() {
    let data = RouteResponse {
        code: "Ok".into(),
        message: None,
        routes: vec![],
    };

    assert!(best_route(data).is_err());
}
