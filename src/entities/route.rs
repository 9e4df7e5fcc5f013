use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A computed route between an origin and a destination, possibly via
/// intermediate stops. Never persisted; built once per request from the
/// route collaborator's best candidate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    /// total distance in meters
    pub distance: f64,
    /// total duration in seconds
    pub duration: f64,
    /// GeoJSON geometry of the full path, passed through untouched
    pub geometry: Value,
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub duration_hours: f64,
}

impl Route {
    // duration_hours is derived from duration_minutes, not from duration
    pub fn new(distance: f64, duration: f64, geometry: Value) -> Self {
        let distance_km = distance / 1000.0;
        let duration_minutes = duration / 60.0;
        let duration_hours = duration_minutes / 60.0;

        Self {
            distance,
            duration,
            geometry,
            distance_km,
            duration_minutes,
            duration_hours,
        }
    }
}

#[test]
fn route_derives_unit_conversions() {
    let route = Route::new(10000.0, 1800.0, serde_json::json!({}));

    assert_eq!(route.distance_km, 10.0);
    assert_eq!(route.duration_minutes, 30.0);
    assert_eq!(route.duration_hours, 0.5);
}

#[test]
fn route_derived_fields_stay_consistent() {
    let route = Route::new(1234.5, 777.7, serde_json::json!({}));

    assert_eq!(route.distance_km, route.distance / 1000.0);
    assert_eq!(route.duration_minutes, route.duration / 60.0);
    assert_eq!(route.duration_hours, route.duration_minutes / 60.0);
}
