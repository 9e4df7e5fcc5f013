use super::Engine;

use async_trait::async_trait;
use futures::future::try_join_all;
use std::future::Future;

use crate::{
    api::RoutingAPI,
    entities::{Coordinates, Route},
    error::{invalid_input_error, Error},
    external::{nominatim, osrm},
};

#[async_trait]
impl RoutingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn calculate_route(
        &self,
        origin: String,
        destination: String,
        stops: Vec<String>,
    ) -> Result<Route, Error> {
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(invalid_input_error());
        }

        let waypoints = resolve_waypoints(&origin, &destination, &stops, |address| async move {
            nominatim::search(&address).await
        })
        .await?;

        osrm::drive_route(&waypoints).await
    }
}

// Fans out one geocoding call per address and joins on completion of all of
// them, aborting on the first failure. The sequence is reassembled by request
// position, never by completion order: origin first, stops in caller order,
// destination last.
async fn resolve_waypoints<F, Fut>(
    origin: &str,
    destination: &str,
    stops: &[String],
    resolve: F,
) -> Result<Vec<Coordinates>, Error>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Coordinates, Error>>,
{
    let (origin, destination, stops) = tokio::try_join!(
        resolve(origin.into()),
        resolve(destination.into()),
        try_join_all(stops.iter().map(|stop| resolve(stop.clone()))),
    )?;

    let mut waypoints = Vec::with_capacity(stops.len() + 2);
    waypoints.push(origin);
    waypoints.extend(stops);
    waypoints.push(destination);

    Ok(waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::geocoding_error;

    // a resolver that maps addresses to distinct, recognizable coordinates
    async fn lookup(address: String) -> Result<Coordinates, Error> {
        let latitude = match address.as_str() {
            "origin" => 1.0,
            "stop a" => 2.0,
            "stop b" => 3.0,
            "destination" => 4.0,
            _ => return Err(geocoding_error(&address, "address not found")),
        };

        Ok(Coordinates {
            latitude,
            longitude: -latitude,
        })
    }

    #[test]
    fn waypoints_follow_request_order() {
        tokio_test::block_on(async {
            let stops = vec!["stop a".to_string(), "stop b".to_string()];
            let waypoints = resolve_waypoints("origin", "destination", &stops, lookup)
                .await
                .unwrap();

            let latitudes: Vec<f64> = waypoints.iter().map(|c| c.latitude).collect();
            assert_eq!(latitudes, vec![1.0, 2.0, 3.0, 4.0]);
        });
    }

    #[test]
    fn swapping_stops_changes_the_sequence() {
        tokio_test::block_on(async {
            let forward = vec!["stop a".to_string(), "stop b".to_string()];
            let swapped = vec!["stop b".to_string(), "stop a".to_string()];

            let a = resolve_waypoints("origin", "destination", &forward, lookup)
                .await
                .unwrap();
            let b = resolve_waypoints("origin", "destination", &swapped, lookup)
                .await
                .unwrap();

            assert_ne!(a, b);
            assert_eq!(a[1], b[2]);
            assert_eq!(a[2], b[1]);
        });
    }

    #[test]
    fn no_stops_yields_exactly_two_waypoints() {
        tokio_test::block_on(async {
            let waypoints = resolve_waypoints("origin", "destination", &[], lookup)
                .await
                .unwrap();

            assert_eq!(waypoints.len(), 2);
            assert_eq!(waypoints[0].latitude, 1.0);
            assert_eq!(waypoints[1].latitude, 4.0);
        });
    }

    #[test]
    fn one_failed_stop_fails_the_whole_resolution() {
        tokio_test::block_on(async {
            let stops = vec!["stop a".to_string(), "nowhere".to_string()];
            let err = resolve_waypoints("origin", "destination", &stops, lookup)
                .await
                .unwrap_err();

            assert_eq!(err.code, 102);
            assert!(err.message.contains("nowhere"));
        });
    }

    #[test]
    fn failed_origin_fails_the_whole_resolution() {
        tokio_test::block_on(async {
            let err = resolve_waypoints("lost", "destination", &[], lookup)
                .await
                .unwrap_err();

            assert!(err.message.contains("lost"));
        });
    }
}
