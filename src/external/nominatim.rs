use serde::{Deserialize, Serialize};
use std::env;

use crate::entities::Coordinates;
use crate::error::{geocoding_error, Error};

// client identifier required by the collaborator's usage policy
const USER_AGENT: &str = "carrus/0.1 (ops@carrus.dev)";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

/// Resolves a free-text address to coordinates. One round trip, no cache,
/// no retry; every failure names the address it was resolving.
#[tracing::instrument]
pub async fn search(address: &str) -> Result<Coordinates, Error> {
    if address.trim().is_empty() {
        return Err(geocoding_error(address, "address not found"));
    }

    let api_base = env::var("NOMINATIM_API_BASE")?;
    let url = format!("https://{}/search", api_base);

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("format", "json")])
        .query(&[("q", address)])
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|err| geocoding_error(address, err))?;

    if !res.status().is_success() {
        return Err(geocoding_error(address, "upstream error"));
    }

    let results: Vec<SearchResult> = res
        .json()
        .await
        .map_err(|err| geocoding_error(address, err))?;

    first_match(address, results)
}

// results arrive ranked best-first, with coordinates as strings
fn first_match(address: &str, results: Vec<SearchResult>) -> Result<Coordinates, Error> {
    let result = results
        .into_iter()
        .next()
        .ok_or_else(|| geocoding_error(address, "address not found"))?;

    let latitude = result
        .lat
        .parse()
        .map_err(|err| geocoding_error(address, err))?;
    let longitude = result
        .lon
        .parse()
        .map_err(|err| geocoding_error(address, err))?;

    Ok(Coordinates {
        latitude,
        longitude,
    })
}

#[test]
fn first_match_takes_the_best_ranked_result() {
    let results = vec![
        SearchResult {
            lat: "-23.5505".into(),
            lon: "-46.6333".into(),
        },
        SearchResult {
            lat: "40.7128".into(),
            lon: "-74.0060".into(),
        },
    ];

    let coordinates = first_match("Avenida Paulista", results).unwrap();
    assert_eq!(coordinates.latitude, -23.5505);
    assert_eq!(coordinates.longitude, -46.6333);
}

#[test]
fn empty_results_name_the_address() {
    let err = first_match("Rua Inexistente 999", vec![]).unwrap_err();

    assert_eq!(err.code, 102);
    assert!(err.message.contains("Rua Inexistente 999"));
    assert!(err.message.contains("address not found"));
}

#[test]
fn unparsable_coordinates_name_the_address() {
    let results = vec![SearchResult {
        lat: "not-a-number".into(),
        lon: "-46.6333".into(),
    }];

    let err = first_match("Avenida Paulista", results).unwrap_err();
    assert_eq!(err.code, 102);
    assert!(err.message.contains("Avenida Paulista"));
}
