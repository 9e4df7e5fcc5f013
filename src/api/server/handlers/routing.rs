use axum::extract::{Extension, Json};
use axum_macros::debug_handler;
use serde::Deserialize;

use crate::{api::interface::DynAPI, entities::Route, error::Error};

// field names are the wire contract with the existing front end
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRouteParams {
    origin_address: String,
    destination_address: String,
    #[serde(default)]
    stops_addresses: Vec<String>,
}

#[debug_handler]
pub async fn calculate(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CalculateRouteParams>,
) -> Result<Json<Route>, Error> {
    let route = api
        .calculate_route(
            params.origin_address,
            params.destination_address,
            params.stops_addresses,
        )
        .await?;

    Ok(route.into())
}
