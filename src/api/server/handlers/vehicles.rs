use axum::extract::{Extension, Json, Path};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    entities::{NewVehicle, Vehicle, VehicleUpdate},
    error::Error,
};

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<NewVehicle>,
) -> Result<Json<Vehicle>, Error> {
    let vehicle = api.create_vehicle(params).await?;

    Ok(vehicle.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Vehicle>>, Error> {
    let vehicles = api.list_vehicles().await?;

    Ok(vehicles.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vehicle>, Error> {
    let vehicle = api.find_vehicle(id).await?;

    Ok(vehicle.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(update): Json<VehicleUpdate>,
) -> Result<Json<Vehicle>, Error> {
    let vehicle = api.update_vehicle(id, update).await?;

    Ok(vehicle.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, Error> {
    api.remove_vehicle(id).await?;

    Ok(json!({ "message": "vehicle successfully removed" }).into())
}
