use axum::extract::{Extension, Json, Path};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    auth::Actor,
    entities::{DocumentsUpdate, Driver, DriverProfile, DriverUpdate, NewDriver},
    error::Error,
};

#[derive(Debug, Deserialize)]
pub struct AssignVehicleParams {
    vehicle_id: Uuid,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Actor(actor): Actor,
    Json(params): Json<NewDriver>,
) -> Result<Json<Driver>, Error> {
    let driver = api.create_driver(params, actor).await?;

    Ok(driver.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<DriverProfile>>, Error> {
    let drivers = api.list_drivers().await?;

    Ok(drivers.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<DriverProfile>, Error> {
    let driver = api.find_driver(id).await?;

    Ok(driver.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
    Json(update): Json<DriverUpdate>,
) -> Result<Json<Driver>, Error> {
    let driver = api.update_driver(id, update, actor).await?;

    Ok(driver.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, Error> {
    api.remove_driver(id, actor).await?;

    Ok(json!({ "message": "driver successfully removed" }).into())
}

pub async fn assign_vehicle(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<AssignVehicleParams>,
) -> Result<Json<DriverProfile>, Error> {
    let driver = api.assign_vehicle(id, params.vehicle_id).await?;

    Ok(driver.into())
}

pub async fn update_documents(
    Extension(api): Extension<DynAPI>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
    Json(update): Json<DocumentsUpdate>,
) -> Result<Json<Driver>, Error> {
    let driver = api.update_driver_documents(id, update, actor).await?;

    Ok(driver.into())
}
