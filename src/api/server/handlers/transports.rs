use axum::extract::{Extension, Json, Path};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    entities::{NewTransport, Transport, TransportUpdate},
    error::Error,
};

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<NewTransport>,
) -> Result<Json<Transport>, Error> {
    let transport = api.create_transport(params).await?;

    Ok(transport.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Transport>>, Error> {
    let transports = api.list_transports().await?;

    Ok(transports.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Transport>, Error> {
    let transport = api.find_transport(id).await?;

    Ok(transport.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(update): Json<TransportUpdate>,
) -> Result<Json<Transport>, Error> {
    let transport = api.update_transport(id, update).await?;

    Ok(transport.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, Error> {
    api.remove_transport(id).await?;

    Ok(json!({ "message": "transport successfully removed" }).into())
}
