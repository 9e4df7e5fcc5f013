use axum::extract::{Extension, Json, Path};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    auth::Actor,
    entities::{Client, ClientUpdate, NewClient},
    error::Error,
};

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Actor(actor): Actor,
    Json(params): Json<NewClient>,
) -> Result<Json<Client>, Error> {
    let client = api.create_client(params, actor).await?;

    Ok(client.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Client>>, Error> {
    let clients = api.list_clients().await?;

    Ok(clients.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Client>, Error> {
    let client = api.find_client(id).await?;

    Ok(client.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
    Json(update): Json<ClientUpdate>,
) -> Result<Json<Client>, Error> {
    let client = api.update_client(id, update, actor).await?;

    Ok(client.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Actor(actor): Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, Error> {
    api.remove_client(id, actor).await?;

    Ok(json!({ "message": "client successfully removed" }).into())
}
