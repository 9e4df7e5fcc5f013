use axum::extract::{Extension, Json, Path};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    api::interface::DynAPI,
    entities::{NewUser, UserUpdate, UserView},
    error::Error,
};

#[derive(Debug, Deserialize)]
pub struct BlockParams {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BanParams {
    ban_reason: Option<String>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<NewUser>,
) -> Result<Json<UserView>, Error> {
    let user = api.create_user(params).await?;

    Ok(Json(user.into()))
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<UserView>>, Error> {
    let users = api.list_users().await?;

    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserView>, Error> {
    let user = api.find_user(id).await?;

    Ok(Json(user.into()))
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(update): Json<UserUpdate>,
) -> Result<Json<UserView>, Error> {
    let user = api.update_user(id, update).await?;

    Ok(Json(user.into()))
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, Error> {
    api.remove_user(id).await?;

    Ok(json!({ "message": "user successfully removed" }).into())
}

pub async fn block(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<BlockParams>,
) -> Result<Json<UserView>, Error> {
    let user = api.block_user(id, params.block_reason).await?;

    Ok(Json(user.into()))
}

pub async fn unblock(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserView>, Error> {
    let user = api.unblock_user(id).await?;

    Ok(Json(user.into()))
}

pub async fn ban(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<BanParams>,
) -> Result<Json<UserView>, Error> {
    let user = api.ban_user(id, params.ban_reason).await?;

    Ok(Json(user.into()))
}

pub async fn unban(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserView>, Error> {
    let user = api.unban_user(id).await?;

    Ok(Json(user.into()))
}
