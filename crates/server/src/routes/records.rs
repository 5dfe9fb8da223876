//! Generic handlers shared by every record table.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use common::types::Ack;
use models::resource::Resource;
use sea_orm::{ActiveModelTrait, IntoActiveModel, PrimaryKeyTrait};
use serde::Serialize;
use service::errors::ServiceError;
use service::records::RecordService;

use crate::errors::JsonApiError;
use crate::metrics;
use crate::routes::ServerState;

/// `/{route}` with list and create, `/{route}/:id` with get, patch and delete.
/// The collection also answers on `/{route}/` for clients that kept the slash.
pub fn resource_routes<E>() -> Router<ServerState>
where
    E: Resource + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let route = E::descriptor().route;
    Router::new()
        .route(&format!("/{route}"), get(list::<E>).post(create::<E>))
        .route(&format!("/{route}/"), get(list::<E>).post(create::<E>))
        .route(
            &format!("/{route}/:id"),
            get(get_one::<E>).patch(update::<E>).delete(delete::<E>),
        )
}

fn finish<E: Resource, T>(operation: &'static str, result: Result<T, ServiceError>) -> Result<T, JsonApiError> {
    metrics::observe(E::descriptor().name, operation, metrics::outcome(&result));
    result.map_err(JsonApiError::from)
}

async fn create<E>(
    State(state): State<ServerState>,
    body: Result<Json<E::Create>, JsonRejection>,
) -> Result<Json<E::Model>, JsonApiError>
where
    E: Resource + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let Json(input) = body.map_err(JsonApiError::invalid_body)?;
    let result = RecordService::<E>::new(state.db).create(input).await;
    finish::<E, _>("create", result).map(Json)
}

async fn list<E>(State(state): State<ServerState>) -> Result<Json<Vec<E::Model>>, JsonApiError>
where
    E: Resource + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let result = RecordService::<E>::new(state.db).list().await;
    finish::<E, _>("list", result).map(Json)
}

async fn get_one<E>(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<E::Model>, JsonApiError>
where
    E: Resource + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let Path(id) = id.map_err(JsonApiError::invalid_id)?;
    let result = RecordService::<E>::new(state.db).get(id).await;
    finish::<E, _>("get", result).map(Json)
}

async fn update<E>(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<E::Patch>, JsonRejection>,
) -> Result<Json<E::Model>, JsonApiError>
where
    E: Resource + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let Path(id) = id.map_err(JsonApiError::invalid_id)?;
    let Json(patch) = body.map_err(JsonApiError::invalid_body)?;
    let result = RecordService::<E>::new(state.db).update(id, patch).await;
    finish::<E, _>("update", result).map(Json)
}

async fn delete<E>(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Ack>, JsonApiError>
where
    E: Resource + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let Path(id) = id.map_err(JsonApiError::invalid_id)?;
    let result = RecordService::<E>::new(state.db).delete(id).await;
    finish::<E, _>("delete", result).map(|()| Json(Ack::ok()))
}
