//! Generic CRUD handlers, instantiated once per [`ResourceService`].

use super::docs::RouteCatalog;
use super::error::AppError;
use super::payload::Payload;
use crate::service::{CreateOf, IdOf, ResourceService, UpdateOf};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;

/// Mounts `/api/<collection>` and `/api/<collection>/:id` for `service` and records them
/// in `catalog`.
pub fn resource_routes<S>(service: S, catalog: &mut RouteCatalog) -> Router
where
    S: ResourceService,
    CreateOf<S>: DeserializeOwned,
    UpdateOf<S>: DeserializeOwned,
{
    let collection = format!("/api/{}", S::COLLECTION);
    let member = format!("{collection}/:id");

    catalog.add("GET", &collection, format!("List every {}", S::ENTITY));
    catalog.add("POST", &collection, format!("Create a {}", S::ENTITY));
    catalog.add("GET", &member, format!("Fetch one {}", S::ENTITY));
    catalog.add("PUT", &member, format!("Update a {}", S::ENTITY));
    catalog.add("DELETE", &member, format!("Delete a {}", S::ENTITY));

    Router::new()
        .route(&collection, get(list::<S>).post(create::<S>))
        .route(
            &member,
            get(fetch::<S>).put(update::<S>).delete(remove::<S>),
        )
        .with_state(service)
}

async fn list<S: ResourceService>(
    State(service): State<S>,
) -> Result<Json<Vec<S::View>>, AppError> {
    Ok(Json(service.list_all().await?))
}

async fn fetch<S: ResourceService>(
    State(service): State<S>,
    Path(id): Path<i32>,
) -> Result<Json<S::View>, AppError> {
    Ok(Json(service.get_by_id(<IdOf<S>>::from(id)).await?))
}

async fn create<S>(
    State(service): State<S>,
    Payload(params): Payload<CreateOf<S>>,
) -> Result<impl IntoResponse, AppError>
where
    S: ResourceService,
    CreateOf<S>: DeserializeOwned,
{
    let view = service.create(params).await?;
    let location = format!("/api/{}/{}", S::COLLECTION, S::view_id(&view));
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(view)))
}

async fn update<S>(
    State(service): State<S>,
    Path(id): Path<i32>,
    Payload(update): Payload<UpdateOf<S>>,
) -> Result<Json<S::View>, AppError>
where
    S: ResourceService,
    UpdateOf<S>: DeserializeOwned,
{
    Ok(Json(service.update(<IdOf<S>>::from(id), update).await?))
}

async fn remove<S: ResourceService>(
    State(service): State<S>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    service.delete(<IdOf<S>>::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
