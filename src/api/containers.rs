// ABOUTME: Container route handlers: list, inspect, create, delete, options.

use crate::api::error::ApiError;
use crate::engine::{Container, ContainerOption, ContainerRepository};
use crate::service::LifecycleService;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    /// Include stopped containers.
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateContainerRequest {
    pub image: String,
    #[serde(default)]
    pub name: Option<String>,
}

pub(crate) async fn list_containers<R: ContainerRepository>(
    State(service): State<Arc<LifecycleService<R>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Container>>, ApiError> {
    Ok(Json(service.list_containers(query.all).await?))
}

pub(crate) async fn get_container<R: ContainerRepository>(
    State(service): State<Arc<LifecycleService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Container>, ApiError> {
    Ok(Json(service.get_container_details(&id).await?))
}

pub(crate) async fn create_container<R: ContainerRepository>(
    State(service): State<Arc<LifecycleService<R>>>,
    Json(request): Json<CreateContainerRequest>,
) -> Result<(StatusCode, Json<Container>), ApiError> {
    let image = request.image.trim();
    if image.is_empty() {
        return Err(ApiError::invalid_request("image reference cannot be empty"));
    }

    let container = service
        .create_container(image, request.name.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(container)))
}

pub(crate) async fn delete_container<R: ContainerRepository>(
    State(service): State<Arc<LifecycleService<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_running_container(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn list_container_options<R: ContainerRepository>(
    State(service): State<Arc<LifecycleService<R>>>,
) -> Result<Json<Vec<ContainerOption>>, ApiError> {
    Ok(Json(service.list_running_container_options().await?))
}
