// ABOUTME: Health route handler reporting engine reachability.

use crate::engine::ContainerRepository;
use crate::service::{HealthReport, LifecycleService};
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

pub(crate) async fn health<R: ContainerRepository>(
    State(service): State<Arc<LifecycleService<R>>>,
) -> Json<HealthReport> {
    Json(service.health().await)
}
