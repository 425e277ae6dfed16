// ABOUTME: HTTP transport: route wiring over the lifecycle service.
// ABOUTME: Thin glue; all behavior lives in the service and engine layers.

mod containers;
mod error;
mod health;

pub use error::ApiError;

use crate::engine::ContainerRepository;
use crate::service::LifecycleService;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Build the application router. Generic over the repository so tests can
/// serve the same routes against a substitute backend.
pub fn router<R: ContainerRepository + 'static>(service: Arc<LifecycleService<R>>) -> Router {
    Router::new()
        .nest("/api/v1", routes::<R>())
        .with_state(service)
}

fn routes<R: ContainerRepository + 'static>() -> Router<Arc<LifecycleService<R>>> {
    Router::new()
        .route("/health", get(health::health::<R>))
        .route(
            "/containers",
            get(containers::list_containers::<R>).post(containers::create_container::<R>),
        )
        .route(
            "/containers/options",
            get(containers::list_container_options::<R>),
        )
        .route(
            "/containers/{id}",
            get(containers::get_container::<R>).delete(containers::delete_container::<R>),
        )
}
