// ABOUTME: Capability contract for container lifecycle backends.
// ABOUTME: Implemented by the bollard adapter and by test substitutes.

use super::error::EngineError;
use super::model::{Container, ContainerOption};
use async_trait::async_trait;

/// Container lifecycle operations offered by an engine backend.
///
/// Callers depend on this contract rather than a concrete client, so a new
/// engine is added by writing another adapter and tests substitute an
/// in-memory implementation. Signatures take plain values and return the
/// read models; failure kinds are fixed per operation and identical across
/// implementations.
#[async_trait]
pub trait ContainerRepository: Send + Sync {
    /// Liveness probe. Never errors; an unreachable engine reports `false`.
    async fn is_available(&self) -> bool;

    /// List containers, running-only unless `include_stopped`.
    async fn list_containers(
        &self,
        include_stopped: bool,
    ) -> Result<Vec<Container>, EngineError>;

    /// Fetch one container by id or name, with networks and mounts attached.
    async fn get_container_details(&self, id: &str) -> Result<Container, EngineError>;

    /// Launch a detached container from an image reference.
    async fn create_container(
        &self,
        image: &str,
        name: Option<&str>,
    ) -> Result<Container, EngineError>;

    /// Force-remove a container, requiring it to be running.
    async fn delete_running_container(&self, id: &str) -> Result<(), EngineError>;

    /// Project running containers into selection options.
    async fn list_running_container_options(&self) -> Result<Vec<ContainerOption>, EngineError>;
}

// Shared handles delegate, so a caller can keep a reference to the backend
// it hands to the service.
#[async_trait]
impl<T: ContainerRepository + ?Sized> ContainerRepository for std::sync::Arc<T> {
    async fn is_available(&self) -> bool {
        (**self).is_available().await
    }

    async fn list_containers(
        &self,
        include_stopped: bool,
    ) -> Result<Vec<Container>, EngineError> {
        (**self).list_containers(include_stopped).await
    }

    async fn get_container_details(&self, id: &str) -> Result<Container, EngineError> {
        (**self).get_container_details(id).await
    }

    async fn create_container(
        &self,
        image: &str,
        name: Option<&str>,
    ) -> Result<Container, EngineError> {
        (**self).create_container(image, name).await
    }

    async fn delete_running_container(&self, id: &str) -> Result<(), EngineError> {
        (**self).delete_running_container(id).await
    }

    async fn list_running_container_options(&self) -> Result<Vec<ContainerOption>, EngineError> {
        (**self).list_running_container_options().await
    }
}
