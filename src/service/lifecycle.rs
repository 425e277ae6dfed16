// ABOUTME: Gating layer over a container repository.
// ABOUTME: Checks engine availability before delegating each operation.

use crate::engine::{Container, ContainerOption, ContainerRepository, EngineError};
use serde::{Deserialize, Serialize};

/// Engine reachability as reported by the availability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    Connected,
    Disconnected,
}

/// Service health summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub engine: EngineStatus,
}

/// Container lifecycle operations with a uniform availability precondition.
///
/// Every delegating operation probes `is_available` first and fails with
/// [`EngineError::Unavailable`] without touching the repository operation
/// when the engine is unreachable. Everything else passes through unchanged:
/// same inputs, same outputs, same failure kinds. The service holds no state
/// between calls beyond the injected repository.
pub struct LifecycleService<R> {
    repository: R,
}

impl<R: ContainerRepository> LifecycleService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Availability report. Not gated; always succeeds.
    pub async fn health(&self) -> HealthReport {
        let engine = if self.repository.is_available().await {
            EngineStatus::Connected
        } else {
            EngineStatus::Disconnected
        };
        HealthReport {
            status: "healthy".to_string(),
            engine,
        }
    }

    pub async fn list_containers(
        &self,
        include_stopped: bool,
    ) -> Result<Vec<Container>, EngineError> {
        self.ensure_available().await?;
        self.repository.list_containers(include_stopped).await
    }

    pub async fn get_container_details(&self, id: &str) -> Result<Container, EngineError> {
        self.ensure_available().await?;
        self.repository.get_container_details(id).await
    }

    pub async fn create_container(
        &self,
        image: &str,
        name: Option<&str>,
    ) -> Result<Container, EngineError> {
        self.ensure_available().await?;
        self.repository.create_container(image, name).await
    }

    pub async fn delete_running_container(&self, id: &str) -> Result<(), EngineError> {
        self.ensure_available().await?;
        self.repository.delete_running_container(id).await
    }

    pub async fn list_running_container_options(
        &self,
    ) -> Result<Vec<ContainerOption>, EngineError> {
        self.ensure_available().await?;
        self.repository.list_running_container_options().await
    }

    async fn ensure_available(&self) -> Result<(), EngineError> {
        if self.repository.is_available().await {
            Ok(())
        } else {
            Err(EngineError::Unavailable)
        }
    }
}
