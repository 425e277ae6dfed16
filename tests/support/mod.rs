// ABOUTME: Shared test support: an in-memory ContainerRepository substitute.
// ABOUTME: Records invoked operations and fails or goes unavailable on demand.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use stevedore::engine::{
    Container, ContainerOption, ContainerRepository, ContainerState, EngineError,
};

pub struct MockRepository {
    containers: RwLock<Vec<Container>>,
    available: RwLock<bool>,
    calls: RwLock<Vec<String>>,
    fail_on: RwLock<Option<String>>,
}

#[allow(dead_code)]
impl MockRepository {
    pub fn new() -> Self {
        Self {
            containers: RwLock::new(Vec::new()),
            available: RwLock::new(true),
            calls: RwLock::new(Vec::new()),
            fail_on: RwLock::new(None),
        }
    }

    pub fn set_available(&self, available: bool) {
        *self.available.write() = available;
    }

    pub fn set_fail_on(&self, operation: &str) {
        *self.fail_on.write() = Some(operation.to_string());
    }

    pub fn add_container(&self, container: Container) {
        self.containers.write().push(container);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.containers.read().iter().any(|c| c.id == id)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.read().clone()
    }

    fn record(&self, call: &str) {
        self.calls.write().push(call.to_string());
    }

    fn check_fail(&self, operation: &str) -> Result<(), EngineError> {
        if self.fail_on.read().as_deref() == Some(operation) {
            return Err(EngineError::Operation {
                message: format!("mock failure on {operation}"),
            });
        }
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContainerRepository for MockRepository {
    async fn is_available(&self) -> bool {
        self.record("is_available");
        *self.available.read()
    }

    async fn list_containers(
        &self,
        include_stopped: bool,
    ) -> Result<Vec<Container>, EngineError> {
        self.record(&format!("list_containers:{include_stopped}"));
        self.check_fail("list_containers")?;

        Ok(self
            .containers
            .read()
            .iter()
            .filter(|c| include_stopped || c.status == ContainerState::Running)
            .cloned()
            .collect())
    }

    async fn get_container_details(&self, id: &str) -> Result<Container, EngineError> {
        self.record(&format!("get_container_details:{id}"));
        self.check_fail("get_container_details")?;

        let containers = self.containers.read();
        let found = containers
            .iter()
            .find(|c| c.id == id || c.name == id)
            .ok_or_else(|| EngineError::NotFound { id: id.to_string() })?;

        let mut detail = found.clone();
        detail.networks = Some(vec!["bridge".to_string()]);
        detail.mounts = Some(Vec::new());
        Ok(detail)
    }

    async fn create_container(
        &self,
        image: &str,
        name: Option<&str>,
    ) -> Result<Container, EngineError> {
        self.record(&format!("create_container:{image}"));
        self.check_fail("create_container")?;

        let id = format!("{:012x}", 0xa1b2c3 + self.containers.read().len());
        let container = Container {
            id,
            name: name.unwrap_or("unnamed").to_string(),
            status: ContainerState::Running,
            image: image.to_string(),
            created: "2024-05-04T10:00:00Z".to_string(),
            ports: HashMap::new(),
            labels: HashMap::new(),
            networks: None,
            mounts: None,
        };
        self.containers.write().push(container.clone());
        Ok(container)
    }

    async fn delete_running_container(&self, id: &str) -> Result<(), EngineError> {
        self.record(&format!("delete_running_container:{id}"));
        self.check_fail("delete_running_container")?;

        let mut containers = self.containers.write();
        let index = containers
            .iter()
            .position(|c| c.id == id || c.name == id)
            .ok_or_else(|| EngineError::NotFound { id: id.to_string() })?;

        if containers[index].status != ContainerState::Running {
            return Err(EngineError::NotRunning { id: id.to_string() });
        }

        containers.remove(index);
        Ok(())
    }

    async fn list_running_container_options(&self) -> Result<Vec<ContainerOption>, EngineError> {
        self.record("list_running_container_options");
        self.check_fail("list_running_container_options")?;

        Ok(self
            .containers
            .read()
            .iter()
            .filter(|c| c.status == ContainerState::Running)
            .map(|c| ContainerOption::new(c.id.clone(), c.name.clone(), c.image.clone()))
            .collect())
    }
}

/// Build a container snapshot with empty ports and labels.
#[allow(dead_code)]
pub fn container(id: &str, name: &str, status: ContainerState, image: &str) -> Container {
    Container {
        id: id.to_string(),
        name: name.to_string(),
        status,
        image: image.to_string(),
        created: "2024-05-04T10:00:00Z".to_string(),
        ports: HashMap::new(),
        labels: HashMap::new(),
        networks: None,
        mounts: None,
    }
}
