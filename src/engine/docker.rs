// ABOUTME: Bollard-based adapter for a local Docker-compatible engine.
// ABOUTME: Executes primitive operations and normalizes engine data and failures.

use crate::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::model::{Container, ContainerOption, ContainerState, PortBinding};
use crate::engine::repository::ContainerRepository;
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{ContainerCreateBody, ContainerInspectResponse, ContainerSummary};
use bollard::query_parameters::{
    CreateContainerOptions, CreateImageOptions, InspectContainerOptions, ListContainersOptions,
    RemoveContainerOptions, StartContainerOptions,
};
use futures::StreamExt;
use std::collections::HashMap;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_lookup_error(e: bollard::errors::Error, id: &str) -> EngineError {
    match &e {
        bollard::errors::Error::DockerResponseServerError { status_code, .. }
            if *status_code == 404 =>
        {
            EngineError::NotFound { id: id.to_string() }
        }
        _ => EngineError::operation(e.to_string()),
    }
}

fn map_operation_error(e: bollard::errors::Error) -> EngineError {
    EngineError::operation(e.to_string())
}

// =============================================================================
// Serialization Helpers
// =============================================================================

/// First 12 characters of an engine container id.
fn short_id(id: &str) -> String {
    id.chars().take(12).collect()
}

/// Short content identifier for an image: `sha256:` plus 10 digest characters.
fn short_image_id(id: &str) -> String {
    match id.strip_prefix("sha256:") {
        Some(digest) => format!("sha256:{}", digest.chars().take(10).collect::<String>()),
        None => short_id(id),
    }
}

/// Image reference rule shared by all read paths: prefer the first human
/// tag, fall back to a short content identifier.
fn image_display(tags: &[String], id: &str) -> String {
    match tags.first() {
        Some(tag) => tag.clone(),
        None => short_image_id(id),
    }
}

/// Image reference for a list entry. The list endpoint already reports the
/// tag when one exists and the content id otherwise, so only the fallback
/// needs shortening.
fn image_from_summary(image: Option<String>, image_id: Option<String>) -> String {
    let image = image.unwrap_or_default();
    if image.is_empty() || image.starts_with("sha256:") {
        short_image_id(image_id.as_deref().unwrap_or(&image))
    } else {
        image
    }
}

/// Engine names carry a leading slash.
fn primary_name(names: &[String]) -> String {
    names
        .first()
        .map(|n| n.trim_start_matches('/').to_string())
        .unwrap_or_default()
}

fn state_from_summary(state: Option<bollard::models::ContainerSummaryStateEnum>) -> ContainerState {
    match state {
        Some(bollard::models::ContainerSummaryStateEnum::CREATED) => ContainerState::Created,
        Some(bollard::models::ContainerSummaryStateEnum::RUNNING) => ContainerState::Running,
        Some(bollard::models::ContainerSummaryStateEnum::PAUSED) => ContainerState::Paused,
        Some(bollard::models::ContainerSummaryStateEnum::RESTARTING) => ContainerState::Restarting,
        Some(bollard::models::ContainerSummaryStateEnum::REMOVING) => ContainerState::Removing,
        Some(bollard::models::ContainerSummaryStateEnum::DEAD) => ContainerState::Dead,
        _ => ContainerState::Exited,
    }
}

fn state_from_inspect(state: Option<&bollard::models::ContainerState>) -> ContainerState {
    state
        .and_then(|s| s.status)
        .map(|s| match s {
            bollard::models::ContainerStateStatusEnum::CREATED => ContainerState::Created,
            bollard::models::ContainerStateStatusEnum::RUNNING => ContainerState::Running,
            bollard::models::ContainerStateStatusEnum::PAUSED => ContainerState::Paused,
            bollard::models::ContainerStateStatusEnum::RESTARTING => ContainerState::Restarting,
            bollard::models::ContainerStateStatusEnum::REMOVING => ContainerState::Removing,
            bollard::models::ContainerStateStatusEnum::DEAD => ContainerState::Dead,
            _ => ContainerState::Exited,
        })
        .unwrap_or(ContainerState::Exited)
}

fn ports_from_summary(
    ports: Option<Vec<bollard::models::PortSummary>>,
) -> HashMap<String, Vec<PortBinding>> {
    let mut mapped: HashMap<String, Vec<PortBinding>> = HashMap::new();
    for port in ports.unwrap_or_default() {
        let proto = port
            .typ
            .map(|t| format!("{:?}", t).to_lowercase())
            .unwrap_or_else(|| "tcp".to_string());
        let key = format!("{}/{}", port.private_port, proto);
        let bindings = mapped.entry(key).or_default();
        if let Some(public) = port.public_port {
            bindings.push(PortBinding {
                host_ip: port.ip.clone().unwrap_or_default(),
                host_port: public.to_string(),
            });
        }
    }
    mapped
}

fn ports_from_inspect(
    ports: Option<HashMap<String, Option<Vec<bollard::models::PortBinding>>>>,
) -> HashMap<String, Vec<PortBinding>> {
    ports
        .unwrap_or_default()
        .into_iter()
        .map(|(key, bindings)| {
            let bindings = bindings
                .unwrap_or_default()
                .into_iter()
                .map(|b| PortBinding {
                    host_ip: b.host_ip.unwrap_or_default(),
                    host_port: b.host_port.unwrap_or_default(),
                })
                .collect();
            (key, bindings)
        })
        .collect()
}

fn container_from_summary(summary: ContainerSummary) -> Container {
    Container {
        id: short_id(summary.id.as_deref().unwrap_or_default()),
        name: primary_name(summary.names.as_deref().unwrap_or_default()),
        status: state_from_summary(summary.state),
        image: image_from_summary(summary.image, summary.image_id),
        created: summary.created.map(|t| t.to_string()).unwrap_or_default(),
        ports: ports_from_summary(summary.ports),
        labels: summary.labels.unwrap_or_default(),
        networks: None,
        mounts: None,
    }
}

fn container_from_inspect(details: ContainerInspectResponse, image: String) -> Container {
    Container {
        id: short_id(details.id.as_deref().unwrap_or_default()),
        name: details
            .name
            .unwrap_or_default()
            .trim_start_matches('/')
            .to_string(),
        status: state_from_inspect(details.state.as_ref()),
        image,
        created: details.created.map(|dt| dt.to_string()).unwrap_or_default(),
        ports: ports_from_inspect(details.network_settings.and_then(|ns| ns.ports)),
        labels: details.config.and_then(|c| c.labels).unwrap_or_default(),
        networks: None,
        mounts: None,
    }
}

// =============================================================================
// DockerRepository
// =============================================================================

/// Engine adapter backed by bollard.
///
/// The connection handle is constructed once by [`DockerRepository::connect`]
/// at process start and never rebuilt: a failed attempt leaves the handle
/// absent and every availability probe reports false for the rest of the
/// process lifetime. After construction the handle is only ever read.
pub struct DockerRepository {
    client: Option<Docker>,
}

impl DockerRepository {
    /// Connect to the local engine. Does not probe liveness; a handle can be
    /// created for a socket whose daemon is down.
    pub fn connect(config: &EngineConfig) -> Self {
        let client = match &config.socket {
            Some(path) => Docker::connect_with_unix(
                path,
                config.connect_timeout.as_secs(),
                bollard::API_DEFAULT_VERSION,
            ),
            None => Docker::connect_with_local_defaults(),
        };

        match client {
            Ok(client) => Self {
                client: Some(client),
            },
            Err(e) => {
                tracing::warn!("failed to create engine client: {e}");
                Self { client: None }
            }
        }
    }

    fn client(&self) -> Result<&Docker, EngineError> {
        self.client
            .as_ref()
            .ok_or_else(|| EngineError::operation("engine connection was not established"))
    }

    /// Resolve the display reference for a backing image.
    async fn image_label(&self, image_id: &str) -> Result<String, EngineError> {
        let client = self.client()?;
        let inspect = client
            .inspect_image(image_id)
            .await
            .map_err(map_operation_error)?;
        let tags = inspect.repo_tags.unwrap_or_default();
        Ok(image_display(&tags, inspect.id.as_deref().unwrap_or(image_id)))
    }

    /// Pull an image, consuming the progress stream to completion.
    async fn pull_image(&self, image: &str) -> Result<(), EngineError> {
        let client = self.client()?;
        tracing::debug!(%image, "pulling image");

        let opts = CreateImageOptions {
            from_image: Some(image.to_string()),
            ..Default::default()
        };

        let mut stream = client.create_image(Some(opts), None, None);
        while let Some(progress) = stream.next().await {
            progress.map_err(map_operation_error)?;
        }

        Ok(())
    }

    /// Inspect a container and serialize it with the shared image rule.
    async fn fetch_container(&self, id: &str) -> Result<Container, EngineError> {
        let client = self.client()?;
        let details = client
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(map_operation_error)?;
        let image_id = details.image.clone().unwrap_or_default();
        let image = self.image_label(&image_id).await?;
        Ok(container_from_inspect(details, image))
    }
}

#[async_trait]
impl ContainerRepository for DockerRepository {
    async fn is_available(&self) -> bool {
        match &self.client {
            Some(client) => client.ping().await.is_ok(),
            None => false,
        }
    }

    async fn list_containers(
        &self,
        include_stopped: bool,
    ) -> Result<Vec<Container>, EngineError> {
        let client = self.client()?;
        let opts = ListContainersOptions {
            all: include_stopped,
            ..Default::default()
        };

        let summaries = client
            .list_containers(Some(opts))
            .await
            .map_err(map_operation_error)?;

        Ok(summaries.into_iter().map(container_from_summary).collect())
    }

    async fn get_container_details(&self, id: &str) -> Result<Container, EngineError> {
        let client = self.client()?;
        let details = client
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(|e| map_lookup_error(e, id))?;

        let mut networks: Vec<String> = details
            .network_settings
            .as_ref()
            .and_then(|ns| ns.networks.as_ref())
            .map(|nets| nets.keys().cloned().collect())
            .unwrap_or_default();
        networks.sort();

        let mounts: Vec<String> = details
            .mounts
            .as_ref()
            .map(|ms| ms.iter().filter_map(|m| m.source.clone()).collect())
            .unwrap_or_default();

        let image_id = details.image.clone().unwrap_or_default();
        let image = self.image_label(&image_id).await?;

        let mut container = container_from_inspect(details, image);
        container.networks = Some(networks);
        container.mounts = Some(mounts);
        Ok(container)
    }

    async fn create_container(
        &self,
        image: &str,
        name: Option<&str>,
    ) -> Result<Container, EngineError> {
        let client = self.client()?;

        let body = ContainerCreateBody {
            image: Some(image.to_string()),
            ..Default::default()
        };
        let opts = CreateContainerOptions {
            name: name.map(str::to_string),
            ..Default::default()
        };

        // Image existence is not pre-validated: a missing image surfaces as
        // a 404 on create, after which a pull is attempted once.
        let created = match client
            .create_container(Some(opts.clone()), body.clone())
            .await
        {
            Ok(response) => response,
            Err(bollard::errors::Error::DockerResponseServerError {
                status_code: 404, ..
            }) => {
                self.pull_image(image).await?;
                client
                    .create_container(Some(opts), body)
                    .await
                    .map_err(map_operation_error)?
            }
            Err(e) => return Err(map_operation_error(e)),
        };

        client
            .start_container(&created.id, None::<StartContainerOptions>)
            .await
            .map_err(map_operation_error)?;

        tracing::debug!(id = %created.id, %image, "container started");
        self.fetch_container(&created.id).await
    }

    async fn delete_running_container(&self, id: &str) -> Result<(), EngineError> {
        let client = self.client()?;

        // The inspect resolves the id and yields the live status in one
        // probe. The removal below is a separate engine call; a status
        // change by an external actor in between is not detected.
        let details = client
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(|e| map_lookup_error(e, id))?;

        if state_from_inspect(details.state.as_ref()) != ContainerState::Running {
            return Err(EngineError::NotRunning { id: id.to_string() });
        }

        let opts = RemoveContainerOptions {
            force: true,
            ..Default::default()
        };
        client
            .remove_container(id, Some(opts))
            .await
            .map_err(|e| map_lookup_error(e, id))?;

        tracing::debug!(%id, "container removed");
        Ok(())
    }

    async fn list_running_container_options(&self) -> Result<Vec<ContainerOption>, EngineError> {
        let client = self.client()?;
        let opts = ListContainersOptions {
            all: false,
            ..Default::default()
        };

        let summaries = client
            .list_containers(Some(opts))
            .await
            .map_err(map_operation_error)?;

        Ok(summaries
            .into_iter()
            .map(|summary| {
                let id = short_id(summary.id.as_deref().unwrap_or_default());
                let name = primary_name(summary.names.as_deref().unwrap_or_default());
                let image = image_from_summary(summary.image, summary.image_id);
                ContainerOption::new(id, name, image)
            })
            .collect())
    }
}
