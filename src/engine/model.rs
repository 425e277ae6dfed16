// ABOUTME: Read models mirroring container engine state at read time.
// ABOUTME: Container, ContainerState, ContainerOption, and port bindings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A container as reported by the engine.
///
/// The engine remains the single source of truth; this is a snapshot taken
/// at read time, never persisted. `networks` and `mounts` are populated only
/// by the single-item detail fetch and omitted from list output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    /// Short identifier, stable within the engine's lifetime.
    pub id: String,
    /// Human name.
    pub name: String,
    /// Lifecycle status as defined by the engine.
    pub status: ContainerState,
    /// First human tag of the backing image, else a short content id.
    pub image: String,
    /// Creation timestamp, engine-native value passed through as a string.
    pub created: String,
    /// Container port -> host bindings. Empty map when nothing is exposed.
    #[serde(default)]
    pub ports: HashMap<String, Vec<PortBinding>>,
    /// Label set. Empty map when unlabelled.
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Attached network names. Detail fetch only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<String>>,
    /// Host mount source paths. Detail fetch only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mounts: Option<Vec<String>>,
}

/// A single host binding for an exposed container port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortBinding {
    pub host_ip: String,
    pub host_port: String,
}

/// Container lifecycle state as defined by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Restarting,
    Removing,
    Exited,
    Dead,
}

impl std::fmt::Display for ContainerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContainerState::Created => "created",
            ContainerState::Running => "running",
            ContainerState::Paused => "paused",
            ContainerState::Restarting => "restarting",
            ContainerState::Removing => "removing",
            ContainerState::Exited => "exited",
            ContainerState::Dead => "dead",
        };
        write!(f, "{s}")
    }
}

/// Selection entry derived from a running container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerOption {
    /// Short identifier.
    pub value: String,
    /// Human label, `"{name} ({image})"`.
    pub label: String,
    pub container_name: String,
    pub image: String,
}

impl ContainerOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image: impl Into<String>) -> Self {
        let (name, image) = (name.into(), image.into());
        Self {
            value: id.into(),
            label: format!("{name} ({image})"),
            container_name: name,
            image,
        }
    }
}
