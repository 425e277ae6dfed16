// ABOUTME: Container engine layer: capability contract, read models, and
// ABOUTME: the bollard adapter that normalizes engine data and failures.

mod docker;
mod error;
mod model;
mod repository;

pub use docker::DockerRepository;
pub use error::{EngineError, EngineErrorKind};
pub use model::{Container, ContainerOption, ContainerState, PortBinding};
pub use repository::ContainerRepository;
