// ABOUTME: Service layer between transport and the engine repository.

mod lifecycle;

pub use lifecycle::{EngineStatus, HealthReport, LifecycleService};
