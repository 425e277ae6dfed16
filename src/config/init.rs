// ABOUTME: Config scaffolding for new deployments.
// ABOUTME: Creates a commented stevedore.yml template.

use std::path::Path;

use crate::error::{Error, Result};

use super::CONFIG_FILENAME;

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, TEMPLATE)?;

    Ok(())
}

const TEMPLATE: &str = r#"listen:
  host: 127.0.0.1
  port: 8000

engine:
  # Explicit engine socket path. Defaults to the local Docker socket.
  # socket: /var/run/docker.sock
  connect_timeout: 30s
"#;
