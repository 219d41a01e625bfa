// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Detects the local socket and exposes a bollard client behind ImageOps.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local};
pub use error::{ConnectionError, RuntimeError};
pub use traits::*;
pub use types::{RuntimeConfig, RuntimeInfo, RuntimeType};

use snafu::ResultExt;
use std::time::Duration;

/// Detect the local runtime and connect to it.
pub fn connect_local(
    config: &RuntimeConfig,
    timeout: Duration,
) -> Result<BollardRuntime, RuntimeError> {
    let info = detect_local(Some(config)).context(error::DetectionSnafu)?;
    tracing::debug!(
        runtime = %info.runtime_type,
        socket = %info.socket_path,
        "detected container runtime"
    );
    BollardRuntime::connect(&info, timeout).context(error::ConnectionSnafu)
}
