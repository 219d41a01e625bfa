// ABOUTME: Runtime detection logic for the local host.
// ABOUTME: Checks for Podman sockets first, then Docker, unless explicitly configured.

use super::types::{DOCKER_SOCKET, ROOTFUL_PODMAN_SOCKET, RuntimeConfig, RuntimeInfo, RuntimeType};
use std::path::Path;

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked Podman and Docker sockets)")]
    NoRuntimeFound,
}

/// Detect the container runtime on the local system.
///
/// If `config` names a runtime, it is used as-is with its socket (or the
/// runtime's default socket). A socket without a runtime type is assumed to
/// be Docker-compatible and reported as Docker.
///
/// Otherwise detection order is:
/// 1. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 2. Rootful Podman socket (`/run/podman/podman.sock`)
/// 3. Docker socket (`/var/run/docker.sock`)
pub fn detect_local(config: Option<&RuntimeConfig>) -> Result<RuntimeInfo, DetectionError> {
    if let Some(cfg) = config.filter(|c| c.is_explicit()) {
        let runtime_type = cfg.runtime.unwrap_or(RuntimeType::Docker);
        let socket_path = cfg
            .socket
            .clone()
            .unwrap_or_else(|| runtime_type.default_socket().to_string());
        return Ok(RuntimeInfo {
            runtime_type,
            socket_path,
        });
    }

    // 1. Rootless Podman
    if let Some(uid) = get_uid() {
        let rootless_socket = format!("/run/user/{}/podman/podman.sock", uid);
        if Path::new(&rootless_socket).exists() {
            return Ok(RuntimeInfo {
                runtime_type: RuntimeType::Podman,
                socket_path: rootless_socket,
            });
        }
    }

    // 2. Rootful Podman
    if Path::new(ROOTFUL_PODMAN_SOCKET).exists() {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Podman,
            socket_path: ROOTFUL_PODMAN_SOCKET.to_string(),
        });
    }

    // 3. Docker
    if Path::new(DOCKER_SOCKET).exists() {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Docker,
            socket_path: DOCKER_SOCKET.to_string(),
        });
    }

    Err(DetectionError::NoRuntimeFound)
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}
