// ABOUTME: Desired configuration for a single container.
// ABOUTME: Builds the order-significant argument list for the detached run.

use serde::{Deserialize, Serialize};

/// Engine binary used when none is configured.
pub const DEFAULT_ENGINE: &str = "docker";

/// Image tag used when none is configured.
pub const DEFAULT_TAG: &str = "latest";

/// Desired configuration for one container.
///
/// Only `image` is required. The list fields are opaque specifications
/// passed to the engine verbatim; their order is preserved but their
/// meaning is the engine's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContainerOptions {
    /// Engine binary name or path. Empty means [`DEFAULT_ENGINE`].
    #[serde(default)]
    pub engine: String,

    /// Image to run. Must be set before starting.
    pub image: String,

    /// Image tag. Empty means [`DEFAULT_TAG`].
    #[serde(default)]
    pub tag: String,

    /// Container name. Must be unique among running containers managed by
    /// the same engine instance. Empty means engine-assigned.
    #[serde(default)]
    pub name: String,

    /// Port publications (`-p`), e.g. `8080:80`.
    #[serde(default)]
    pub publish: Vec<String>,

    /// Volume mounts (`-v`), e.g. `/data:/var/lib/data`.
    #[serde(default)]
    pub volumes: Vec<String>,

    /// Links to other containers (`--link`).
    #[serde(default)]
    pub links: Vec<String>,

    /// Ulimit overrides (`--ulimit`), e.g. `nofile=262144:262144`.
    #[serde(default)]
    pub ulimits: Vec<String>,

    /// Environment variables (`-e`), e.g. `REDIS_PASSWORD=secret`.
    #[serde(default)]
    pub env: Vec<String>,
}

impl ContainerOptions {
    /// Engine binary to invoke, with the default applied.
    pub fn engine_binary(&self) -> &str {
        if self.engine.is_empty() {
            DEFAULT_ENGINE
        } else {
            &self.engine
        }
    }

    /// Fully qualified `image:tag` reference, with the default tag applied.
    pub fn image_ref(&self) -> String {
        let tag = if self.tag.is_empty() {
            DEFAULT_TAG
        } else {
            &self.tag
        };
        format!("{}:{}", self.image, tag)
    }

    /// Argument list for the detached run. Flag order matters to the
    /// engine's parser: name first, then the passthrough lists, image last.
    pub(crate) fn run_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(
            4 + 2 * (self.publish.len()
                + self.volumes.len()
                + self.links.len()
                + self.ulimits.len()
                + self.env.len()),
        );

        args.push("run".to_string());
        args.push("-d".to_string());
        if !self.name.is_empty() {
            args.push("--name".to_string());
            args.push(self.name.clone());
        }
        for publish in &self.publish {
            args.push("-p".to_string());
            args.push(publish.clone());
        }
        for volume in &self.volumes {
            args.push("-v".to_string());
            args.push(volume.clone());
        }
        for link in &self.links {
            args.push("--link".to_string());
            args.push(link.clone());
        }
        for ulimit in &self.ulimits {
            args.push("--ulimit".to_string());
            args.push(ulimit.clone());
        }
        for env in &self.env {
            args.push("-e".to_string());
            args.push(env.clone());
        }
        args.push(self.image_ref());

        args
    }
}
