// ABOUTME: Engine-assigned container identifier.
// ABOUTME: Newtype over the raw id string so it cannot be mixed up with other strings.

use serde::{Deserialize, Serialize};

/// Identifier the engine assigned to a container instance.
///
/// Holding a `ContainerId` means a handle is associated with an
/// engine-tracked container; it says nothing about whether that container
/// is currently running.
#[must_use = "IDs reference resources and should not be ignored"]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
