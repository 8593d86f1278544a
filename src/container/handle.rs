// ABOUTME: ContainerHandle: lifecycle operations over one engine-tracked container.
// ABOUTME: Every operation runs one engine command and classifies its outcome.

use crate::engine::{classify, CliInvoker, EngineError, EngineErrorKind, EngineInvoker, Result};
use crate::types::ContainerId;

use super::options::ContainerOptions;

/// Drives the lifecycle of a single container through the engine CLI.
///
/// A handle pairs caller-supplied [`ContainerOptions`] with the identity
/// the engine assigned on start. The identity being tracked means the
/// handle is associated with an engine-side container instance; whether
/// that instance is running, stopped, or gone is only ever learned by
/// asking the engine. Mutating operations take `&mut self`, so a handle
/// cannot be raced against itself from safe code.
pub struct ContainerHandle<I = CliInvoker> {
    options: ContainerOptions,
    id: Option<ContainerId>,
    invoker: I,
}

impl ContainerHandle<CliInvoker> {
    /// Create a handle that drives the engine CLI directly.
    pub fn new(options: ContainerOptions) -> Self {
        Self::with_invoker(options, CliInvoker)
    }
}

impl<I: EngineInvoker> ContainerHandle<I> {
    /// Create a handle with a custom invoker.
    pub fn with_invoker(options: ContainerOptions, invoker: I) -> Self {
        Self {
            options,
            id: None,
            invoker,
        }
    }

    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    /// Mutable access to the configuration, for adjusting it between runs.
    pub fn options_mut(&mut self) -> &mut ContainerOptions {
        &mut self.options
    }

    /// The tracked container identity, if any.
    pub fn id(&self) -> Option<&ContainerId> {
        self.id.as_ref()
    }

    /// Associate the handle with a previously known identity.
    ///
    /// No validation and no engine call; used to re-adopt a container
    /// across restarts of the calling process.
    pub fn attach(&mut self, id: ContainerId) {
        self.id = Some(id);
    }

    /// Drop the tracked identity without touching the engine.
    pub fn detach(&mut self) {
        self.id = None;
    }

    /// Start the container detached and record the identity the engine
    /// prints.
    ///
    /// Fails with [`EngineError::ImageNotSet`] or
    /// [`EngineError::AlreadyStarted`] before invoking anything. A
    /// successful invocation must print exactly one identifier line; any
    /// other shape is [`EngineError::MalformedOutput`] and the handle
    /// stays unassociated, the engine's exit status notwithstanding.
    pub async fn start(&mut self) -> Result<()> {
        if self.options.image.is_empty() {
            return Err(EngineError::ImageNotSet);
        }
        if self.id.is_some() {
            return Err(EngineError::AlreadyStarted);
        }

        let args = self.options.run_args();
        let outcome = self
            .invoker
            .invoke(self.options.engine_binary(), &args)
            .await;

        if outcome.is_success() {
            // One identifier line with a trailing newline, nothing else.
            let parsed = match outcome.output.split('\n').collect::<Vec<_>>().as_slice() {
                [id, ""] if !id.is_empty() => Some(ContainerId::new(*id)),
                _ => None,
            };
            match parsed {
                Some(id) => {
                    tracing::debug!(container = %id, "container started");
                    self.id = Some(id);
                    Ok(())
                }
                None => Err(EngineError::MalformedOutput {
                    output: outcome.output,
                }),
            }
        } else {
            classify(outcome)
        }
    }

    /// Stop the container, optionally removing it afterwards.
    ///
    /// A plain stop leaves the identity tracked: the container still
    /// exists engine-side and can be inspected or removed later.
    pub async fn stop(&mut self, remove: bool) -> Result<()> {
        let id = self.tracked_id()?.clone();

        tracing::debug!(container = %id, remove, "stopping container");
        let args = vec!["stop".to_string(), id.into_inner()];
        let outcome = self
            .invoker
            .invoke(self.options.engine_binary(), &args)
            .await;
        classify(outcome)?;

        if remove { self.remove().await } else { Ok(()) }
    }

    /// Remove the container and clear the tracked identity.
    pub async fn remove(&mut self) -> Result<()> {
        let id = self.tracked_id()?.clone();

        tracing::debug!(container = %id, "removing container");
        let args = vec!["rm".to_string(), id.into_inner()];
        let outcome = self
            .invoker
            .invoke(self.options.engine_binary(), &args)
            .await;
        classify(outcome)?;

        self.id = None;
        Ok(())
    }

    /// Succeeds when the container is running.
    pub async fn ensure_running(&self) -> Result<()> {
        self.probe().await
    }

    /// Succeeds when the container exists but is not running.
    ///
    /// A running container reports [`EngineError::AlreadyStarted`]; any
    /// classification other than not-running (notably
    /// [`EngineError::NotExist`]) propagates unchanged.
    pub async fn ensure_stopped(&self) -> Result<()> {
        match self.probe().await {
            Ok(()) => Err(EngineError::AlreadyStarted),
            Err(e) if e.kind() == EngineErrorKind::NotRunning => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Succeeds when the container exists, running or not.
    pub async fn ensure_exists(&self) -> Result<()> {
        match self.probe().await {
            Ok(()) | Err(EngineError::NotRunning { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    // The status checks share one probe command and differ only in how
    // they read the classified outcome: the exit status alone cannot
    // separate "exists but stopped" from "does not exist".
    async fn probe(&self) -> Result<()> {
        let id = self.tracked_id()?;

        let args = vec!["top".to_string(), id.to_string()];
        let outcome = self
            .invoker
            .invoke(self.options.engine_binary(), &args)
            .await;
        classify(outcome)
    }

    fn tracked_id(&self) -> Result<&ContainerId> {
        self.id.as_ref().ok_or(EngineError::IdNotSet)
    }
}
