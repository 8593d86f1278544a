// ABOUTME: Engine-facing layer: process invocation and output classification.
// ABOUTME: Everything that touches the external CLI or interprets its text lives here.

mod classify;
mod error;
mod invoker;

pub use classify::classify;
pub use error::{EngineError, EngineErrorKind, Result};
pub use invoker::{CliInvoker, EngineInvoker, InvokeOutcome};
