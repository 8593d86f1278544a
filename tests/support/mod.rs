// ABOUTME: Test support utilities.
// ABOUTME: Scripted engine invoker and tracing setup for integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Once};

use async_trait::async_trait;
use parking_lot::Mutex;

use dockhand::engine::{EngineInvoker, InvokeOutcome};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("dockhand=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[derive(Default)]
struct Inner {
    responses: Mutex<VecDeque<InvokeOutcome>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

/// Engine invoker that replays scripted outcomes and records every call.
///
/// Clones share state, so one copy goes into the handle under test and
/// the other stays behind for assertions.
#[derive(Clone, Default)]
pub struct ScriptedInvoker {
    inner: Arc<Inner>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_success(&self, output: &str) {
        self.inner
            .responses
            .lock()
            .push_back(InvokeOutcome::succeeded(output));
    }

    pub fn push_failure(&self, output: &str, reason: &str) {
        self.inner
            .responses
            .lock()
            .push_back(InvokeOutcome::failed(output, reason));
    }

    /// Every `(binary, args)` pair invoked so far, in order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.inner.calls.lock().clone()
    }
}

#[async_trait]
impl EngineInvoker for ScriptedInvoker {
    async fn invoke(&self, binary: &str, args: &[String]) -> InvokeOutcome {
        self.inner
            .calls
            .lock()
            .push((binary.to_string(), args.to_vec()));
        self.inner
            .responses
            .lock()
            .pop_front()
            .expect("scripted invoker ran out of responses")
    }
}
