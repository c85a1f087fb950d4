//! Stateful content loader
//!
//! Owns the load lifecycle a page component walks through: starts Idle
//! with the fallback model, goes Loading on each fetch, then Ready with
//! merged content or Failed with the fallback and an error message.
//!
//! Concurrent loads are generation-counted. Only the newest load may
//! publish its result; an older in-flight fetch that finishes late is
//! discarded so the state never rolls backwards.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use boothkit_common::ContentView;
use tracing::{debug, warn};

use crate::resolver::ContentResolver;

/// Where a consumer is in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No load attempted yet; the model is the compiled fallback.
    Idle,
    /// A load is in flight; the previous model is still served.
    Loading,
    /// The last load succeeded; the model is merged content.
    Ready,
    /// The last load failed; the model is the compiled fallback.
    Failed,
}

/// Point-in-time copy of a consumer's state.
#[derive(Debug, Clone)]
pub struct Snapshot<V> {
    pub phase: LoadPhase,
    pub model: V,
    pub error: Option<String>,
}

struct State<V> {
    phase: LoadPhase,
    model: V,
    error: Option<String>,
}

struct Inner<V> {
    state: Mutex<State<V>>,
    generation: AtomicU64,
}

/// Shareable handle over one resolved content view.
///
/// Clones share state: a `load` through one handle is visible in every
/// clone's `snapshot`.
pub struct ContentConsumer<V: ContentView> {
    resolver: ContentResolver,
    inner: Arc<Inner<V>>,
}

impl<V: ContentView> Clone for ContentConsumer<V> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: ContentView> ContentConsumer<V> {
    /// New consumer in the Idle phase, serving the fallback model.
    pub fn new(resolver: ContentResolver) -> Self {
        let model = resolver.fallback::<V>();
        Self {
            resolver,
            inner: Arc::new(Inner {
                state: Mutex::new(State {
                    phase: LoadPhase::Idle,
                    model,
                    error: None,
                }),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn resolver(&self) -> &ContentResolver {
        &self.resolver
    }

    /// Fetch, merge, and publish a new model.
    ///
    /// Returns the snapshot as of this load's completion. If a newer
    /// load started while this one was in flight, the result is
    /// discarded and the current state is returned untouched.
    pub async fn load(&self) -> Snapshot<V> {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.inner.state.lock().unwrap();
            state.phase = LoadPhase::Loading;
        }

        let outcome = self.resolver.client().try_fetch_document().await;

        let mut state = self.inner.state.lock().unwrap();
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded load result");
            return Snapshot {
                phase: state.phase,
                model: state.model.clone(),
                error: state.error.clone(),
            };
        }

        match outcome {
            Ok(document) => {
                state.phase = LoadPhase::Ready;
                state.model = self.resolver.resolve_in(&document);
                state.error = None;
            }
            Err(e) => {
                warn!(error = %e, "content load failed, serving fallback");
                state.phase = LoadPhase::Failed;
                state.model = self.resolver.fallback();
                state.error = Some(e.to_string());
            }
        }

        Snapshot {
            phase: state.phase,
            model: state.model.clone(),
            error: state.error.clone(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<V> {
        let state = self.inner.state.lock().unwrap();
        Snapshot {
            phase: state.phase,
            model: state.model.clone(),
            error: state.error.clone(),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.inner.state.lock().unwrap().phase
    }

    /// Clone of the currently served model.
    pub fn model(&self) -> V {
        self.inner.state.lock().unwrap().model.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.state.lock().unwrap().error.clone()
    }
}
