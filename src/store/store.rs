//! Stateful shell around the advice reducer.
//!
//! Owns the single `FetchState` cell, dispatches gateway fetches as tokio
//! tasks, and guards against out-of-order completions with a sequence
//! number: only the most recently issued fetch may apply its outcome.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

use crate::gateway::AdviceGateway;
use crate::mvi::Reducer;
use crate::store::intent::AdviceIntent;
use crate::store::reducer::AdviceReducer;
use crate::store::state::FetchState;

type Listener = Arc<dyn Fn(&FetchState) + Send + Sync>;

struct StoreInner {
    state: FetchState,
    /// Sequence number of the most recently issued fetch. Outcomes carrying
    /// an earlier number have been superseded and are dropped.
    latest_seq: u64,
    next_listener_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Advice-fetch state machine.
///
/// Cloning is cheap; all clones share the same state cell. One instance per
/// screen is the expected lifecycle, nothing requires a process-wide
/// singleton. Dropping the store releases in-flight request handles, there
/// is no other teardown.
#[derive(Clone)]
pub struct AdviceStore {
    inner: Arc<Mutex<StoreInner>>,
    gateway: Arc<dyn AdviceGateway>,
}

impl AdviceStore {
    pub fn new(gateway: Arc<dyn AdviceGateway>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                state: FetchState::Idle,
                latest_seq: 0,
                next_listener_id: 0,
                listeners: Vec::new(),
            })),
            gateway,
        }
    }

    /// Current state. No side effects, never blocks beyond the state lock.
    pub fn snapshot(&self) -> FetchState {
        self.inner.lock().state.clone()
    }

    /// Register a listener invoked synchronously after every applied
    /// transition. The returned handle detaches the listener when dropped,
    /// or explicitly via [`Subscription::unsubscribe`].
    pub fn subscribe(
        &self,
        listener: impl Fn(&FetchState) + Send + Sync + 'static,
    ) -> Subscription {
        let mut inner = self.inner.lock();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Kick off a fetch. Transitions to `Loading` before returning; the
    /// outcome is applied later by a spawned task, unless a newer request
    /// supersedes it first. Callable at any time, including while an
    /// earlier fetch is still in flight.
    ///
    /// Gateway failures never escape: they become the `Failed` state.
    ///
    /// Must be called from within a tokio runtime.
    pub fn request_advice(&self) {
        let seq = self.apply_issued();
        let store = self.clone();
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            let intent = match gateway.fetch_advice().await {
                Ok(record) => AdviceIntent::FetchSucceeded { record },
                Err(err) => {
                    debug!(%err, seq, "advice fetch failed");
                    AdviceIntent::FetchFailed
                }
            };
            store.apply_outcome(seq, intent);
        });
    }

    fn apply_issued(&self) -> u64 {
        let (seq, pending) = {
            let mut inner = self.inner.lock();
            inner.latest_seq += 1;
            let seq = inner.latest_seq;
            let state = std::mem::take(&mut inner.state);
            inner.state = AdviceReducer::reduce(state, AdviceIntent::RequestIssued);
            (seq, Self::capture(&inner))
        };
        Self::notify(pending);
        seq
    }

    fn apply_outcome(&self, seq: u64, intent: AdviceIntent) {
        let pending = {
            let mut inner = self.inner.lock();
            if seq != inner.latest_seq {
                debug!(seq, latest = inner.latest_seq, "dropping superseded fetch outcome");
                return;
            }
            let state = std::mem::take(&mut inner.state);
            inner.state = AdviceReducer::reduce(state, intent);
            Self::capture(&inner)
        };
        Self::notify(pending);
    }

    // Listeners run outside the lock so they may call `snapshot` freely;
    // the state they receive is the one captured with the transition.
    fn capture(inner: &StoreInner) -> (FetchState, Vec<Listener>) {
        (
            inner.state.clone(),
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
        )
    }

    fn notify((state, listeners): (FetchState, Vec<Listener>)) {
        for listener in listeners {
            listener(&state);
        }
    }
}

/// Handle returned by [`AdviceStore::subscribe`].
///
/// Detaches the listener when dropped, so a subscription scoped to a screen
/// dies with it. [`Subscription::unsubscribe`] makes the release explicit.
pub struct Subscription {
    inner: Weak<Mutex<StoreInner>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Removal happens in Drop.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
