//! State-convergence waiter.
//!
//! Long-running operations (instance creation, resize, stop/start) are
//! asynchronous server-side: the call returns immediately and the resource
//! converges on its own time. [`wait_for_state`] drives that convergence by
//! repeatedly invoking a probe until the observed state label lands in the
//! target set, the probe itself fails, or the deadline passes.
//!
//! The waiter is synchronous within the calling task: there is no external
//! cancel signal besides the timeout, and no promise of preemption
//! mid-sleep. Callers that need cancellation wrap the call in their own
//! boundary.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, Instant};

/// Ceiling for the growing inter-probe backoff.
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Floor for the first backoff step, so a zero minimum interval cannot turn
/// the waiter into a busy loop.
const INITIAL_BACKOFF: Duration = Duration::from_millis(100);

/// What to do when a probe returns a label in neither the pending nor the
/// target set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// Treat the label as pending and keep polling (the remote API grows
    /// state labels over time; this is the historical behavior).
    #[default]
    Retry,
    /// Stop immediately with [`WaitError::UnexpectedState`].
    Fail,
}

/// Configuration for one wait.
///
/// Created per operation and consumed by a single [`wait_for_state`] call.
#[derive(Debug, Clone)]
pub struct WaitSpec {
    /// Labels that mean "still converging".
    pub pending: Vec<String>,
    /// Labels that mean "converged".
    pub target: Vec<String>,
    /// Overall deadline for the wait.
    pub timeout: Duration,
    /// Sleep before the first probe.
    pub delay: Duration,
    /// Lower bound on the time between probes.
    pub min_interval: Duration,
    /// Fixed inter-probe interval; when unset a doubling backoff (capped at
    /// ten seconds) is used instead.
    pub poll_interval: Option<Duration>,
    /// Policy for labels outside both sets.
    pub on_unknown: UnknownPolicy,
}

impl WaitSpec {
    /// Create a spec with the given label sets and the default timing
    /// (10 minute timeout, 10 second initial delay, 3 second minimum
    /// interval).
    pub fn new(pending: &[&str], target: &[&str]) -> Self {
        Self {
            pending: pending.iter().map(|s| s.to_string()).collect(),
            target: target.iter().map(|s| s.to_string()).collect(),
            timeout: Duration::from_secs(600),
            delay: Duration::from_secs(10),
            min_interval: Duration::from_secs(3),
            poll_interval: None,
            on_unknown: UnknownPolicy::default(),
        }
    }

    /// Set the overall deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the sleep before the first probe.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the minimum time between probes.
    pub fn min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Use a fixed inter-probe interval instead of the growing backoff.
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = Some(poll_interval);
        self
    }

    /// Fail fast on labels in neither the pending nor the target set.
    pub fn fail_on_unknown(mut self) -> Self {
        self.on_unknown = UnknownPolicy::Fail;
        self
    }

    fn is_target(&self, state: &str) -> bool {
        self.target.iter().any(|t| t == state)
    }

    fn is_pending(&self, state: &str) -> bool {
        self.pending.iter().any(|p| p == state)
    }
}

/// Why a wait did not converge.
#[derive(Debug, Error)]
pub enum WaitError<E> {
    /// The probe itself failed. Probe errors are never retried: the first
    /// one aborts the wait.
    #[error("probe failed: {0}")]
    Probe(E),

    /// The deadline passed before any target label was observed.
    #[error("timeout after {timeout:?} waiting for target state (last observed: {last_state:?})")]
    Timeout {
        /// The deadline that was exceeded.
        timeout: Duration,
        /// The most recent label the probe reported, if it reported any.
        last_state: Option<String>,
    },

    /// A label outside both sets was observed under
    /// [`UnknownPolicy::Fail`].
    #[error("unexpected state `{state}` observed while waiting")]
    UnexpectedState {
        /// The offending label.
        state: String,
    },
}

/// Poll `probe` until it reports a target state.
///
/// The probe returns the observed value together with its state label,
/// mirroring a read-only describe call. After the initial delay the waiter
/// loops: a probe error aborts immediately; a target label resolves the wait
/// with that probe's value; anything else sleeps for
/// `max(min_interval, backoff)` (or the fixed `poll_interval`) and retries,
/// as long as the next probe would still happen inside the timeout.
pub async fn wait_for_state<T, E, F, Fut>(
    spec: &WaitSpec,
    mut probe: F,
) -> Result<T, WaitError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(T, String), E>>,
{
    let start = Instant::now();
    if !spec.delay.is_zero() {
        sleep(spec.delay).await;
    }

    let mut last_state: Option<String> = None;
    let mut backoff = spec.min_interval.max(INITIAL_BACKOFF);

    loop {
        let (value, state) = probe().await.map_err(WaitError::Probe)?;

        if spec.is_target(&state) {
            tracing::debug!(
                state = %state,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "target state reached"
            );
            return Ok(value);
        }
        if !spec.is_pending(&state) && spec.on_unknown == UnknownPolicy::Fail {
            return Err(WaitError::UnexpectedState { state });
        }

        tracing::trace!(state = %state, "still waiting for target state");
        last_state = Some(state);

        let wait = spec
            .poll_interval
            .unwrap_or(backoff)
            .max(spec.min_interval);
        backoff = (backoff * 2).min(MAX_BACKOFF);

        if start.elapsed() + wait >= spec.timeout {
            return Err(WaitError::Timeout {
                timeout: spec.timeout,
                last_state,
            });
        }
        sleep(wait).await;
    }
}
