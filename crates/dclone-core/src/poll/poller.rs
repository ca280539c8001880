//! Idle/Polling state machine driving fetch, detect and dispatch cycles.
//!
//! The baseline and preference store move into the polling task on
//! [`Poller::enable`] and come back when the task exits, so a cycle never
//! shares them. Disabling cancels the pending timer only: a cycle already
//! fetching runs to completion and its result is dropped.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::errors::PollError;
use super::types::{PollerEvent, PollerSettings, PollerState};
use crate::baseline::ProgressBaseline;
use crate::detect::{ProgressIncreaseEvent, detect};
use crate::fetch::StatusSource;
use crate::notify::{NotificationBackend, dispatch};
use crate::preferences::{KeyValueStore, PreferenceStore};

/// State owned by whichever side currently holds it: the poller when idle,
/// the polling task while running.
struct PollContext<K> {
    preferences: PreferenceStore<K>,
    baseline: ProgressBaseline,
    seeded: bool,
}

/// Shared, read-only collaborators of a cycle.
#[derive(Clone)]
struct CycleDeps {
    source: Arc<dyn StatusSource>,
    backend: Arc<dyn NotificationBackend>,
    settings: PollerSettings,
    events: mpsc::UnboundedSender<PollerEvent>,
}

struct RunningTask<K> {
    cancel: CancellationToken,
    handle: JoinHandle<PollContext<K>>,
}

pub struct Poller<K> {
    deps: CycleDeps,
    context: Option<PollContext<K>>,
    running: Option<RunningTask<K>>,
}

impl<K: KeyValueStore + 'static> Poller<K> {
    /// Create an idle poller. Cycle results arrive on the returned receiver.
    pub fn new(
        source: Arc<dyn StatusSource>,
        backend: Arc<dyn NotificationBackend>,
        preferences: PreferenceStore<K>,
        settings: PollerSettings,
    ) -> (Self, mpsc::UnboundedReceiver<PollerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let poller = Self {
            deps: CycleDeps {
                source,
                backend,
                settings,
                events: tx,
            },
            context: Some(PollContext {
                preferences,
                baseline: ProgressBaseline::new(),
                seeded: false,
            }),
            running: None,
        };
        (poller, rx)
    }

    pub fn state(&self) -> PollerState {
        match &self.running {
            Some(task) if !task.cancel.is_cancelled() => PollerState::Polling,
            _ => PollerState::Idle,
        }
    }

    /// Idle to Polling: run one cycle now, then one per interval.
    ///
    /// A no-op while already polling. If a previous task is still finishing
    /// its last cycle, waits for it first.
    pub async fn enable(&mut self) -> Result<(), PollError> {
        if self.state() == PollerState::Polling {
            debug!(event = "core.poll.enable_skipped", reason = "already polling");
            return Ok(());
        }

        self.reclaim().await?;
        let context = self.context.take().ok_or(PollError::ContextLost)?;

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_loop(context, self.deps.clone(), cancel.clone()));
        self.running = Some(RunningTask { cancel, handle });

        info!(
            event = "core.poll.enable_completed",
            interval_secs = self.deps.settings.interval.as_secs(),
            backend = self.deps.backend.name(),
        );
        Ok(())
    }

    /// Polling to Idle: cancel the pending re-entry.
    pub fn disable(&mut self) {
        if let Some(task) = &self.running
            && !task.cancel.is_cancelled()
        {
            task.cancel.cancel();
            info!(event = "core.poll.disable_completed");
        }
    }

    /// Disable and wait for the polling task to hand its state back.
    pub async fn shutdown(&mut self) -> Result<(), PollError> {
        self.disable();
        self.reclaim().await
    }

    /// Last-observed progress, available while idle.
    pub fn baseline(&self) -> Option<&ProgressBaseline> {
        self.context.as_ref().map(|c| &c.baseline)
    }

    /// Preference store, available while idle.
    pub fn preferences(&self) -> Option<&PreferenceStore<K>> {
        self.context.as_ref().map(|c| &c.preferences)
    }

    async fn reclaim(&mut self) -> Result<(), PollError> {
        let Some(task) = self.running.take() else {
            return Ok(());
        };
        match task.handle.await {
            Ok(context) => {
                self.context = Some(context);
                Ok(())
            }
            Err(e) => {
                warn!(event = "core.poll.task_failed", error = %e);
                Err(PollError::TaskFailed {
                    message: e.to_string(),
                })
            }
        }
    }
}

impl<K> Drop for Poller<K> {
    fn drop(&mut self) {
        if let Some(task) = &self.running {
            task.cancel.cancel();
        }
    }
}

async fn run_loop<K: KeyValueStore>(
    mut context: PollContext<K>,
    deps: CycleDeps,
    cancel: CancellationToken,
) -> PollContext<K> {
    info!(event = "core.poll.loop_started");
    loop {
        run_cycle(&mut context, &deps, &cancel).await;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(deps.settings.interval) => {}
        }
    }
    info!(event = "core.poll.loop_stopped");
    context
}

async fn run_cycle<K: KeyValueStore>(
    context: &mut PollContext<K>,
    deps: &CycleDeps,
    cancel: &CancellationToken,
) {
    debug!(event = "core.poll.cycle_started");
    let result = deps.source.fetch().await;

    if cancel.is_cancelled() {
        debug!(event = "core.poll.cycle_discarded", reason = "disabled during fetch");
        return;
    }

    let batch = match result {
        Ok(batch) => batch,
        Err(e) if e.is_rate_limited() => {
            info!(event = "core.poll.fetch_rate_limited");
            return;
        }
        Err(e) => {
            warn!(event = "core.poll.fetch_failed", error = %e);
            emit(
                &deps.events,
                PollerEvent::Alert {
                    message: format!("Error fetching data - diablo2.io may be down ({})", e),
                },
            );
            return;
        }
    };

    if deps.settings.seed_on_start && !context.seeded {
        context.baseline.seed(&batch);
    } else {
        let preferences = context.preferences.load().clone();
        let events = detect(&batch, &preferences, &mut context.baseline);
        if !events.is_empty() {
            let delivered = deliver(&events, &deps.backend).await;
            emit(
                &deps.events,
                PollerEvent::ProgressIncreased { events, delivered },
            );
        }
    }
    context.seeded = true;

    info!(event = "core.poll.cycle_completed", rows = batch.len());
    emit(&deps.events, PollerEvent::StatusUpdated { snapshots: batch });
}

/// Backends shell out and wait on the child, so delivery runs on the
/// blocking pool and the runtime thread stays free for signals and timers.
async fn deliver(
    events: &[ProgressIncreaseEvent],
    backend: &Arc<dyn NotificationBackend>,
) -> usize {
    let events = events.to_vec();
    let backend = Arc::clone(backend);
    match tokio::task::spawn_blocking(move || dispatch(&events, backend.as_ref())).await {
        Ok(delivered) => delivered,
        Err(e) => {
            warn!(event = "core.poll.dispatch_failed", error = %e);
            0
        }
    }
}

fn emit(tx: &mpsc::UnboundedSender<PollerEvent>, event: PollerEvent) {
    if tx.send(event).is_err() {
        debug!(event = "core.poll.event_dropped", reason = "receiver closed");
    }
}
