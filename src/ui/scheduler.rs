//! Timer scheduling for transition phases and delayed state changes.
//!
//! Each timer occupies a slot. Scheduling into an occupied slot aborts the
//! earlier timer, so only the latest request in a slot can fire.

use std::collections::HashMap;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::ui::events::{AppEvent, EventSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    Transition,
    OrderSignal,
    HostRetry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Fade-out finished; swap to the pending screen.
    TransitionSwap { generation: u64 },
    /// Fade-in finished; lower the transition flag.
    TransitionSettle { generation: u64 },
    /// The orders screen has shown the new order number long enough.
    OrderSignalExpire { number: String },
    /// Second attempt at host initialization.
    HostRetry,
}

impl TimerEvent {
    pub fn slot(&self) -> TimerSlot {
        match self {
            TimerEvent::TransitionSwap { .. } | TimerEvent::TransitionSettle { .. } => {
                TimerSlot::Transition
            }
            TimerEvent::OrderSignalExpire { .. } => TimerSlot::OrderSignal,
            TimerEvent::HostRetry => TimerSlot::HostRetry,
        }
    }
}

/// One-shot timers delivered back to `App::on_timer`.
pub trait Scheduler: Send {
    /// Fire `event` after `delay`, replacing whatever occupies its slot.
    fn schedule(&mut self, delay: Duration, event: TimerEvent);

    fn cancel(&mut self, slot: TimerSlot);

    fn cancel_all(&mut self);
}

/// Scheduler that sleeps on the tokio runtime and posts `AppEvent::Timer`
/// into the UI event channel.
///
/// Dropping it aborts every pending timer.
pub struct TokioScheduler {
    tx: EventSender,
    runtime: Handle,
    pending: HashMap<TimerSlot, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Must be called from within a tokio runtime.
    pub fn new(tx: EventSender) -> Self {
        Self {
            tx,
            runtime: Handle::current(),
            pending: HashMap::new(),
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        let slot = event.slot();
        let tx = self.tx.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(AppEvent::Timer(event)).is_err() {
                tracing::trace!(?slot, "Timer fired after event loop closed");
            }
        });
        if let Some(previous) = self.pending.insert(slot, task) {
            previous.abort();
        }
    }

    fn cancel(&mut self, slot: TimerSlot) {
        if let Some(task) = self.pending.remove(&slot) {
            task.abort();
        }
    }

    fn cancel_all(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
