//! Shared test utilities: a recording scheduler and a fake host bridge.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use surf_coffee::config::Config;
use surf_coffee::host::{HostBridge, HostError};
use surf_coffee::ui::app::App;
use surf_coffee::ui::scheduler::{Scheduler, TimerEvent, TimerSlot};

/// Scheduler that never fires on its own. Tests fire timers by hand.
#[derive(Clone, Default)]
pub struct RecordingScheduler {
    pending: Arc<Mutex<HashMap<TimerSlot, (Duration, TimerEvent)>>>,
}

impl RecordingScheduler {
    pub fn pending(&self, slot: TimerSlot) -> Option<(Duration, TimerEvent)> {
        self.pending.lock().get(&slot).cloned()
    }

    pub fn take(&self, slot: TimerSlot) -> Option<TimerEvent> {
        self.pending.lock().remove(&slot).map(|(_, event)| event)
    }

    pub fn is_idle(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl Scheduler for RecordingScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        self.pending.lock().insert(event.slot(), (delay, event));
    }

    fn cancel(&mut self, slot: TimerSlot) {
        self.pending.lock().remove(&slot);
    }

    fn cancel_all(&mut self) {
        self.pending.lock().clear();
    }
}

/// Host bridge with scripted presence and initialization results.
pub struct FakeHost {
    pub present: bool,
    pub full_screen: bool,
    pub header_padding: u16,
    pub fail_initialize: bool,
    pub init_calls: Arc<AtomicUsize>,
}

impl FakeHost {
    pub fn present() -> Self {
        Self {
            present: true,
            full_screen: false,
            header_padding: 3,
            fail_initialize: false,
            init_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn absent() -> Self {
        Self {
            present: false,
            ..Self::present()
        }
    }
}

impl HostBridge for FakeHost {
    fn is_present(&self) -> bool {
        self.present
    }

    fn full_screen_enabled(&self) -> bool {
        self.full_screen
    }

    fn header_padding(&self) -> u16 {
        self.header_padding
    }

    fn initialize(&mut self) -> Result<(), HostError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_initialize {
            Err(HostError::NotAvailable)
        } else {
            Ok(())
        }
    }
}

/// App wired to a recording scheduler and a present host.
pub fn test_app() -> (App, RecordingScheduler) {
    let scheduler = RecordingScheduler::default();
    let app = App::new(
        &Config::default(),
        Box::new(scheduler.clone()),
        Box::new(FakeHost::present()),
    );
    (app, scheduler)
}

/// Fire the pending timer in `slot`. Returns false if nothing was pending.
pub fn fire(app: &mut App, scheduler: &RecordingScheduler, slot: TimerSlot) -> bool {
    match scheduler.take(slot) {
        Some(event) => {
            app.on_timer(event);
            true
        }
        None => false,
    }
}

/// Run the pending transition (swap, then settle) to completion.
pub fn finish_transition(app: &mut App, scheduler: &RecordingScheduler) {
    while fire(app, scheduler, TimerSlot::Transition) {}
}
