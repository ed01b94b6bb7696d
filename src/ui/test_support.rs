//! In-crate fixtures: an app whose timers only fire when a test says so.

use std::time::Duration;

use crate::config::Config;
use crate::host::{HostBridge, HostError};
use crate::ui::app::App;
use crate::ui::scheduler::{Scheduler, TimerEvent, TimerSlot};

pub(crate) struct NoopScheduler;

impl Scheduler for NoopScheduler {
    fn schedule(&mut self, _delay: Duration, _event: TimerEvent) {}
    fn cancel(&mut self, _slot: TimerSlot) {}
    fn cancel_all(&mut self) {}
}

pub(crate) struct NoHost;

impl HostBridge for NoHost {
    fn is_present(&self) -> bool {
        false
    }
    fn full_screen_enabled(&self) -> bool {
        false
    }
    fn header_padding(&self) -> u16 {
        0
    }
    fn initialize(&mut self) -> Result<(), HostError> {
        Err(HostError::NotAvailable)
    }
}

pub(crate) fn app() -> App {
    App::new(&Config::default(), Box::new(NoopScheduler), Box::new(NoHost))
}

/// Run the latest transition's swap and settle by hand.
pub(crate) fn settle(app: &mut App) {
    let generation = app.navigation().generation();
    app.on_timer(TimerEvent::TransitionSwap { generation });
    app.on_timer(TimerEvent::TransitionSettle { generation });
}
