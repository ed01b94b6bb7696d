use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::shutdown::ShutdownHandle;
use crate::ui::scheduler::TimerEvent;

/// How often the input thread re-checks the shutdown flag.
const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// A scheduled timer fired.
    Timer(TimerEvent),
}

pub type EventSender = UnboundedSender<AppEvent>;

pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: EventSender,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { rx, tx }
    }

    /// Read terminal input on a dedicated thread until shutdown.
    pub fn spawn_input(&self, shutdown: ShutdownHandle) {
        let event_tx = self.tx.clone();

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                break;
            }

            let ready = match event::poll(INPUT_POLL) {
                Ok(ready) => ready,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to poll terminal input");
                    break;
                }
            };
            if !ready {
                continue;
            }

            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to read terminal input");
                    break;
                }
            };
            if event_tx.send(app_event).is_err() {
                break;
            }
        });
    }

    /// Turn Ctrl+C delivered as a signal (not as a key) into a shutdown.
    pub fn spawn_signal_listener(&self, shutdown: ShutdownHandle) {
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.signal();
            }
        });
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }
}
