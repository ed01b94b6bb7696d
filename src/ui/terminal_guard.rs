use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

/// Terminal modes the storefront has switched on so far.
#[derive(Debug, Default)]
struct Modes {
    raw: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
}

impl Modes {
    /// Undo in reverse order of setup.
    fn unwind(self) {
        let mut stdout = io::stdout();
        if self.cursor_hidden {
            let _ = stdout.execute(Show);
        }
        if self.alternate_screen {
            let _ = stdout.execute(LeaveAlternateScreen);
        }
        if self.raw {
            let _ = disable_raw_mode();
        }
    }
}

/// Hands the terminal back exactly once: on drop, or from the panic hook.
///
/// A setup that fails halfway only unwinds the modes it managed to enable.
pub struct TerminalGuard {
    modes: Arc<Mutex<Option<Modes>>>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            modes: Arc::new(Mutex::new(Some(Modes::default()))),
        }
    }

    fn record(&self, enable: impl FnOnce(&mut Modes)) {
        if let Some(modes) = self.modes.lock().as_mut() {
            enable(modes);
        }
    }

    fn install_panic_hook(&self) {
        let modes = Arc::clone(&self.modes);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let taken = modes.lock().take();
            if let Some(taken) = taken {
                taken.unwind();
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        let taken = self.modes.lock().take();
        if let Some(taken) = taken {
            taken.unwind();
        }
    }

    #[cfg(test)]
    fn is_restored(&self) -> bool {
        self.modes.lock().is_none()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let guard = TerminalGuard::new();

    enable_raw_mode()?;
    guard.record(|modes| modes.raw = true);

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    guard.record(|modes| modes.alternate_screen = true);
    stdout.execute(TermClear(ClearType::All))?;

    stdout.execute(Hide)?;
    guard.record(|modes| modes.cursor_hidden = true);

    guard.install_panic_hook();
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_happens_once() {
        // Nothing recorded, so unwinding leaves the test terminal alone.
        let guard = TerminalGuard::new();
        assert!(!guard.is_restored());

        guard.restore();
        assert!(guard.is_restored());
        guard.restore();
        assert!(guard.is_restored());
    }

    #[test]
    fn modes_recorded_after_restore_are_dropped() {
        let guard = TerminalGuard::new();
        guard.restore();
        guard.record(|modes| modes.raw = true);
        assert!(guard.is_restored());
    }
}
