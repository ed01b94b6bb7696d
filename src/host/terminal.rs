use std::io::{self, IsTerminal};

use crossterm::execute;
use crossterm::terminal::SetTitle;

use crate::config::HostConfig;

use super::{HostBridge, HostError};

/// Host bridge backed by the controlling terminal.
pub struct TerminalHost {
    full_screen: bool,
    header_padding: u16,
    title: String,
}

impl TerminalHost {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            full_screen: config.full_screen,
            header_padding: config.header_padding,
            title: config.title.clone(),
        }
    }
}

impl HostBridge for TerminalHost {
    fn is_present(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn full_screen_enabled(&self) -> bool {
        self.full_screen
    }

    fn header_padding(&self) -> u16 {
        self.header_padding
    }

    fn initialize(&mut self) -> Result<(), HostError> {
        if !self.is_present() {
            return Err(HostError::NotAvailable);
        }
        execute!(io::stdout(), SetTitle(&self.title))?;
        Ok(())
    }
}
