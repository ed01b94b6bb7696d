//! Bridge to the environment hosting the storefront.
//!
//! The host reports whether it is present, whether it runs full screen and
//! how much room its header needs. `App` initializes it once on mount and
//! retries a single time if the host was not present yet.

mod terminal;

use thiserror::Error;

pub use terminal::TerminalHost;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Host is not available")]
    NotAvailable,

    #[error("Failed to initialize host: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability object injected into `App`.
pub trait HostBridge: Send {
    fn is_present(&self) -> bool;

    fn full_screen_enabled(&self) -> bool;

    /// Rows the host header occupies in full-screen mode.
    fn header_padding(&self) -> u16;

    fn initialize(&mut self) -> Result<(), HostError>;
}

/// Host handshake progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostReadiness {
    #[default]
    Detecting,
    /// Host was not present at mount; one retry is scheduled.
    AwaitingRetry,
    Ready,
    /// The retry failed too. The storefront keeps working without it.
    Unavailable,
}
