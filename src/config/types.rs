use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub menu: Catalog,
}

/// Delays of the screen transition and the order confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Fade-out before the screen swaps (default: 300).
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,
    /// Fade-in after the screen swaps (default: 50).
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u64,
    /// How long the orders screen shows a new order number (default: 500).
    #[serde(default = "default_order_confirmation_ms")]
    pub order_confirmation_ms: u64,
    /// Delay before the single retry of host initialization (default: 300).
    #[serde(default = "default_host_retry_ms")]
    pub host_retry_ms: u64,
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Reserve a header band at the top of the screen.
    #[serde(default)]
    pub full_screen: bool,
    /// Height of the header band in rows, used when `full_screen` is set.
    #[serde(default = "default_header_padding")]
    pub header_padding: u16,
    /// Terminal window title set during initialization.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_fade_out_ms() -> u64 {
    300
}

fn default_fade_in_ms() -> u64 {
    50
}

fn default_order_confirmation_ms() -> u64 {
    500
}

fn default_host_retry_ms() -> u64 {
    300
}

fn default_header_padding() -> u16 {
    2
}

fn default_title() -> String {
    "Surf Coffee".to_string()
}

impl TimingConfig {
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    pub fn order_confirmation(&self) -> Duration {
        Duration::from_millis(self.order_confirmation_ms)
    }

    pub fn host_retry(&self) -> Duration {
        Duration::from_millis(self.host_retry_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fade_out_ms: default_fade_out_ms(),
            fade_in_ms: default_fade_in_ms(),
            order_confirmation_ms: default_order_confirmation_ms(),
            host_retry_ms: default_host_retry_ms(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            full_screen: false,
            header_padding: default_header_padding(),
            title: default_title(),
        }
    }
}
