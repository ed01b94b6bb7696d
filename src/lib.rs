//! Surf Coffee: a terminal storefront for ordering coffee.
//!
//! The library owns the storefront state (screen navigation, the cart and
//! the order signal) as MVI reducers; the binary hosts them in a ratatui UI.

pub mod catalog;
pub mod config;
pub mod host;
pub mod logging;
pub mod shutdown;
pub mod ui;
