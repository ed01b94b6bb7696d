pub mod app;
pub mod cart;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod orders;
pub mod render;
pub mod runtime;
pub mod scheduler;
pub mod terminal_guard;
#[cfg(test)]
mod test_support;
pub mod theme;
