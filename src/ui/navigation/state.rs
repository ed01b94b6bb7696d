//! State for screen navigation.

use std::fmt;

use crate::ui::mvi::UiState;

/// Top-level storefront screens. Exactly one is current at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Categories,
    Product,
    Cart,
    Orders,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Categories,
        Screen::Product,
        Screen::Cart,
        Screen::Orders,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Categories => "categories",
            Screen::Product => "product",
            Screen::Cart => "cart",
            Screen::Orders => "orders",
        }
    }

    /// Cart and orders are detours: entering one remembers where the
    /// shopper came from, and back-navigation returns there.
    pub fn is_detour(self) -> bool {
        matches!(self, Screen::Cart | Screen::Orders)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screens that back-navigation can return to.
///
/// Keeping this a separate type means `previous` can never hold a detour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnScreen {
    #[default]
    Home,
    Categories,
    Product,
}

impl ReturnScreen {
    pub fn from_screen(screen: Screen) -> Option<Self> {
        match screen {
            Screen::Home => Some(ReturnScreen::Home),
            Screen::Categories => Some(ReturnScreen::Categories),
            Screen::Product => Some(ReturnScreen::Product),
            Screen::Cart | Screen::Orders => None,
        }
    }

    pub fn screen(self) -> Screen {
        match self {
            ReturnScreen::Home => Screen::Home,
            ReturnScreen::Categories => Screen::Categories,
            ReturnScreen::Product => Screen::Product,
        }
    }
}

/// Sticky selection applied at the moment the screen swaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Category(String),
    Product(String),
}

/// A transition that has faded out but not yet swapped screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    pub target: Screen,
    pub selection: Option<Selection>,
    pub generation: u64,
}

/// Navigation state machine.
///
/// `transitioning` is true from the moment a transition is requested until
/// the fade-in after the swap completes. `generation` identifies the latest
/// request; timer intents carrying an older generation are stale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    pub(super) current: Screen,
    pub(super) previous: ReturnScreen,
    pub(super) transitioning: bool,
    pub(super) selected_category: String,
    pub(super) selected_product: String,
    pub(super) generation: u64,
    pub(super) pending: Option<PendingTransition>,
}

impl UiState for NavigationState {}

impl NavigationState {
    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn previous(&self) -> ReturnScreen {
        self.previous
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn selected_product(&self) -> &str {
        &self.selected_product
    }

    /// Token of the most recent transition request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }
}
