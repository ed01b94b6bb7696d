//! Intents for screen navigation.

use crate::ui::mvi::Intent;

use super::state::{Screen, Selection};

/// The three phases of a screen transition.
#[derive(Debug, Clone)]
pub enum NavIntent {
    /// Fade out: raise the transition flag and supersede any pending request.
    Begin {
        target: Screen,
        selection: Option<Selection>,
    },

    /// Fade-out timer fired: apply the selection and make the target current.
    Swap { generation: u64 },

    /// Fade-in timer fired: lower the transition flag.
    Settle { generation: u64 },
}

impl Intent for NavIntent {}
