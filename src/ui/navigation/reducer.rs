//! Reducer for screen navigation.

use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::state::{NavigationState, PendingTransition, ReturnScreen, Selection};

/// Reducer for navigation state transitions.
///
/// Timer intents are matched against the generation of the latest `Begin`,
/// so a superseded transition can never swap or settle the screen.
pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavigationState;
    type Intent = NavIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Begin { target, selection } => {
                state.transitioning = true;
                if target.is_detour() {
                    // Bouncing between cart and orders keeps the original entry point.
                    if let Some(origin) = ReturnScreen::from_screen(state.current) {
                        state.previous = origin;
                    }
                }
                state.generation = state.generation.wrapping_add(1);
                state.pending = Some(PendingTransition {
                    target,
                    selection,
                    generation: state.generation,
                });
                state
            }

            NavIntent::Swap { generation } => {
                match state.pending.take() {
                    Some(pending) if pending.generation == generation => {
                        match pending.selection {
                            Some(Selection::Category(category)) => {
                                state.selected_category = category;
                            }
                            Some(Selection::Product(product)) => {
                                state.selected_product = product;
                            }
                            None => {}
                        }
                        state.current = pending.target;
                    }
                    other => state.pending = other,
                }
                state
            }

            NavIntent::Settle { generation } => {
                if generation == state.generation && state.pending.is_none() {
                    state.transitioning = false;
                }
                state
            }
        }
    }
}
