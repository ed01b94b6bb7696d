use crate::ui::mvi::Reducer;

use super::intent::CartIntent;
use super::state::{CartEntry, CartState};

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Add { quantity: 0, .. } => state,
            CartIntent::Add {
                product_id,
                quantity,
            } => {
                match state
                    .items
                    .iter_mut()
                    .find(|entry| entry.product_id == product_id)
                {
                    Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
                    None => state.items.push(CartEntry::new(product_id, quantity)),
                }
                state
            }
            CartIntent::Reset => CartState::default(),
        }
    }
}
