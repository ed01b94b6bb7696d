//! Reducer for the order history.

use crate::ui::mvi::Reducer;

use super::intent::OrdersIntent;
use super::state::OrdersState;

pub struct OrdersReducer;

impl Reducer for OrdersReducer {
    type State = OrdersState;
    type Intent = OrdersIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OrdersIntent::Record { record } => {
                state.history.push(record);
                state
            }
            OrdersIntent::Signal { number } => {
                state.new_order = Some(number);
                state
            }
            OrdersIntent::Expire { number } => {
                if state.new_order.as_deref() == Some(number.as_str()) {
                    state.new_order = None;
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cart::CartEntry;
    use crate::ui::orders::state::OrderRecord;

    fn signal(state: OrdersState, number: &str) -> OrdersState {
        OrdersReducer::reduce(
            state,
            OrdersIntent::Signal {
                number: number.into(),
            },
        )
    }

    #[test]
    fn signal_sets_new_order() {
        let state = signal(OrdersState::default(), "ORD-123");
        assert_eq!(state.new_order(), Some("ORD-123"));
    }

    #[test]
    fn expire_clears_matching_signal() {
        let state = signal(OrdersState::default(), "ORD-123");
        let state = OrdersReducer::reduce(
            state,
            OrdersIntent::Expire {
                number: "ORD-123".into(),
            },
        );
        assert_eq!(state.new_order(), None);
    }

    #[test]
    fn expire_keeps_newer_signal() {
        let state = signal(OrdersState::default(), "ORD-1");
        let state = signal(state, "ORD-2");
        let state = OrdersReducer::reduce(
            state,
            OrdersIntent::Expire {
                number: "ORD-1".into(),
            },
        );
        assert_eq!(state.new_order(), Some("ORD-2"));
    }

    #[test]
    fn record_appends_to_history() {
        let record = OrderRecord {
            number: "ORD-9".into(),
            items: vec![CartEntry::new("latte", 2), CartEntry::new("cookie", 1)],
            total: 600,
        };
        let state = OrdersReducer::reduce(
            OrdersState::default(),
            OrdersIntent::Record {
                record: record.clone(),
            },
        );
        assert_eq!(state.history(), &[record]);
        assert_eq!(state.history()[0].item_count(), 3);
        assert_eq!(state.new_order(), None);
    }
}
