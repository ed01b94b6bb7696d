use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Merge `quantity` units into the entry for `product_id`, creating it
    /// at the end of the cart when the product is new.
    Add { product_id: String, quantity: u32 },
    Reset,
}

impl Intent for CartIntent {}
