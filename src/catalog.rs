//! Menu catalog: categories and the products they contain.

use serde::{Deserialize, Serialize};

use crate::ui::cart::CartState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier used as the cart key (e.g., "latte").
    pub id: String,
    /// Display name (e.g., "Latte").
    pub name: String,
    /// Price in whole rubles.
    pub price: u32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products().find(|p| p.id == id)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories.iter().flat_map(|c| c.products.iter())
    }

    /// Products of one category. An empty or unknown category id yields the
    /// whole menu.
    pub fn products_in(&self, category_id: &str) -> Vec<&Product> {
        match self.category(category_id) {
            Some(category) => category.products.iter().collect(),
            None => self.products().collect(),
        }
    }

    /// Display name for a product id, falling back to the id itself.
    pub fn product_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.product(id).map(|p| p.name.as_str()).unwrap_or(id)
    }

    /// Sum of price × quantity. Products missing from the menu count as free.
    pub fn cart_total(&self, cart: &CartState) -> u32 {
        cart.items().iter().fold(0u32, |total, entry| {
            let price = self.product(&entry.product_id).map(|p| p.price).unwrap_or(0);
            total.saturating_add(price.saturating_mul(entry.quantity))
        })
    }
}

fn product(id: &str, name: &str, price: u32, description: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            categories: vec![
                Category {
                    id: "coffee".to_string(),
                    name: "Coffee".to_string(),
                    products: vec![
                        product("espresso", "Espresso", 180, "A short, dense shot"),
                        product("americano", "Americano", 220, "Espresso topped up with hot water"),
                        product("cappuccino", "Cappuccino", 280, "Espresso with a thick milk foam"),
                        product("latte", "Latte", 300, "Espresso with plenty of steamed milk"),
                        product("flat-white", "Flat White", 310, "Double ristretto, velvety milk"),
                        product("raf", "Raf", 340, "Espresso whipped with cream and vanilla sugar"),
                    ],
                },
                Category {
                    id: "drinks".to_string(),
                    name: "Drinks".to_string(),
                    products: vec![
                        product("mocha", "Mocha", 330, "Espresso, chocolate and milk"),
                        product("cocoa", "Cocoa", 260, "Hot chocolate with milk"),
                        product("matcha", "Matcha Latte", 320, "Japanese green tea with milk"),
                        product("lemonade", "Berry Lemonade", 240, "Sparkling, served cold"),
                    ],
                },
                Category {
                    id: "bakery".to_string(),
                    name: "Bakery".to_string(),
                    products: vec![
                        product("croissant", "Croissant", 190, "Butter croissant"),
                        product("cookie", "Cookie", 120, "Chocolate chip cookie"),
                        product("cheesecake", "Cheesecake", 290, "New York style"),
                    ],
                },
            ],
        }
    }
}
