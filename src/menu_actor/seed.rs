//! The menu written on first start.

use crate::model::MenuItemCreate;
use rust_decimal::Decimal;

pub const STARTER_CATEGORY: &str = "Pizza";

/// The three pizzas a fresh restaurant starts with.
pub fn starter_menu() -> Vec<MenuItemCreate> {
    vec![
        MenuItemCreate::new(
            "Carne Seca com Catupiry",
            "Carne seca desfiada, catupiry, cebola roxa e muçarela",
            Decimal::new(1299, 2),
        )
        .category(STARTER_CATEGORY),
        MenuItemCreate::new(
            "Queijo Brie com Damasco",
            "Queijo brie derretido, muçarela e geleia de damasco",
            Decimal::new(899, 2),
        )
        .category(STARTER_CATEGORY),
        MenuItemCreate::new(
            "Portuguesa Light",
            "Versão com menos queijo e ingredientes reduzidos",
            Decimal::new(1499, 2),
        )
        .category(STARTER_CATEGORY),
    ]
}
