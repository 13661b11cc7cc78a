//! Restaurant ordering: menu items, an order with a beverage discount, and
//! interchangeable payment methods.
//!
//! - `menu`: `MenuItem` with a closed `MenuCategory`.
//! - `order`: `Order` aggregates `(item, quantity)` lines and prices them.
//! - `payment`: `Payment` trait with `CardPayment` and `CashPayment`.

pub mod menu;
pub mod order;
pub mod payment;

pub use menu::{MenuCategory, MenuError, MenuItem};
pub use order::{Order, BEVERAGE_DISCOUNT};
pub use payment::{CardPayment, CashPayment, Payment, PaymentOutcome};

/// The sample menu used by demos and the CLI.
pub fn sample_menu() -> Vec<MenuItem> {
    // Prices are non-negative constants, so construction cannot fail.
    vec![
        MenuItem::beverage("Coke", 2.5, "Large"),
        MenuItem::appetizer("Spring Rolls", 5.0, "Medium"),
        MenuItem::main_course("Spaghetti", 12.0),
        MenuItem::beverage("Fanta", 2.5, "Small"),
    ]
    .into_iter()
    .flatten()
    .collect()
}
