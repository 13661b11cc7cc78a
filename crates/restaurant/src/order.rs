use std::fmt;

use crate::menu::MenuItem;

/// Fraction taken off beverages when the order contains a main course.
pub const BEVERAGE_DISCOUNT: f64 = 0.10;

/// Ordered list of `(item, quantity)` lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Order {
    lines: Vec<(MenuItem, u32)>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. Repeated items stay as separate lines.
    pub fn add_item(&mut self, item: MenuItem, quantity: u32) {
        tracing::debug!(item = item.name(), quantity, "order line added");
        self.lines.push((item, quantity));
    }

    pub fn lines(&self) -> &[(MenuItem, u32)] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn has_main_course(&self) -> bool {
        self.lines.iter().any(|(item, _)| item.is_main_course())
    }

    /// Sum of line totals; beverages get `BEVERAGE_DISCOUNT` off when any
    /// main course is present.
    pub fn total_price(&self) -> f64 {
        let discount_beverages = self.has_main_course();
        self.lines
            .iter()
            .map(|(item, qty)| {
                let line = item.total_price(*qty);
                if discount_beverages && item.is_beverage() {
                    line * (1.0 - BEVERAGE_DISCOUNT)
                } else {
                    line
                }
            })
            .sum()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (item, qty)) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{qty}x {item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_menu;

    #[test]
    fn beverage_discount_needs_main_course() {
        let menu = sample_menu();
        let mut order = Order::new();
        order.add_item(menu[0].clone(), 2);
        order.add_item(menu[1].clone(), 1);
        assert!((order.total_price() - 10.0).abs() < 1e-9);

        order.add_item(menu[2].clone(), 1);
        // 2 Coke at 2.50 less 10% + rolls 5.00 + spaghetti 12.00
        assert!((order.total_price() - 21.5).abs() < 1e-9);
    }

    #[test]
    fn display_lists_lines() {
        let menu = sample_menu();
        let mut order = Order::new();
        assert!(order.is_empty());
        order.add_item(menu[0].clone(), 2);
        order.add_item(menu[2].clone(), 1);
        assert_eq!(
            order.to_string(),
            "2x Coke - $2.50 (Large)\n1x Spaghetti - $12.00"
        );
        assert_eq!(order.lines().len(), 2);
    }
}
