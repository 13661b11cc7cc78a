//! Parsing for the `order` subcommand: line items and payment methods.

use anyhow::{anyhow, bail, Context, Result};
use restaurant::{CardPayment, CashPayment, MenuItem, Order, Payment};

/// Parse `name[=qty]` against `menu`. Names match case-insensitively; the
/// quantity defaults to 1.
pub fn parse_line_item(spec: &str, menu: &[MenuItem]) -> Result<(MenuItem, u32)> {
    let (name, qty) = spec.split_once('=').unwrap_or((spec, "1"));
    let name = name.trim();
    let qty: u32 = qty
        .trim()
        .parse()
        .with_context(|| format!("bad quantity in `{spec}`"))?;
    let item = menu
        .iter()
        .find(|m| m.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("`{name}` is not on the menu"))?;
    Ok((item.clone(), qty))
}

/// Build an order from `name[=qty]` specs.
pub fn build_order<S: AsRef<str>>(specs: &[S], menu: &[MenuItem]) -> Result<Order> {
    let mut order = Order::new();
    for spec in specs {
        let (item, qty) = parse_line_item(spec.as_ref(), menu)?;
        order.add_item(item, qty);
    }
    Ok(order)
}

/// `card:<number>:<cvv>` or `cash:<amount>`.
pub fn payment_method(spec: &str) -> Result<Box<dyn Payment>> {
    let mut parts = spec.split(':');
    match parts.next() {
        Some("card") => {
            let number = parts.next().context("card payment needs a card number")?;
            let cvv: u16 = parts
                .next()
                .context("card payment needs a cvv")?
                .parse()
                .context("bad cvv")?;
            Ok(Box::new(CardPayment::new(number, cvv)))
        }
        Some("cash") => {
            let given: f64 = parts
                .next()
                .context("cash payment needs an amount")?
                .parse()
                .context("bad cash amount")?;
            Ok(Box::new(CashPayment::new(given)))
        }
        _ => bail!("payment must be `card:<number>:<cvv>` or `cash:<amount>`"),
    }
}
