//! Payment methods behind a single trait so orders can be settled with any of them.

use std::fmt;

/// Result of settling an amount.
#[derive(Clone, Debug, PartialEq)]
pub enum PaymentOutcome {
    Card { amount: f64, last_four: String },
    Cash { amount: f64, change: f64 },
    InsufficientCash { amount: f64, shortfall: f64 },
}

impl PaymentOutcome {
    pub fn is_settled(&self) -> bool {
        !matches!(self, PaymentOutcome::InsufficientCash { .. })
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentOutcome::Card { amount, last_four } => {
                write!(f, "Paying ${amount:.2} with card ending in {last_four}")
            }
            PaymentOutcome::Cash { amount, change } => {
                write!(f, "Paid ${amount:.2} in cash. Change: ${change:.2}")
            }
            PaymentOutcome::InsufficientCash { shortfall, .. } => {
                write!(f, "Insufficient funds. Need ${shortfall:.2} more.")
            }
        }
    }
}

/// A way to settle an order total.
pub trait Payment {
    fn pay(&self, amount: f64) -> PaymentOutcome;
}

/// Card payment; only the last four digits are ever reported.
#[derive(Clone, Debug)]
pub struct CardPayment {
    card_number: String,
    cvv: u16,
}

impl CardPayment {
    pub fn new(card_number: impl Into<String>, cvv: u16) -> Self {
        Self {
            card_number: card_number.into(),
            cvv,
        }
    }

    pub fn cvv(&self) -> u16 {
        self.cvv
    }

    fn last_four(&self) -> String {
        let chars: Vec<char> = self.card_number.chars().collect();
        let start = chars.len().saturating_sub(4);
        chars[start..].iter().collect()
    }
}

impl Payment for CardPayment {
    fn pay(&self, amount: f64) -> PaymentOutcome {
        let last_four = self.last_four();
        tracing::info!(amount, card = %last_four, "card payment");
        PaymentOutcome::Card { amount, last_four }
    }
}

/// Cash payment with the amount handed over.
#[derive(Clone, Copy, Debug)]
pub struct CashPayment {
    cash_given: f64,
}

impl CashPayment {
    pub fn new(cash_given: f64) -> Self {
        Self { cash_given }
    }

    pub fn cash_given(&self) -> f64 {
        self.cash_given
    }
}

impl Payment for CashPayment {
    fn pay(&self, amount: f64) -> PaymentOutcome {
        if self.cash_given >= amount {
            let change = self.cash_given - amount;
            tracing::info!(amount, change, "cash payment");
            PaymentOutcome::Cash { amount, change }
        } else {
            let shortfall = amount - self.cash_given;
            tracing::info!(amount, shortfall, "cash payment short");
            PaymentOutcome::InsufficientCash { amount, shortfall }
        }
    }
}
