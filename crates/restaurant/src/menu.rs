use std::fmt;

/// Errors from menu edits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuError {
    NegativePrice { price: f64 },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::NegativePrice { price } => {
                write!(f, "price cannot be negative (got {price})")
            }
        }
    }
}

impl std::error::Error for MenuError {}

/// What kind of dish an item is, with the kind-specific detail.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuCategory {
    /// Size label, e.g. "Small" or "Large".
    Beverage { size: String },
    /// Portion label, e.g. "6 pieces".
    Appetizer { portion_size: String },
    MainCourse,
}

/// A priced menu entry.
///
/// Invariant: `price >= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    name: String,
    price: f64,
    category: MenuCategory,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        category: MenuCategory,
    ) -> Result<Self, MenuError> {
        check_price(price)?;
        Ok(Self {
            name: name.into(),
            price,
            category,
        })
    }

    pub fn beverage(
        name: impl Into<String>,
        price: f64,
        size: impl Into<String>,
    ) -> Result<Self, MenuError> {
        Self::new(name, price, MenuCategory::Beverage { size: size.into() })
    }

    pub fn appetizer(
        name: impl Into<String>,
        price: f64,
        portion_size: impl Into<String>,
    ) -> Result<Self, MenuError> {
        Self::new(
            name,
            price,
            MenuCategory::Appetizer {
                portion_size: portion_size.into(),
            },
        )
    }

    pub fn main_course(name: impl Into<String>, price: f64) -> Result<Self, MenuError> {
        Self::new(name, price, MenuCategory::MainCourse)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Replace the price; negative prices are rejected and leave the item unchanged.
    pub fn set_price(&mut self, price: f64) -> Result<(), MenuError> {
        check_price(price)?;
        self.price = price;
        Ok(())
    }

    pub fn category(&self) -> &MenuCategory {
        &self.category
    }

    /// Beverage size or appetizer portion; `None` for other categories.
    pub fn detail(&self) -> Option<&str> {
        match &self.category {
            MenuCategory::Beverage { size } => Some(size),
            MenuCategory::Appetizer { portion_size } => Some(portion_size),
            MenuCategory::MainCourse => None,
        }
    }

    /// Change the size/portion label. Returns `false` for categories without one.
    pub fn set_detail(&mut self, detail: impl Into<String>) -> bool {
        match &mut self.category {
            MenuCategory::Beverage { size } => *size = detail.into(),
            MenuCategory::Appetizer { portion_size } => *portion_size = detail.into(),
            MenuCategory::MainCourse => return false,
        }
        true
    }

    #[inline]
    pub fn is_beverage(&self) -> bool {
        matches!(self.category, MenuCategory::Beverage { .. })
    }

    #[inline]
    pub fn is_main_course(&self) -> bool {
        matches!(self.category, MenuCategory::MainCourse)
    }

    /// `price * quantity`, before any order-level discount.
    pub fn total_price(&self, quantity: u32) -> f64 {
        self.price * f64::from(quantity)
    }
}

fn check_price(price: f64) -> Result<(), MenuError> {
    if price < 0.0 {
        return Err(MenuError::NegativePrice { price });
    }
    Ok(())
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${:.2}", self.name, self.price)?;
        if let Some(detail) = self.detail() {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}
