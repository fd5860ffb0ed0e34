//! Order notification payload
//!
//! Built from a cart and shipping details at checkout and handed to a
//! [`Notifier`](crate::checkout::Notifier). The `Display` impl renders the
//! plain-text body used by mail-style transports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;
use crate::domain::aggregates::cart::Cart;
use crate::domain::value_objects::{Money, MoneyError, ProductId};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ShippingDetails {
    #[validate(length(min = 1, message = "Please enter a name"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please enter the first address line"))]
    pub line1: String,
    pub line2: Option<String>,
    pub line3: Option<String>,
    #[validate(length(min = 1, message = "Please enter a city name"))]
    pub city: String,
    #[validate(length(min = 1, message = "Please enter a state name"))]
    pub state: String,
    pub zip: Option<String>,
    #[validate(length(min = 1, message = "Please enter a country name"))]
    pub country: String,
    pub gift_wrap: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderNotification {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total: Money,
    pub shipping: ShippingDetails,
}

impl OrderNotification {
    /// Snapshots `cart` into a payload. Fails when a line or order total
    /// cannot be represented.
    pub fn from_cart(cart: &Cart, shipping: &ShippingDetails) -> Result<Self, MoneyError> {
        let lines = cart.lines().iter().map(|l| Ok(OrderLine {
            product_id: l.product().id(),
            name: l.product().name().to_string(),
            quantity: l.quantity(),
            unit_price: l.product().price(),
            line_total: l.line_total()?,
        })).collect::<Result<Vec<_>, MoneyError>>()?;
        let total = cart.compute_total()?;
        Ok(Self { order_id: Uuid::now_v7(), placed_at: Utc::now(), lines, total, shipping: shipping.clone() })
    }
}

impl fmt::Display for OrderNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A new order has been submitted")?;
        writeln!(f, "---")?;
        writeln!(f, "Items:")?;
        for line in &self.lines {
            writeln!(f, "{} x {} (subtotal: {})", line.quantity, line.name, line.line_total)?;
        }
        writeln!(f, "Total order value: {}", self.total)?;
        writeln!(f, "---")?;
        writeln!(f, "Ship to:")?;
        let s = &self.shipping;
        writeln!(f, "{}", s.name)?;
        writeln!(f, "{}", s.line1)?;
        for extra in [&s.line2, &s.line3].into_iter().flatten() {
            writeln!(f, "{extra}")?;
        }
        writeln!(f, "{}", s.city)?;
        writeln!(f, "{}", s.state)?;
        if let Some(zip) = &s.zip { writeln!(f, "{zip}")?; }
        writeln!(f, "{}", s.country)?;
        writeln!(f, "---")?;
        write!(f, "Gift wrap: {}", if s.gift_wrap { "Yes" } else { "No" })
    }
}
