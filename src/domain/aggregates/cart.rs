//! Cart Aggregate
//!
//! A cart belongs to exactly one shopping session and is mutated through
//! `&mut self` only; callers serialize access to it.

use crate::domain::aggregates::product::Product;
use crate::domain::events::CartEvent;
use crate::domain::value_objects::{Money, MoneyError, ProductId};

#[derive(Clone, Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    events: Vec<CartEvent>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    pub fn product(&self) -> &Product { &self.product }
    pub fn quantity(&self) -> u32 { self.quantity }
    pub fn line_total(&self) -> Result<Money, MoneyError> { self.product.price().multiply(self.quantity) }
}

impl Cart {
    pub fn new() -> Self { Self::default() }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] { &self.lines }
    pub fn line_count(&self) -> usize { self.lines.len() }
    pub fn item_count(&self) -> u64 { self.lines.iter().map(|l| u64::from(l.quantity)).sum() }
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Adds `quantity` of `product`, merging into an existing line for the same
    /// product id. A zero quantity leaves the cart untouched. Merged quantities
    /// stop at `u32::MAX`; the raised event carries the increase actually applied.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 { return; }
        let product_id = product.id();
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id() == product_id) {
            let before = existing.quantity;
            existing.quantity = before.saturating_add(quantity);
            let total = existing.quantity;
            if total > before {
                self.raise_event(CartEvent::QuantityIncreased { product_id, by: total - before, quantity: total });
            }
        } else {
            self.lines.push(CartLine { product: product.clone(), quantity });
            self.raise_event(CartEvent::LineAdded { product_id, quantity });
        }
    }

    /// Removes the line for `product_id`; absent products are ignored.
    pub fn remove_line(&mut self, product_id: ProductId) {
        if let Some(pos) = self.lines.iter().position(|l| l.product.id() == product_id) {
            let removed = self.lines.remove(pos);
            self.raise_event(CartEvent::LineRemoved { product_id, quantity: removed.quantity });
        }
    }

    /// Sum of quantity × price over all lines. Fails only when the amount
    /// exceeds what `Decimal` can represent.
    pub fn compute_total(&self) -> Result<Money, MoneyError> {
        self.lines.iter().try_fold(Money::zero(), |acc, line| acc.add(&line.line_total()?))
    }

    pub fn clear(&mut self) {
        if self.lines.is_empty() { return; }
        let lines = self.lines.len();
        self.lines.clear();
        self.raise_event(CartEvent::Cleared { lines });
    }

    pub fn take_events(&mut self) -> Vec<CartEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: CartEvent) { self.events.push(e); }
}

/// Carts are equal when they hold the same products in the same quantities,
/// whatever order the lines were added in.
impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool {
        self.lines.len() == other.lines.len()
            && self.lines.iter().all(|line| {
                other.lines.iter().any(|o| o.product.id() == line.product.id() && o.quantity == line.quantity)
            })
    }
}
