//! Checkout: turns a cart and shipping details into a dispatched order.
//!
//! Flow:
//! 1. reject an empty cart
//! 2. reject shipping details missing a required field
//! 3. reject a cart whose total cannot be represented
//! 4. build the [`OrderNotification`] and hand it to the [`Notifier`]
//! 5. clear the cart only after dispatch succeeded
//!
//! A rejection always leaves the cart as it was, so the caller can redisplay
//! the checkout form and retry.

mod file_drop;
mod nats;
mod notifier;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};
use crate::domain::{Cart, Money, MoneyError, OrderNotification, ShippingDetails};

pub use file_drop::FileDropNotifier;
pub use nats::NatsNotifier;
pub use notifier::{Notifier, NotifyError};

#[derive(Clone, Debug, PartialEq)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub total: Money,
    pub line_count: usize,
}

#[derive(Error, Debug)]
pub enum OrderRejection {
    #[error("Sorry, your cart is empty!")]
    EmptyCart,

    #[error("Invalid shipping details: {0}")]
    InvalidShippingDetails(#[from] ValidationErrors),

    #[error("Order total is invalid: {0}")]
    InvalidTotal(#[from] MoneyError),

    #[error("Order could not be dispatched: {0}")]
    DispatchFailed(#[source] NotifyError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionReason { EmptyCart, InvalidShippingDetails, InvalidTotal, DispatchFailed }

impl OrderRejection {
    pub fn reason(&self) -> RejectionReason {
        match self {
            Self::EmptyCart => RejectionReason::EmptyCart,
            Self::InvalidShippingDetails(_) => RejectionReason::InvalidShippingDetails,
            Self::InvalidTotal(_) => RejectionReason::InvalidTotal,
            Self::DispatchFailed(_) => RejectionReason::DispatchFailed,
        }
    }
}

pub struct OrderProcessor<N> {
    notifier: N,
}

impl<N: Notifier> OrderProcessor<N> {
    pub fn new(notifier: N) -> Self { Self { notifier } }
    pub fn notifier(&self) -> &N { &self.notifier }

    /// Dispatches the cart as an order and empties it on success. There is no
    /// retry; dropping the returned future before dispatch completes leaves the
    /// cart intact.
    pub async fn process_order(&self, cart: &mut Cart, shipping: &ShippingDetails) -> Result<OrderReceipt, OrderRejection> {
        if cart.is_empty() {
            warn!("Order rejected: empty cart");
            return Err(OrderRejection::EmptyCart);
        }
        if let Err(errors) = shipping.validate() {
            warn!(fields = ?errors.field_errors().keys().collect::<Vec<_>>(), "Order rejected: invalid shipping details");
            return Err(errors.into());
        }

        let order = match OrderNotification::from_cart(cart, shipping) {
            Ok(order) => order,
            Err(e) => {
                warn!(error = %e, "Order rejected: total out of range");
                return Err(e.into());
            }
        };
        if let Err(e) = self.notifier.dispatch(&order).await {
            warn!(order_id = %order.order_id, error = %e, "Order dispatch failed, cart kept");
            return Err(OrderRejection::DispatchFailed(e));
        }

        let receipt = OrderReceipt { order_id: order.order_id, total: order.total, line_count: order.lines.len() };
        cart.clear();
        info!(order_id = %receipt.order_id, total = %receipt.total, lines = receipt.line_count, "Order dispatched");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier { sent: Mutex<Vec<OrderNotification>> }

    impl RecordingNotifier {
        fn sent(&self) -> Vec<OrderNotification> { self.sent.lock().unwrap().clone() }
    }

    impl Notifier for RecordingNotifier {
        async fn dispatch(&self, order: &OrderNotification) -> Result<(), NotifyError> {
            self.sent.lock().unwrap().push(order.clone());
            Ok(())
        }
    }

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        async fn dispatch(&self, _: &OrderNotification) -> Result<(), NotifyError> {
            Err(NotifyError::Transport("smtp.example.com unreachable".into()))
        }
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            name: "Joe".into(), line1: "1 Main St".into(), city: "Town".into(),
            state: "CA".into(), country: "USA".into(), ..Default::default()
        }
    }

    fn cart_with_one_line() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&Product::new(1, "P1", Money::new(Decimal::new(1250, 2)).unwrap()), 2);
        cart
    }

    #[tokio::test]
    async fn test_order_dispatched_and_cart_cleared() {
        let processor = OrderProcessor::new(RecordingNotifier::default());
        let mut cart = cart_with_one_line();

        let receipt = processor.process_order(&mut cart, &shipping()).await.unwrap();

        assert!(cart.is_empty());
        assert_eq!(receipt.total.amount(), Decimal::new(25, 0));
        assert_eq!(receipt.line_count, 1);
        let sent = processor.notifier().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].order_id, receipt.order_id);
        assert_eq!(sent[0].lines[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_empty_cart_rejected_without_dispatch() {
        let processor = OrderProcessor::new(RecordingNotifier::default());
        let mut cart = Cart::new();

        let err = processor.process_order(&mut cart, &shipping()).await.unwrap_err();

        assert_eq!(err.reason(), RejectionReason::EmptyCart);
        assert!(processor.notifier().sent().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_shipping_rejected_without_dispatch() {
        let processor = OrderProcessor::new(RecordingNotifier::default());
        let mut cart = cart_with_one_line();
        let details = ShippingDetails { name: String::new(), ..shipping() };

        let err = processor.process_order(&mut cart, &details).await.unwrap_err();

        assert_eq!(err.reason(), RejectionReason::InvalidShippingDetails);
        assert!(processor.notifier().sent().is_empty());
        assert_eq!(cart, cart_with_one_line());
    }

    #[tokio::test]
    async fn test_dispatch_failure_keeps_cart() {
        let processor = OrderProcessor::new(FailingNotifier);
        let mut cart = cart_with_one_line();

        let err = processor.process_order(&mut cart, &shipping()).await.unwrap_err();

        assert_eq!(err.reason(), RejectionReason::DispatchFailed);
        assert!(matches!(err, OrderRejection::DispatchFailed(NotifyError::Transport(_))));
        assert_eq!(cart, cart_with_one_line());
        assert_eq!(cart.compute_total().unwrap().amount(), Decimal::new(25, 0));
    }

    #[tokio::test]
    async fn test_overflowing_total_rejected_without_dispatch() {
        let processor = OrderProcessor::new(RecordingNotifier::default());
        let mut cart = Cart::new();
        cart.add_item(&Product::new(1, "Huge", Money::new(Decimal::MAX).unwrap()), 2);
        let snapshot = cart.clone();

        let err = processor.process_order(&mut cart, &shipping()).await.unwrap_err();

        assert_eq!(err.reason(), RejectionReason::InvalidTotal);
        assert!(matches!(err, OrderRejection::InvalidTotal(MoneyError::Overflow)));
        assert!(processor.notifier().sent().is_empty());
        assert_eq!(cart, snapshot);
    }
}
