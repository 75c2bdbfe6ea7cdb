use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

use crate::{config::AppConfig, errors::ServiceError, models::cart::Cart};

/// Asynchronous cost lookup collaborator.
///
/// Returns the monetary cost of the full cart contents.
#[async_trait]
pub trait CostLookup: Send + Sync {
    async fn cost_for_cart(&self, cart: &Cart) -> Result<Decimal, ServiceError>;
}

/// Asynchronous shipping-fee lookup collaborator.
#[async_trait]
pub trait ShippingLookup: Send + Sync {
    async fn shipping_for_cart(&self, cart: &Cart) -> Result<Decimal, ServiceError>;
}

/// Presentation sink for computed totals.
///
/// Publishing is a side effect with no return value; display wiring lives
/// outside this crate.
#[async_trait]
pub trait TotalSink: Send + Sync {
    async fn publish_total(&self, total: Decimal);
}

/// Cost lookup that prices the cart from its own line items.
#[derive(Debug, Default, Clone)]
pub struct CatalogCostLookup;

#[async_trait]
impl CostLookup for CatalogCostLookup {
    async fn cost_for_cart(&self, cart: &Cart) -> Result<Decimal, ServiceError> {
        Ok(cart.subtotal())
    }
}

/// Flat-rate shipping with a free-shipping threshold.
///
/// Free shipping at or above the configured threshold, otherwise the
/// configured flat rate; empty carts ship for nothing.
#[derive(Debug, Clone)]
pub struct FlatRateShipping {
    config: Arc<AppConfig>,
}

impl FlatRateShipping {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ShippingLookup for FlatRateShipping {
    async fn shipping_for_cart(&self, cart: &Cart) -> Result<Decimal, ServiceError> {
        let subtotal = cart.subtotal();

        let shipping = if subtotal >= self.config.free_shipping_threshold {
            Decimal::ZERO
        } else if subtotal > Decimal::ZERO {
            self.config.flat_shipping_rate
        } else {
            Decimal::ZERO
        };

        Ok(shipping)
    }
}

/// Sink that publishes totals to the log.
#[derive(Debug, Default, Clone)]
pub struct LogTotalSink;

#[async_trait]
impl TotalSink for LogTotalSink {
    async fn publish_total(&self, total: Decimal) {
        info!(%total, "cart total updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cart::CartItem;
    use rust_decimal_macros::dec;

    fn cart_with_subtotal(subtotal: Decimal) -> Cart {
        let mut cart = Cart::new("USD");
        if subtotal > Decimal::ZERO {
            cart.push_item(CartItem::new("Item", subtotal, 1));
        }
        cart
    }

    #[tokio::test]
    async fn test_catalog_cost_is_cart_subtotal() {
        let mut cart = Cart::new("USD");
        cart.push_item(CartItem::new("A", dec!(10), 1));
        cart.push_item(CartItem::new("B", dec!(5), 2));

        let cost = CatalogCostLookup
            .cost_for_cart(&cart)
            .await
            .expect("cost lookup should succeed");
        assert_eq!(cost, dec!(20));
    }

    #[tokio::test]
    async fn test_shipping_free_at_threshold() {
        let lookup = FlatRateShipping::new(Arc::new(AppConfig::default()));
        let cart = cart_with_subtotal(dec!(50.00));

        let shipping = lookup.shipping_for_cart(&cart).await.unwrap();
        assert_eq!(shipping, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_shipping_flat_rate_under_threshold() {
        let lookup = FlatRateShipping::new(Arc::new(AppConfig::default()));
        let cart = cart_with_subtotal(dec!(49.99));

        let shipping = lookup.shipping_for_cart(&cart).await.unwrap();
        assert_eq!(shipping, dec!(10));
    }

    #[tokio::test]
    async fn test_shipping_zero_for_empty_cart() {
        let lookup = FlatRateShipping::new(Arc::new(AppConfig::default()));
        let cart = cart_with_subtotal(Decimal::ZERO);

        let shipping = lookup.shipping_for_cart(&cart).await.unwrap();
        assert_eq!(shipping, Decimal::ZERO);
    }
}
