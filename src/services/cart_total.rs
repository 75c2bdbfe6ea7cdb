use crate::{
    errors::ServiceError,
    events::{Event, EventSender},
    lookup::{CostLookup, ShippingLookup, TotalSink},
    models::cart::{Cart, CartItem},
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// Cart total calculation service.
///
/// Sequentially obtains a monetary cost and then a shipping fee for a cart,
/// each through an asynchronous lookup collaborator, sums them, and publishes
/// the result to a presentation sink. Lookup failures propagate as typed
/// [`ServiceError`]s; on failure the sink is never invoked.
#[derive(Clone)]
pub struct CartTotalService {
    cost_lookup: Arc<dyn CostLookup>,
    shipping_lookup: Arc<dyn ShippingLookup>,
    sink: Arc<dyn TotalSink>,
    event_sender: EventSender,
}

impl CartTotalService {
    pub fn new(
        cost_lookup: Arc<dyn CostLookup>,
        shipping_lookup: Arc<dyn ShippingLookup>,
        sink: Arc<dyn TotalSink>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            cost_lookup,
            shipping_lookup,
            sink,
            event_sender,
        }
    }

    /// Computes the cart's grand total.
    ///
    /// The shipping lookup is only started after the cost lookup completes;
    /// the two are never issued in parallel. The accumulator is local to the
    /// invocation, so concurrent computations share no state. Exactly one
    /// sink update occurs, carrying the fully summed total, after both
    /// lookups resolve.
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The summed total, also delivered to the sink
    /// * `Err(ServiceError)` - A lookup failed; nothing was published
    #[instrument(skip_all, fields(cart_id = %cart.id))]
    pub async fn compute_total(&self, cart: &Cart) -> Result<Decimal, ServiceError> {
        let mut total = Decimal::ZERO;

        let cost = self.cost_lookup.cost_for_cart(cart).await?;
        total += cost;

        let shipping = self.shipping_lookup.shipping_for_cart(cart).await?;
        total += shipping;

        self.sink.publish_total(total).await;

        self.event_sender
            .send_or_log(Event::TotalComputed {
                cart_id: cart.id,
                total,
            })
            .await;

        info!(%cost, %shipping, %total, "computed cart total");
        Ok(total)
    }

    /// Appends a validated item to the cart and recomputes the total.
    ///
    /// Rejects empty names and negative prices or quantities before the cart
    /// is touched. On success the item is appended, a `CartItemAdded` event
    /// is emitted, and exactly one total computation runs against the
    /// updated cart.
    #[instrument(skip_all, fields(cart_id = %cart.id, name = %name))]
    pub async fn add_item_to_cart(
        &self,
        cart: &mut Cart,
        name: &str,
        price: Decimal,
        quantity: i32,
    ) -> Result<Decimal, ServiceError> {
        let item = CartItem::new(name, price, quantity);
        item.validate()?;

        cart.push_item(item);

        self.event_sender
            .send_or_log(Event::CartItemAdded {
                cart_id: cart.id,
                name: name.to_string(),
            })
            .await;

        info!(name, %price, quantity, "added item to cart");
        self.compute_total(cart).await
    }
}
