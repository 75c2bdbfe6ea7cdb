use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A single cart line item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CartItem {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(custom = "validate_non_negative_price")]
    pub price: Decimal,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: i32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Price extended by quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

fn validate_non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}

/// Shopping cart model.
///
/// The cart is owned by the calling context and is append-only: items are
/// added through [`Cart::push_item`], never removed or updated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub currency: String,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(currency: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            currency: currency.into(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends an item and bumps the update timestamp.
    pub fn push_item(&mut self, item: CartItem) {
        self.items.push(item);
        self.updated_at = Utc::now();
    }

    /// Sum of line totals across all items.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_total_calculation() {
        let item = CartItem::new("Widget", dec!(25.50), 3);
        assert_eq!(item.line_total(), dec!(76.50));
    }

    #[test]
    fn test_subtotal_multiple_items() {
        let mut cart = Cart::new("USD");
        cart.push_item(CartItem::new("A", dec!(10), 1));
        cart.push_item(CartItem::new("B", dec!(5), 2));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal(), dec!(20));
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        let cart = Cart::new("USD");
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_push_item_bumps_updated_at() {
        let mut cart = Cart::new("USD");
        let before = cart.updated_at;
        cart.push_item(CartItem::new("A", dec!(1), 1));
        assert!(cart.updated_at >= before);
    }

    #[test]
    fn test_item_validation_rejects_negative_price() {
        let item = CartItem::new("A", dec!(-1), 1);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_item_validation_rejects_negative_quantity() {
        let item = CartItem::new("A", dec!(1), -1);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_item_validation_rejects_empty_name() {
        let item = CartItem::new("", dec!(1), 1);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_item_validation_accepts_zero_quantity() {
        let item = CartItem::new("A", dec!(0), 0);
        assert!(item.validate().is_ok());
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_serialization() {
        let mut cart = Cart::new("USD");
        cart.push_item(CartItem::new("A", dec!(10), 1));

        let json = serde_json::to_string(&cart).expect("serialization should succeed");
        let parsed: Cart = serde_json::from_str(&json).expect("deserialization should succeed");

        assert_eq!(parsed, cart);
    }
}
