use serde::{Deserialize, Serialize};

use orderflow_core::{Entity, Money, OrderId};

/// A customer order awaiting processing.
///
/// Built by the caller; processing only ever flips `is_processed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Confirmation address. Not validated; may be empty.
    #[serde(default)]
    pub customer_email: String,
    pub total_amount: Money,
    /// Output only: incoming documents always start unprocessed.
    #[serde(skip_deserializing)]
    is_processed: bool,
}

impl Order {
    pub fn new(id: impl Into<OrderId>, customer_email: impl Into<String>, total_amount: Money) -> Self {
        Self {
            id: id.into(),
            customer_email: customer_email.into(),
            total_amount,
            is_processed: false,
        }
    }

    pub fn is_processed(&self) -> bool {
        self.is_processed
    }

    pub(crate) fn mark_processed(&mut self) {
        self.is_processed = true;
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_order_is_not_processed() {
        let order = Order::new(1, "test@test.com", Money::from_units(150));
        assert!(!order.is_processed());
        assert_eq!(Entity::id(&order), OrderId::new(1));
    }

    #[test]
    fn empty_email_is_accepted() {
        let order = Order::new(9, "", Money::new(dec!(150)));
        assert_eq!(order.customer_email, "");
    }

    #[test]
    fn deserialized_order_ignores_incoming_processed_flag() {
        let order: Order =
            serde_json::from_str(r#"{"id":4,"total_amount":0,"is_processed":true}"#).unwrap();
        assert!(!order.is_processed());
        assert_eq!(order.customer_email, "");
    }

    #[test]
    fn processed_flag_is_still_serialized() {
        let mut order = Order::new(3, "a@test.com", Money::from_units(50));
        order.mark_processed();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["is_processed"], serde_json::json!(true));
    }
}
