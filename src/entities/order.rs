use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A line item inside an order. Stored serialized inside the order row,
/// never as rows of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

/// A persisted purchase record. `created_at` is assigned by the store and
/// never accepted from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub status: String,
    pub items: Vec<Item>,
    pub total: f64,
    #[serde(rename = "currencyUnit")]
    pub currency_unit: String,
    pub created_at: DateTime<Utc>,
}

/// Create payload: everything the caller supplies. Status is free-form and
/// the id is the caller's own, doubling as the primary key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub id: String,
    pub status: String,
    pub items: Vec<Item>,
    pub total: f64,
    #[serde(rename = "currencyUnit")]
    pub currency_unit: String,
}

impl NewOrder {
    pub fn into_order(self, created_at: DateTime<Utc>) -> Order {
        Order {
            id: self.id,
            status: self.status,
            items: self.items,
            total: self.total,
            currency_unit: self.currency_unit,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_unit_serde_is_camel_case() {
        let order = NewOrder {
            id: "o1".into(),
            status: "pending".into(),
            items: vec![],
            total: 19.98,
            currency_unit: "USD".into(),
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"currencyUnit\":\"USD\""));
        assert!(!json.contains("currency_unit"));
    }

    #[test]
    fn new_order_decodes_spec_shape() {
        let raw = r#"{
            "id": "o1",
            "status": "pending",
            "items": [{"id": "i1", "description": "Widget", "price": 9.99, "quantity": 2}],
            "total": 19.98,
            "currencyUnit": "USD"
        }"#;
        let order: NewOrder = serde_json::from_str(raw).unwrap();
        assert_eq!(order.id, "o1");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].description, "Widget");
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total, 19.98);
    }

    #[test]
    fn new_order_rejects_string_total() {
        let raw = r#"{"id":"o1","status":"pending","items":[],"total":"19.98","currencyUnit":"USD"}"#;
        assert!(serde_json::from_str::<NewOrder>(raw).is_err());
    }

    #[test]
    fn into_order_preserves_caller_fields() {
        let new = NewOrder {
            id: "o2".into(),
            status: "shipped".into(),
            items: vec![Item {
                id: "i1".into(),
                description: "Gadget".into(),
                price: 4.5,
                quantity: 3,
            }],
            total: 13.5,
            currency_unit: "EUR".into(),
        };
        let ts = Utc::now();
        let order = new.clone().into_order(ts);
        assert_eq!(order.id, new.id);
        assert_eq!(order.items, new.items);
        assert_eq!(order.created_at, ts);
    }
}
