use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// A priced catalog record.
///
/// Stored and returned exactly as submitted: no defaults beyond `None` for the
/// optional fields, and no business-rule validation (a negative price or an
/// empty name is accepted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub is_offer: Option<bool>,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            description: None,
            price,
            is_offer: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_offer(mut self, is_offer: bool) -> Self {
        self.is_offer = Some(is_offer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_payload() {
        let item: Item = serde_json::from_value(json!({
            "id": 3,
            "name": "Llave inglesa",
            "description": "Herramienta ajustable",
            "price": 14.99,
            "is_offer": true
        }))
        .unwrap();

        assert_eq!(item.id, ItemId::new(3));
        assert_eq!(item.name, "Llave inglesa");
        assert_eq!(item.description.as_deref(), Some("Herramienta ajustable"));
        assert_eq!(item.price, 14.99);
        assert_eq!(item.is_offer, Some(true));
    }

    #[test]
    fn optional_fields_default_to_null() {
        let item: Item = serde_json::from_value(json!({
            "id": 9,
            "name": "Sierra",
            "price": 30
        }))
        .unwrap();

        assert_eq!(item.description, None);
        assert_eq!(item.is_offer, None);

        // All five keys are always emitted.
        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(
            out,
            json!({"id": 9, "name": "Sierra", "description": null, "price": 30.0, "is_offer": null})
        );
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let res = serde_json::from_value::<Item>(json!({ "id": 1, "price": 1.0 }));
        assert!(res.is_err());
    }

    #[test]
    fn negative_price_is_accepted() {
        let item: Item =
            serde_json::from_value(json!({ "id": 1, "name": "x", "price": -5.5 })).unwrap();
        assert_eq!(item.price, -5.5);
    }
}
