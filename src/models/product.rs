use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{AppError, Result};

/// A row of the `product` table. The table declares no `NOT NULL` on
/// `name` or `price`, so both decode as optional.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: Option<String>,
    #[serde(serialize_with = "price_as_number")]
    pub price: Option<Decimal>,
}

fn price_as_number<S>(
    price: &Option<Decimal>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    price.and_then(|p| p.to_f64()).serialize(serializer)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    pub name: String,
    pub price: Decimal,
}

/// Partial update. Fields left out of the body are not touched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

impl CreateProduct {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(AppError::Validation(
                "update must set at least one of name, price".to_string(),
            ));
        }

        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be blank".to_string()));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn product_price_serializes_as_number() {
        let product = Product {
            id: 1,
            name: Some("Widget".to_string()),
            price: Some(Decimal::from_str("9.99").unwrap()),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Widget", "price": 9.99 })
        );
    }

    #[test]
    fn null_columns_serialize_as_null() {
        let product = Product {
            id: 3,
            name: None,
            price: None,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "name": null, "price": null })
        );
    }

    #[test]
    fn create_rejects_unknown_and_missing_fields() {
        let unknown = serde_json::from_str::<CreateProduct>(
            r#"{"name":"Widget","price":1,"colour":"red"}"#,
        );
        assert!(unknown.is_err());

        let missing = serde_json::from_str::<CreateProduct>(r#"{"name":"Widget"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn create_rejects_wrongly_typed_name() {
        let parsed = serde_json::from_str::<CreateProduct>(r#"{"name":42,"price":9.99}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn create_validation_rules() {
        let ok: CreateProduct = serde_json::from_str(r#"{"name":"Widget","price":0}"#).unwrap();
        assert!(ok.validate().is_ok());

        let blank: CreateProduct = serde_json::from_str(r#"{"name":"  ","price":1}"#).unwrap();
        assert!(matches!(blank.validate(), Err(AppError::Validation(_))));

        let negative: CreateProduct =
            serde_json::from_str(r#"{"name":"Widget","price":-0.5}"#).unwrap();
        assert!(negative.validate().is_ok());
    }

    #[test]
    fn update_requires_a_field() {
        let empty: UpdateProduct = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
        assert!(empty.validate().is_err());

        let price_only: UpdateProduct = serde_json::from_str(r#"{"price":12.5}"#).unwrap();
        assert_eq!(price_only.price, Some(Decimal::from_str("12.5").unwrap()));
        assert!(price_only.validate().is_ok());
    }

    #[test]
    fn update_cannot_touch_id() {
        let parsed = serde_json::from_str::<UpdateProduct>(r#"{"id":7,"name":"Gadget"}"#);
        assert!(parsed.is_err());
    }
}
