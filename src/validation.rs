//! Inbound payload validation. Validators collect every violation and return
//! either a typed input or a field → messages map.

use crate::models::{CustomerInput, OrderInput, ProductInput};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-field validation messages, serialized as a plain JSON map.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages_for(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Customer payload: name, email, phone required strings. Presence and type
/// only; no format or length checks.
pub fn validate_customer(body: &Value) -> Result<CustomerInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let name = require_string(body, "name", &mut errors);
    let email = require_string(body, "email", &mut errors);
    let phone = require_string(body, "phone", &mut errors);
    if errors.is_empty() {
        if let (Some(name), Some(email), Some(phone)) = (name, email, phone) {
            return Ok(CustomerInput { name, email, phone });
        }
    }
    Err(errors)
}

/// Product payload: name required non-empty string, price required number >= 0.
pub fn validate_product(body: &Value) -> Result<ProductInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let name = require_string(body, "name", &mut errors);
    if let Some(ref n) = name {
        if n.is_empty() {
            errors.push("name", "Shorter than minimum length 1.");
        }
    }
    let price = require_number(body, "price", &mut errors);
    if let Some(p) = price {
        if p < 0.0 {
            errors.push("price", "Must be greater than or equal to 0.");
        }
    }
    if errors.is_empty() {
        if let (Some(name), Some(price)) = (name, price) {
            return Ok(ProductInput { name, price });
        }
    }
    Err(errors)
}

/// Order payload: date required as a YYYY-MM-DD string, customer_id optional
/// integer. Referential existence of the customer is checked at the handler.
pub fn validate_order(body: &Value) -> Result<OrderInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let date = require_string(body, "date", &mut errors).and_then(|s| {
        match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                errors.push("date", "Not a valid date.");
                None
            }
        }
    });
    let customer_id = match body.get("customer_id") {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(id) => Some(id),
            None => {
                errors.push("customer_id", "Not a valid integer.");
                None
            }
        },
        Some(_) => {
            errors.push("customer_id", "Not a valid integer.");
            None
        }
    };
    if errors.is_empty() {
        if let Some(date) = date {
            return Ok(OrderInput { date, customer_id });
        }
    }
    Err(errors)
}

fn require_string(body: &Value, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, "Missing data for required field.");
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(field, "Not a valid string.");
            None
        }
    }
}

fn require_number(body: &Value, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, "Missing data for required field.");
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => Some(f),
            None => {
                errors.push(field, "Not a valid number.");
                None
            }
        },
        Some(_) => {
            errors.push(field, "Not a valid number.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_customer_passes() {
        let body = json!({"name": "Ada", "email": "ada@example.com", "phone": "555-0100"});
        let input = validate_customer(&body).unwrap();
        assert_eq!(input.name, "Ada");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.phone, "555-0100");
    }

    #[test]
    fn customer_missing_fields_all_reported() {
        let body = json!({"name": "Ada"});
        let errors = validate_customer(&body).unwrap_err();
        assert_eq!(errors.messages_for("email"), ["Missing data for required field."]);
        assert_eq!(errors.messages_for("phone"), ["Missing data for required field."]);
        assert!(errors.messages_for("name").is_empty());
    }

    #[test]
    fn customer_non_string_field_rejected() {
        let body = json!({"name": "Ada", "email": 42, "phone": "555-0100"});
        let errors = validate_customer(&body).unwrap_err();
        assert_eq!(errors.messages_for("email"), ["Not a valid string."]);
    }

    #[test]
    fn customer_null_counts_as_missing() {
        let body = json!({"name": null, "email": "a@b.c", "phone": "1"});
        let errors = validate_customer(&body).unwrap_err();
        assert_eq!(errors.messages_for("name"), ["Missing data for required field."]);
    }

    #[test]
    fn valid_product_passes() {
        let body = json!({"name": "Widget", "price": 9.99});
        let input = validate_product(&body).unwrap();
        assert_eq!(input.name, "Widget");
        assert_eq!(input.price, 9.99);
    }

    #[test]
    fn product_zero_price_is_allowed() {
        let body = json!({"name": "Freebie", "price": 0});
        assert!(validate_product(&body).is_ok());
    }

    #[test]
    fn product_negative_price_rejected() {
        let body = json!({"name": "Widget", "price": -1.0});
        let errors = validate_product(&body).unwrap_err();
        assert_eq!(
            errors.messages_for("price"),
            ["Must be greater than or equal to 0."]
        );
    }

    #[test]
    fn product_empty_name_rejected() {
        let body = json!({"name": "", "price": 1.0});
        let errors = validate_product(&body).unwrap_err();
        assert_eq!(errors.messages_for("name"), ["Shorter than minimum length 1."]);
    }

    #[test]
    fn product_missing_price_rejected() {
        let body = json!({"name": "Widget"});
        let errors = validate_product(&body).unwrap_err();
        assert_eq!(errors.messages_for("price"), ["Missing data for required field."]);
    }

    #[test]
    fn product_string_price_rejected() {
        let body = json!({"name": "Widget", "price": "9.99"});
        let errors = validate_product(&body).unwrap_err();
        assert_eq!(errors.messages_for("price"), ["Not a valid number."]);
    }

    #[test]
    fn product_all_violations_reported_together() {
        let body = json!({"name": "", "price": -5});
        let errors = validate_product(&body).unwrap_err();
        assert!(!errors.messages_for("name").is_empty());
        assert!(!errors.messages_for("price").is_empty());
    }

    #[test]
    fn valid_order_passes() {
        let body = json!({"date": "2024-06-01", "customer_id": 3});
        let input = validate_order(&body).unwrap();
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(input.customer_id, Some(3));
    }

    #[test]
    fn order_customer_id_is_optional() {
        let body = json!({"date": "2024-06-01"});
        let input = validate_order(&body).unwrap();
        assert_eq!(input.customer_id, None);
    }

    #[test]
    fn order_bad_date_rejected() {
        let body = json!({"date": "June 1st"});
        let errors = validate_order(&body).unwrap_err();
        assert_eq!(errors.messages_for("date"), ["Not a valid date."]);
    }

    #[test]
    fn order_non_integer_customer_id_rejected() {
        let body = json!({"date": "2024-06-01", "customer_id": "three"});
        let errors = validate_order(&body).unwrap_err();
        assert_eq!(errors.messages_for("customer_id"), ["Not a valid integer."]);
    }

    #[test]
    fn errors_serialize_as_plain_map() {
        let body = json!({"name": "Widget", "price": -1});
        let errors = validate_product(&body).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, json!({"price": ["Must be greater than or equal to 0."]}));
    }
}
