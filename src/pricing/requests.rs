//! Request DTOs for quote endpoints.
//!
//! Quote requests never fail to convert: fields arrive as JSON numbers,
//! strings or query-string text, and anything unusable is clamped to a safe
//! default before it reaches the estimator.

use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::models::{Addons, Frequency, QuoteInput, ServiceTier};

/// Quote form fields, from a query string or a JSON body.
///
/// Deserializes through a plain key/value map, so any value type is
/// accepted and a repeated key keeps its last value. When a field arrives
/// under more than one of its names, the first name listed below wins.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct QuoteRequest {
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    pub sqft: Option<Value>,
    pub tier: Option<Value>,
    pub frequency: Option<Value>,
    pub eco_products: Option<Value>,
    pub fridge: Option<Value>,
    pub oven: Option<Value>,
    pub second_kitchen: Option<Value>,
    pub promo_code: Option<Value>,
    /// Set by the HTML form so unchecked boxes read as "off"
    pub submitted: Option<Value>,
}

/// First non-null value among a field's accepted names
fn take(fields: &mut Map<String, Value>, names: &[&str]) -> Option<Value> {
    names
        .iter()
        .filter_map(|name| fields.remove(*name))
        .find(|value| !value.is_null())
}

impl From<Map<String, Value>> for QuoteRequest {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            bedrooms: take(&mut fields, &["bedrooms"]),
            bathrooms: take(&mut fields, &["bathrooms"]),
            sqft: take(&mut fields, &["sqft", "entered_sqft"]),
            tier: take(&mut fields, &["tier", "level", "clean_type"]),
            frequency: take(&mut fields, &["frequency"]),
            eco_products: take(&mut fields, &["eco_products", "eco"]),
            fridge: take(&mut fields, &["fridge"]),
            oven: take(&mut fields, &["oven"]),
            second_kitchen: take(&mut fields, &["second_kitchen"]),
            promo_code: take(&mut fields, &["promo_code", "promo"]),
            submitted: take(&mut fields, &["submitted"]),
        }
    }
}

impl QuoteRequest {
    /// Whether this came from a submitted form rather than a bare link
    pub fn is_form_submission(&self) -> bool {
        self.submitted.as_ref().map_or(false, value_as_flag)
    }

    /// Convert into engine input, filling gaps from `QuoteInput::default()`
    pub fn into_input(self) -> QuoteInput {
        let defaults = QuoteInput::default();
        let form = self.is_form_submission();

        // Absent checkboxes mean "off" on a submitted form, "default" otherwise
        let flag = |value: &Option<Value>, default: bool| match value {
            Some(v) => value_as_flag(v),
            None if form => false,
            None => default,
        };

        QuoteInput {
            bedrooms: self.bedrooms.as_ref().map_or(defaults.bedrooms, value_as_count),
            bathrooms: self.bathrooms.as_ref().map_or(defaults.bathrooms, value_as_count),
            entered_sqft: self.sqft.as_ref().map_or(defaults.entered_sqft, value_as_sqft),
            tier: self
                .tier
                .as_ref()
                .and_then(value_as_text)
                .and_then(|text| ServiceTier::parse(&text))
                .unwrap_or(defaults.tier),
            frequency: self
                .frequency
                .as_ref()
                .and_then(value_as_text)
                .and_then(|text| Frequency::parse(&text))
                .unwrap_or(defaults.frequency),
            eco_products: flag(&self.eco_products, defaults.eco_products),
            addons: Addons {
                fridge: flag(&self.fridge, defaults.addons.fridge),
                oven: flag(&self.oven, defaults.addons.oven),
                second_kitchen: flag(&self.second_kitchen, defaults.addons.second_kitchen),
            },
            promo_code: self
                .promo_code
                .as_ref()
                .and_then(value_as_text)
                .unwrap_or(defaults.promo_code),
        }
    }
}

/// Scalar as text; arrays and objects have none
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(Decimal::from)
            .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
        Value::String(s) => {
            let s = s.trim().replace(',', "");
            Decimal::from_str(&s)
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(Decimal::from_f64))
        }
        _ => None,
    }
}

/// Room count; negatives, fractions and garbage collapse to a whole number >= 0
pub fn value_as_count(value: &Value) -> u32 {
    value_as_decimal(value)
        .map(|d| d.max(Decimal::ZERO).trunc())
        .and_then(|d| d.to_u32().or(Some(u32::MAX)))
        .unwrap_or(0)
}

/// Square footage; anything non-numeric or negative means "not provided"
pub fn value_as_sqft(value: &Value) -> Decimal {
    value_as_decimal(value)
        .map(|d| d.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// Checkbox-style value: `true`, `on`, `1`, `yes`
pub fn value_as_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "on" | "1" | "yes"
        ),
        _ => false,
    }
}
