//! Order snapshot as handed over by the data layer.
//!
//! # Purpose
//! Backend payloads are untyped: any field may be missing, `null`, a number
//! where a string was expected, or a string where a boolean was expected.
//! [`OrderSnapshot`] accepts all of that. Each field goes through a lenient
//! deserializer, so building a snapshot from a JSON object never fails and
//! unknown extra fields are ignored.
//!
//! Values are stored as received (untrimmed, original case). Normalization
//! happens at comparison time via [`OrderSnapshot::norm`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub store_status: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub dispatch_status: Option<String>,

    #[serde(default, deserialize_with = "lenient::ident", skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::ident", skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub cancelled_by: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub requires_quote_confirmation: bool,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub request_kind: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub quote_status: Option<String>,

    /// Courier-proximity hint, passed through from the producer as-is.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub near_you: bool,
}

impl OrderSnapshot {
    /// Build from an arbitrary JSON value. Non-objects yield an empty snapshot.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Parse a JSON document. Only malformed JSON is an error.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Trimmed, lower-cased view of an optional text field (`""` when absent).
    pub fn norm(field: &Option<String>) -> String {
        field
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default()
    }

    pub fn has_store(&self) -> bool {
        is_associated(&self.store_id)
    }

    pub fn has_driver(&self) -> bool {
        is_associated(&self.driver_id)
    }
}

fn is_associated(id: &Option<String>) -> bool {
    id.as_deref().is_some_and(|s| !s.trim().is_empty())
}

mod lenient {
    use super::*;

    /// Strings as-is, numbers and booleans as JSON text, everything else absent.
    pub fn text<'de, D>(d: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Option::<Value>::deserialize(d)?;
        Ok(match v {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }

    /// Identifier presence: strings and numbers only.
    pub fn ident<'de, D>(d: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Option::<Value>::deserialize(d)?;
        Ok(match v {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Boolean-ish: `true`, non-zero numbers, and `true|1|yes|y` strings.
    pub fn flag<'de, D>(d: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Option::<Value>::deserialize(d)?;
        Ok(match v {
            Some(Value::Bool(b)) => b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => {
                matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "y")
            }
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_fields_are_absent() {
        let snap = OrderSnapshot::from_value(&json!({ "status": null }));
        assert_eq!(snap, OrderSnapshot::default());
    }

    #[test]
    fn non_object_is_empty_snapshot() {
        assert_eq!(OrderSnapshot::from_value(&json!([1, 2, 3])), OrderSnapshot::default());
        assert_eq!(OrderSnapshot::from_value(&json!("pending")), OrderSnapshot::default());
    }

    #[test]
    fn numbers_become_text_and_ids() {
        let snap = OrderSnapshot::from_value(&json!({ "store_id": 5, "status": 3 }));
        assert_eq!(snap.store_id.as_deref(), Some("5"));
        assert_eq!(snap.status.as_deref(), Some("3"));
        assert!(snap.has_store());
    }

    #[test]
    fn blank_or_boolean_ids_are_not_associations() {
        let snap = OrderSnapshot::from_value(&json!({ "store_id": "  ", "driver_id": false }));
        assert!(!snap.has_store());
        assert!(!snap.has_driver());
    }

    #[test]
    fn flags_accept_boolean_ish_values() {
        for v in [json!(true), json!(1), json!("TRUE"), json!(" yes "), json!("1")] {
            let snap = OrderSnapshot::from_value(&json!({ "near_you": v.clone() }));
            assert!(snap.near_you, "{v} should be truthy");
        }
        for v in [json!(false), json!(0), json!("no"), json!(""), json!(null), json!({})] {
            let snap = OrderSnapshot::from_value(&json!({ "near_you": v.clone() }));
            assert!(!snap.near_you, "{v} should be falsy");
        }
    }

    #[test]
    fn nested_objects_in_text_fields_are_dropped() {
        let snap = OrderSnapshot::from_value(&json!({ "status": { "code": "pending" } }));
        assert_eq!(snap.status, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let snap = OrderSnapshot::from_value(&json!({
            "store_id": "s-1",
            "payment_method": "Card",
            "requires_quote_confirmation": "true",
            "customer": { "name": "x" },
            "eta_minutes": 12,
        }));
        assert!(snap.has_store());
        assert_eq!(OrderSnapshot::norm(&snap.payment_method), "card");
        assert!(snap.requires_quote_confirmation);
    }

    #[test]
    fn norm_trims_and_lowercases() {
        assert_eq!(OrderSnapshot::norm(&Some("  In_Transit ".into())), "in_transit");
        assert_eq!(OrderSnapshot::norm(&None), "");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(OrderSnapshot::from_json_str("{not json").is_err());
        assert_eq!(
            OrderSnapshot::from_json_str("null").unwrap(),
            OrderSnapshot::default()
        );
    }
}
