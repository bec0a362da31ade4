//! Typed document model for records fetched from the invoicing service.
//!
//! The remote API hands documents over as JSON objects with a loosely defined
//! shape: fields may be missing, and extra fields appear as the service
//! evolves. This module pins down the handful of fields the security-token
//! scheme actually reads, while staying tolerant of everything else:
//!
//! - Unknown keys are ignored during deserialization.
//! - Absent keys deserialize to `None` (or an empty item list) rather than
//!   failing, mirroring how the service treats them.
//!
//! Documents are plain values. The verifier borrows them read-only and never
//! mutates or retains them.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An invoice record, reduced to the fields covered by its security token.
///
/// `id` and `number` are both required for verification; either missing makes
/// the invoice unverifiable (see
/// [`verify_invoice_token`](crate::integrity::verify_invoice_token)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// Internal identifier assigned by the service
    pub id: Option<i64>,

    /// Display number shown on the issued document (e.g. "2023-0001")
    pub number: Option<String>,

    /// Line items, in issuance order. Order is significant: the token binds
    /// the exact sequence, not just the set.
    pub items: Vec<InvoiceItem>,
}

/// A single invoice line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceItem {
    /// Item identifier
    pub id: Option<i64>,

    /// Item name as printed on the invoice
    pub name: Option<String>,
}

/// A voucher record, reduced to the fields covered by its security token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voucher {
    /// Internal identifier assigned by the service
    pub id: Option<i64>,

    /// Redeemable voucher code (e.g. "SAVE20")
    pub code: Option<String>,
}

/// The item template a voucher is bound to.
///
/// Unlike invoices, a voucher references exactly one item type, so the token
/// covers a single template rather than a sequence of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemTemplate {
    /// Template identifier
    pub id: Option<i64>,

    /// Template code
    pub code: Option<String>,
}

impl Invoice {
    /// Build an invoice from a raw JSON value as returned by the REST client.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`](crate::error::DocumentError::Json) if
    /// the value is not an object or a present field has the wrong type.
    /// Absent fields are not an error.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl Voucher {
    /// Build a voucher from a raw JSON value as returned by the REST client.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`](crate::error::DocumentError::Json) if
    /// the value is not an object or a present field has the wrong type.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl ItemTemplate {
    /// Build an item template from a raw JSON value as returned by the REST
    /// client.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`](crate::error::DocumentError::Json) if
    /// the value is not an object or a present field has the wrong type.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoice_from_full_payload() {
        let invoice = Invoice::from_value(json!({
            "id": 42,
            "number": "F-001",
            "items": [{"id": 1, "name": "Widget"}],
        }))
        .unwrap();

        assert_eq!(invoice.id, Some(42));
        assert_eq!(invoice.number.as_deref(), Some("F-001"));
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].name.as_deref(), Some("Widget"));
    }

    #[test]
    fn test_invoice_missing_fields_become_none() {
        let invoice = Invoice::from_value(json!({})).unwrap();

        assert_eq!(invoice.id, None);
        assert_eq!(invoice.number, None);
        assert!(invoice.items.is_empty());
    }

    #[test]
    fn test_invoice_ignores_unknown_keys() {
        let invoice = Invoice::from_value(json!({
            "id": 7,
            "number": "F-002",
            "items": [],
            "paid": true,
            "customer": {"email": "a@example.com"},
        }))
        .unwrap();

        assert_eq!(invoice.id, Some(7));
        assert_eq!(invoice.number.as_deref(), Some("F-002"));
    }

    #[test]
    fn test_invoice_rejects_non_object() {
        assert!(Invoice::from_value(json!("not an object")).is_err());
    }

    #[test]
    fn test_invoice_rejects_wrong_field_type() {
        // A present field with the wrong type is a malformed payload, not an
        // absent field.
        assert!(Invoice::from_value(json!({"id": 42, "number": 13})).is_err());
    }

    #[test]
    fn test_voucher_and_template_from_payload() {
        let voucher = Voucher::from_value(json!({"id": 7, "code": "SAVE20"})).unwrap();
        let template = ItemTemplate::from_value(json!({"id": 3, "code": "GOLD"})).unwrap();

        assert_eq!(voucher.id, Some(7));
        assert_eq!(voucher.code.as_deref(), Some("SAVE20"));
        assert_eq!(template.id, Some(3));
        assert_eq!(template.code.as_deref(), Some("GOLD"));
    }

    #[test]
    fn test_voucher_empty_payload() {
        let voucher = Voucher::from_value(json!({})).unwrap();
        assert_eq!(voucher, Voucher::default());
    }
}
