//! Token computation and verification logic.
//!
//! A security token is recomputed from scratch on every call and compared to
//! the caller-supplied expected value with exact string equality. There is no
//! error path: every input maps to a boolean verdict, and a structurally
//! incomplete document simply fails verification the same way a tampered one
//! does.

use crate::document::{Invoice, ItemTemplate, Voucher};
use crate::integrity::digest::{md5_hex, sha1_hex};
use tracing::{debug, trace};

/// Render an optional numeric field for hashing.
///
/// Canonical base-10 formatting with no sign for non-negative values; absent
/// fields render as the empty string. The rendering feeds directly into the
/// digest input, so it must stay byte-identical to what the issuing service
/// produces.
fn id_str(id: Option<i64>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}

/// Render an optional string field for hashing, defaulting to empty.
fn text_str(text: Option<&str>) -> &str {
    text.unwrap_or("")
}

/// Concatenated per-item digests of an invoice, in item order.
///
/// Each line item contributes `md5(id ++ name)`; the results are joined with
/// no separator. An empty item list yields the empty string.
fn items_digest(invoice: &Invoice) -> String {
    let mut digest = String::with_capacity(invoice.items.len() * 32);
    for item in &invoice.items {
        digest.push_str(&md5_hex(&format!(
            "{}{}",
            id_str(item.id),
            text_str(item.name.as_deref())
        )));
    }
    digest
}

/// Compute the expected security token for an invoice.
///
/// The token is `sha1(time ++ id ++ number ++ items_digest)` where
/// `items_digest` concatenates `md5(item.id ++ item.name)` over the line
/// items in sequence order. All values are concatenated with no delimiter, so
/// the token is sensitive to every byte of every covered field, including
/// item order.
///
/// Returns `None` when `id` or `number` is absent: without both there is
/// nothing to bind the token to and verification cannot even be attempted.
pub fn compute_invoice_token(invoice: &Invoice, time: i64) -> Option<String> {
    let id = invoice.id?;
    let number = invoice.number.as_deref()?;

    let items = items_digest(invoice);
    Some(sha1_hex(&format!("{time}{id}{number}{items}")))
}

/// Compute the expected security token for a voucher.
///
/// The token is `sha1(time ++ voucher.id ++ voucher.code ++ template_digest)`
/// with `template_digest = md5(template.id ++ template.code)`. Unlike the
/// invoice case, absent fields degrade to the empty string instead of
/// refusing: a token is always computed.
pub fn compute_voucher_token(voucher: &Voucher, template: &ItemTemplate, time: i64) -> String {
    let template_digest = md5_hex(&format!(
        "{}{}",
        id_str(template.id),
        text_str(template.code.as_deref())
    ));

    sha1_hex(&format!(
        "{time}{}{}{template_digest}",
        id_str(voucher.id),
        text_str(voucher.code.as_deref())
    ))
}

/// Check an invoice against the security token asserted for it.
///
/// Recomputes the token from the invoice fields at the given issuance time
/// and compares it to `expected` with exact, case-sensitive equality on the
/// lowercase-hex form.
///
/// Returns `false` for any mismatch, including an invoice missing `id` or
/// `number` — the verdict deliberately does not distinguish a malformed
/// document from a tampered one. Never panics.
pub fn verify_invoice_token(invoice: &Invoice, time: i64, expected: &str) -> bool {
    let Some(computed) = compute_invoice_token(invoice, time) else {
        debug!("invoice has no id or no number, verification fails");
        return false;
    };

    let valid = computed == expected;
    if !valid {
        trace!(%computed, "invoice token mismatch");
    }
    valid
}

/// Check a voucher against the security token asserted for it.
///
/// Recomputes the token from the voucher and its item template at the given
/// issuance time and compares it to `expected` with exact, case-sensitive
/// equality on the lowercase-hex form. Never panics.
pub fn verify_voucher_token(
    voucher: &Voucher,
    template: &ItemTemplate,
    time: i64,
    expected: &str,
) -> bool {
    let computed = compute_voucher_token(voucher, template, time);

    let valid = computed == expected;
    if !valid {
        trace!(%computed, "voucher token mismatch");
    }
    valid
}
