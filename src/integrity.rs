//! Security Token Verification
//!
//! Invoice and voucher records issued by the remote service carry a "security
//! token": a hex digest binding together the document identity, its issuance
//! time, and its item content. This module recomputes that token from a local
//! copy of the document and compares it to the asserted value, letting a
//! holder detect any post-issuance mutation without contacting the server.
//!
//! ## Token composition
//!
//! For an invoice:
//!
//! ```text
//! token = sha1(time ++ id ++ number ++ md5(item1.id ++ item1.name)
//!                                   ++ md5(item2.id ++ item2.name)
//!                                   ++ ...)
//! ```
//!
//! For a voucher and the item template it is bound to:
//!
//! ```text
//! token = sha1(time ++ voucher.id ++ voucher.code ++ md5(template.id ++ template.code))
//! ```
//!
//! All concatenations are byte-for-byte with no delimiter; numbers render in
//! canonical base-10; absent fields render as the empty string. The only
//! short-circuit is an invoice missing `id` or `number`, which verifies as a
//! definitive `false`.
//!
//! ## Key properties
//!
//! - **Order-sensitive**: reordering line items changes the token.
//! - **Closed over `bool`**: verification never errors or panics; a malformed
//!   document and a tampered document produce the same verdict.
//! - **Keyless**: the scheme is a public, recomputable checksum against
//!   casual tampering, not a MAC. Anyone holding the fields can recompute the
//!   token, so compatibility — not primitive strength — is the contract.
//!
//! ## Usage
//!
//! ```
//! use fapi_security::document::Invoice;
//! use fapi_security::integrity::verify_invoice_token;
//! use serde_json::json;
//!
//! # fn example() -> anyhow::Result<()> {
//! let invoice = Invoice::from_value(json!({
//!     "id": 42,
//!     "number": "F-001",
//!     "items": [{"id": 1, "name": "Widget"}],
//! }))?;
//!
//! let issued_at = 1000;
//! let asserted = "d56a7d1a1a06437990efeae5328da9ea82773bfc";
//! assert!(verify_invoice_token(&invoice, issued_at, asserted));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! This module is organized into focused submodules:
//!
//! - [`digest`]: MD5/SHA-1 primitives with lowercase-hex rendering
//! - [`verifier`]: token computation and comparison

pub mod digest;
pub mod verifier;

pub use digest::{md5_hex, sha1_hex};
pub use verifier::{
    compute_invoice_token, compute_voucher_token, verify_invoice_token, verify_voucher_token,
};
