//! # fapi-security - Invoice & Voucher Token Verification
//!
//! Client-side verification of the tamper-evident security tokens embedded in
//! invoice and voucher records fetched from the remote invoicing service.
//! Verification is pure, offline computation: given a document, its issuance
//! time, and the token asserted for it, the library recomputes the expected
//! token and returns a boolean verdict. No network, no state, no secrets.
//!
//! ## Quick Start
//!
//! ```
//! use fapi_security::document::{Invoice, InvoiceItem};
//! use fapi_security::integrity::{compute_invoice_token, verify_invoice_token};
//!
//! let invoice = Invoice {
//!     id: Some(42),
//!     number: Some("F-001".to_owned()),
//!     items: vec![InvoiceItem {
//!         id: Some(1),
//!         name: Some("Widget".to_owned()),
//!     }],
//! };
//!
//! let issued_at = 1000;
//! let token = compute_invoice_token(&invoice, issued_at).expect("id and number present");
//! assert!(verify_invoice_token(&invoice, issued_at, &token));
//!
//! // Any mutation after issuance flips the verdict.
//! let mut tampered = invoice.clone();
//! tampered.items[0].name = Some("Gadget".to_owned());
//! assert!(!verify_invoice_token(&tampered, issued_at, &token));
//! ```
//!
//! ## Core Modules
//!
//! - [`document`]: typed invoice/voucher records with absent-capable fields,
//!   deserializable straight from the service's JSON payloads
//! - [`integrity`]: token computation and verification
//!   - [`integrity::digest`]: MD5/SHA-1 lowercase-hex primitives
//!   - [`integrity::verifier`]: the verification logic itself
//! - [`error`]: error types for document handling
//!
//! ## Key Concepts
//!
//! ### Closed verdict space
//!
//! Verification never returns an error: every input maps to `true` or
//! `false`. Missing fields degrade to empty strings in the digest input (and
//! so fail against any plausible token) rather than raising a fault. The one
//! explicit rule: an invoice without both `id` and `number` is always
//! `false`. A caller cannot tell a malformed document from a tampered one,
//! which is deliberate.
//!
//! ### Compatibility over strength
//!
//! The scheme is keyless MD5/SHA-1 over publicly derivable fields — an
//! integrity checksum, not an authentication tag. The primitives are fixed by
//! the issuing service; "upgrading" them would break every token already in
//! the wild.
//!
//! ### Logging
//!
//! Diagnostics are emitted through [`tracing`] at `debug`/`trace` level. The
//! library never installs a subscriber; configure one in the host
//! application if you want to see mismatch details.

#![warn(clippy::all, rust_2018_idioms)]

pub mod document;
pub mod error;
pub mod integrity;

pub use document::{Invoice, InvoiceItem, ItemTemplate, Voucher};
pub use error::{DocumentError, Result};
pub use integrity::{verify_invoice_token, verify_voucher_token};
