//! Example: Invoice Token Verification
//!
//! This example demonstrates how to:
//! 1. Build an invoice from a raw JSON payload
//! 2. Verify the security token the service issued for it
//! 3. Detect tampering (item altered after issuance)
//!
//! Run with: cargo run --example verify_invoice

use fapi_security::document::{Invoice, ItemTemplate, Voucher};
use fapi_security::integrity::{
    compute_invoice_token, compute_voucher_token, verify_invoice_token, verify_voucher_token,
};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    println!("=== Security Token Verification Example ===\n");

    // 1. A payload as the REST client would hand it over
    println!("1. Parsing invoice payload...");
    let payload = json!({
        "id": 42,
        "number": "F-001",
        "items": [{"id": 1, "name": "Widget"}],
        "paid": true,
    });
    let invoice = Invoice::from_value(payload)?;
    println!("   Invoice #{} ({} items)", invoice.number.as_deref().unwrap_or("?"), invoice.items.len());

    // 2. The token the service issued at time 1000
    let issued_at = 1000;
    let issued_token =
        compute_invoice_token(&invoice, issued_at).expect("invoice has id and number");
    println!("\n2. Issued token: {issued_token}");

    // 3. Verify the pristine invoice (should PASS)
    println!("\n3. Verifying pristine invoice...");
    let verdict = verify_invoice_token(&invoice, issued_at, &issued_token);
    println!("   Verdict: {}", if verdict { "✓ PASS" } else { "✗ FAIL" });

    // 4. Tamper with a line item and verify again (should FAIL)
    println!("\n4. Renaming line item after issuance...");
    let mut tampered = invoice.clone();
    tampered.items[0].name = Some("Premium Widget".to_owned());
    let verdict = verify_invoice_token(&tampered, issued_at, &issued_token);
    println!("   Verdict: {}", if verdict { "✓ PASS" } else { "✗ FAIL" });

    // 5. Vouchers work the same way, against their item template
    println!("\n5. Verifying a voucher...");
    let voucher = Voucher::from_value(json!({"id": 7, "code": "SAVE20"}))?;
    let template = ItemTemplate::from_value(json!({"id": 3, "code": "GOLD"}))?;
    let voucher_token = compute_voucher_token(&voucher, &template, issued_at);
    let verdict = verify_voucher_token(&voucher, &template, issued_at, &voucher_token);
    println!("   Token: {voucher_token}");
    println!("   Verdict: {}", if verdict { "✓ PASS" } else { "✗ FAIL" });

    println!("\n=== Example Complete ===");
    println!("\nKey Takeaways:");
    println!("- Verification is offline: no call to the service is made");
    println!("- Any mutation of covered fields flips the verdict");
    println!("- Malformed and tampered documents are indistinguishable: both just fail");

    Ok(())
}
