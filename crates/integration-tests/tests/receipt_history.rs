//! Integration tests for receipt history: listing, viewing, charting and
//! the on-disk receipt file.

#![allow(clippy::unwrap_used)]

use std::fs;

use bistro_cli::ReceiptStore;
use bistro_integration_tests::{TestContext, transcript};
use serde_json::Value;

/// Two receipts: pizza with a 10% tip served by Sam, then a coffee with no tip.
fn two_receipt_history(ctx: &TestContext) {
    let _ = ctx.run("pepperoni pizza\npepperoni pizza\ndone\n1\nSam\ncoffee\ndone\n\n\nquit\n");
}

#[test]
fn test_view_out_of_range() {
    let ctx = TestContext::new();
    two_receipt_history(&ctx);

    let session = ctx.run("view 99\nview 0\nhistory\nquit\n");
    let out = transcript(&session);

    assert_eq!(out.matches("Receipt number not found.").count(), 2);
    assert!(out.contains("1. 2026-10-19T19:30:00.000000 - $21.22 - server: Sam\n"));
    assert!(out.contains("Thank you for visiting The Bistro!"));
}

#[test]
fn test_view_receipt() {
    let ctx = TestContext::new();
    two_receipt_history(&ctx);

    let out = transcript(&ctx.run("view 1\nview 2\nquit\n"));

    assert!(out.contains("Saved Receipt\nDate: 2026-10-19T19:30:00.000000\nServer: Sam\n"));
    assert!(out.contains(" - Pepperoni Pizza x2 @ $8.99 = $17.98\n"));
    assert!(out.contains("Subtotal: $17.98\nTax: $1.44\nTip: $1.80\nTOTAL: $21.22\n"));
    assert!(out.contains(" - Coffee x1 @ $2.99 = $2.99\n"));
    assert!(out.contains("TOTAL: $3.23\n"));
}

#[test]
fn test_view_usage() {
    let ctx = TestContext::new();
    let out = transcript(&ctx.run("view\nview one\nview 1 2\nquit\n"));
    assert_eq!(out.matches("Usage: view X").count(), 3);
}

#[test]
fn test_empty_history() {
    let ctx = TestContext::new();
    let out = transcript(&ctx.run("history\nchart\nview 1\nquit\n"));

    assert!(out.contains("No saved receipts."));
    assert!(out.contains("No receipts available to chart."));
    assert!(out.contains("Receipt number not found."));
    assert!(!out.contains("Warning"));
}

#[test]
fn test_chart() {
    let ctx = TestContext::new();
    two_receipt_history(&ctx);

    let out = transcript(&ctx.run("chart\nquit\n"));
    assert!(out.contains("Total Spending per Receipt"));
    assert!(out.contains(&format!("R1 | {} $21.22", "#".repeat(40))));
    assert!(out.contains("R2 | ###### $3.23"));
}

#[test]
fn test_corrupt_file_starts_fresh() {
    let ctx = TestContext::new();
    fs::write(ctx.store_path(), "this is not json").unwrap();

    let session = ctx.run("history\nsoda\ndone\n\n\nquit\n");
    let out = transcript(&session);

    assert!(out.starts_with("Warning: could not read saved receipts; starting fresh.\n"));
    assert!(out.contains("No saved receipts."));

    // The next checkout replaces the corrupt file with the new history.
    let saved = ReceiptStore::load(ctx.store_path()).unwrap();
    assert_eq!(saved.len(), 1);
}

#[test]
fn test_out_of_range_amounts_do_not_end_the_session() {
    let ctx = TestContext::new();
    fs::write(
        ctx.store_path(),
        r#"[
            {"subtotal": 79228162514264337593543950335,
             "tax": 79228162514264337593543950335, "tip": 0, "total": 1},
            {"items": [{"name": "x", "qty": 3, "price": 79228162514264337593543950335}],
             "total": 1}
        ]"#,
    )
    .unwrap();

    let session = ctx.run("history\nview 1\nview 2\nchart\nquit\n");
    let out = transcript(&session);

    assert!(!out.contains("Warning"));
    assert!(out.contains("1. unknown - $1.00"));
    assert!(out.contains("2. unknown - $1.00"));
    assert!(out.contains(" - x x3 @ $"));
    assert!(out.contains(" = n/a\n"));
    assert!(out.contains("R2 | "));
    assert!(out.ends_with("Thank you for visiting The Bistro!\n"));
    assert_eq!(session.store().len(), 2);
}

#[test]
fn test_missing_file_has_no_warning() {
    let ctx = TestContext::new();
    let session = ctx.run("quit\n");

    assert!(session.store().is_empty());
    assert!(!transcript(&session).contains("Warning"));
}

#[test]
fn test_file_format() {
    let ctx = TestContext::new();
    let _ = ctx.run("pepperoni pizza\ncafé\ndone\n1\nZoë\nquit\n");
    let _ = ctx.run("juice\ndone\n\nRenée 🍕\nquit\n");

    let content = fs::read_to_string(ctx.store_path()).unwrap();
    assert!(content.contains("Zoë"));
    assert!(content.contains("Renée 🍕"));
    assert!(content.contains("\n  {\n    \"timestamp\""));

    let value: Value = serde_json::from_str(&content).unwrap();
    let receipts = value.as_array().unwrap();
    assert_eq!(receipts.len(), 2);

    for receipt in receipts {
        assert!(receipt["timestamp"].is_string());
        assert!(receipt["server"].is_string());
        for key in ["subtotal", "tax", "tip", "total"] {
            assert!(receipt[key].is_number(), "{key} should be a number");
        }
        for item in receipt["items"].as_array().unwrap() {
            assert!(item["name"].is_string());
            assert!(item["qty"].is_u64());
            assert!(item["price"].is_number());
        }
    }
}

#[test]
fn test_loads_receipts_written_with_float_noise() {
    let ctx = TestContext::new();
    fs::write(
        ctx.store_path(),
        r#"[
  {
    "timestamp": "2025-03-01T18:22:05.123456",
    "server": "",
    "items": [{"name": "Pepperoni Pizza", "qty": 2, "price": 8.99}],
    "subtotal": 17.98,
    "tax": 1.4384000000000001,
    "tip": 1.8,
    "total": 21.218400000000003
  }
]"#,
    )
    .unwrap();

    let out = transcript(&ctx.run("history\nview 1\nquit\n"));
    assert!(out.contains("1. 2025-03-01T18:22:05.123456 - $21.22\n"));
    assert!(out.contains("TOTAL: $21.22\n"));
}
