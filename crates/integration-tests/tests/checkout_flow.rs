//! Integration tests for checkout: cart to receipt to receipt file.

#![allow(clippy::unwrap_used)]

use bistro_cli::ReceiptStore;
use bistro_integration_tests::{TestContext, transcript};
use rust_decimal::Decimal;

#[test]
fn test_two_pizzas_with_ten_percent_tip() {
    let ctx = TestContext::new();
    let session = ctx.run("pepperoni pizza\nPEPPERONI PIZZA\ndone\n1\nSam\nquit\n");
    let out = transcript(&session);

    assert!(out.contains("Pepperoni Pizza has been added to your cart."));
    assert!(out.contains(" - Pepperoni Pizza (x2) @ $8.99 = $17.98"));
    assert!(out.contains("Subtotal: $17.98"));
    assert!(out.contains("Sales tax (8%): $1.44"));
    assert!(out.contains("Tip: $1.80"));
    assert!(out.contains("TOTAL DUE: $21.22"));
    assert!(out.contains("Thank you for dining at The Bistro!"));

    assert!(session.cart().is_empty());
    assert_eq!(session.store().len(), 1);

    let receipt = session.store().get(0).unwrap();
    assert_eq!(receipt.server(), Some("Sam"));
    assert_eq!(receipt.timestamp(), "2026-10-19T19:30:00.000000");
    assert_eq!(receipt.items().len(), 1);
    assert_eq!(receipt.items()[0].qty, 2);
    assert_eq!(receipt.subtotal(), Decimal::new(1798, 2));
    assert_eq!(receipt.tax(), Decimal::new(14384, 4));
    assert_eq!(receipt.tip(), Decimal::new(180, 2));
    assert_eq!(receipt.total(), Decimal::new(212_184, 4));
}

#[test]
fn test_receipt_is_persisted() {
    let ctx = TestContext::new();
    let session = ctx.run("tea\nfamous salad\ntea\ndone\n3\n\nquit\n");

    let saved = ReceiptStore::load(ctx.store_path()).unwrap();
    assert_eq!(saved.receipts(), session.store().receipts());

    let receipt = saved.get(0).unwrap();
    assert_eq!(receipt.total(), receipt.subtotal() + receipt.tax() + receipt.tip());
    // 20% of 14.97 = 2.994, rounded to cents
    assert_eq!(receipt.tip(), Decimal::new(299, 2));
    assert_eq!(receipt.server(), None);
}

#[test]
fn test_empty_cart_checkout() {
    let ctx = TestContext::new();
    let session = ctx.run("done\nquit\n");

    assert!(transcript(&session).contains("Nothing to checkout."));
    assert!(session.store().is_empty());
    assert!(!ctx.store_path().exists());
}

#[test]
fn test_custom_tip_is_not_rounded() {
    let ctx = TestContext::new();
    let session = ctx.run("coffee\ndone\n4\n3.505\n\nquit\n");

    let out = transcript(&session);
    assert!(out.contains("Enter custom tip amount (e.g. 3.50): "));
    assert!(out.contains("Tip: $3.51"));

    let receipt = session.store().get(0).unwrap();
    assert_eq!(receipt.tip(), Decimal::new(3505, 3));
    assert_eq!(receipt.total(), Decimal::new(299, 2) + Decimal::new(2392, 4) + Decimal::new(3505, 3));
}

#[test]
fn test_skipped_tip() {
    let ctx = TestContext::new();
    let session = ctx.run("soda\ndone\n\n\nquit\n");

    let out = transcript(&session);
    assert!(out.contains("Tip: $0.00"));
    assert!(!out.contains("Invalid tip choice"));
    assert_eq!(session.store().get(0).unwrap().tip(), Decimal::ZERO);
}

#[test]
fn test_invalid_tip_choices_fall_back_to_zero() {
    for answer in ["abc", "0", "5", "-1", "4\nlots", "4\n-2"] {
        let ctx = TestContext::new();
        let session = ctx.run(&format!("juice\ndone\n{answer}\nAlex\nquit\n"));

        let out = transcript(&session);
        assert!(
            out.contains("Invalid tip choice; no tip will be added."),
            "answer {answer:?} should be rejected"
        );
        let receipt = session.store().get(0).unwrap();
        assert_eq!(receipt.tip(), Decimal::ZERO);
        assert_eq!(receipt.server(), Some("Alex"));
    }
}

#[test]
fn test_tip_too_large_for_the_bill_is_dropped() {
    let ctx = TestContext::new();
    let session = ctx.run("pepperoni pizza\ndone\n4\n79228162514264337593543950335\n\nquit\n");

    let out = transcript(&session);
    assert!(out.contains("Invalid tip choice; no tip will be added."));
    assert!(out.contains("Tip: $0.00"));
    assert!(out.contains("TOTAL DUE: $9.71"));
    assert!(out.ends_with("Thank you for visiting The Bistro!\n"));

    let receipt = session.store().get(0).unwrap();
    assert_eq!(receipt.tip(), Decimal::ZERO);
    assert_eq!(receipt.total(), Decimal::new(97092, 4));
    assert!(session.cart().is_empty());
}

#[test]
fn test_failed_save_still_clears_cart() {
    let ctx = TestContext::new();
    // A directory cannot be read or written as the receipt file.
    let session = ctx.run_at(ctx.dir(), "coffee\ndone\n2\n\ncart\nhistory\nquit\n");
    let out = transcript(&session);

    assert!(out.contains("Warning: could not read saved receipts; starting fresh."));
    assert!(out.contains("Error: failed to save receipts to disk."));
    assert!(out.contains("Your cart is currently empty."));

    // The receipt stays in memory for the rest of the session.
    assert!(session.cart().is_empty());
    assert_eq!(session.store().len(), 1);
    assert!(out.contains("1. 2026-10-19T19:30:00.000000 - "));
}

#[test]
fn test_remove_flow() {
    let ctx = TestContext::new();
    let session = ctx.run("tea\ntea\nremove\nTEA\ncart\nremove\ncoffee\nremove\ntea\nremove\nquit\n");
    let out = transcript(&session);

    assert!(out.contains("Tea has been removed from your cart."));
    assert!(out.contains(" - Tea x1\n"));
    assert!(out.contains("Item not found in your cart."));
    assert!(out.contains("Nothing to remove."));
    assert!(session.cart().is_empty());
}

#[test]
fn test_receipts_accumulate_across_sessions() {
    let ctx = TestContext::new();
    let _ = ctx.run("coffee\ndone\n1\nSam\nquit\n");
    let second = ctx.run("tea\ndone\n\n\nhistory\nquit\n");

    assert_eq!(second.store().len(), 2);
    let out = transcript(&second);
    assert!(out.contains("1. 2026-10-19T19:30:00.000000 - $3.53 - server: Sam\n"));
    assert!(out.contains("2. 2026-10-19T19:30:00.000000 - $4.31\n"));
}
