//! Spending series for the history chart.
//!
//! Only the numbers live here; drawing is up to the caller.

use rust_decimal::Decimal;

use crate::types::Receipt;

/// One bar of the spending chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    /// `R1`, `R2`, ... in receipt order.
    pub label: String,
    /// The receipt's stored total.
    pub total: Decimal,
}

/// Total per receipt, labelled `R1, R2, …` in history order.
#[must_use]
pub fn spending_series(receipts: &[Receipt]) -> Vec<ChartBar> {
    receipts
        .iter()
        .enumerate()
        .map(|(i, receipt)| ChartBar {
            label: format!("R{}", i + 1),
            total: receipt.total(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        assert!(spending_series(&[]).is_empty());
    }

    #[test]
    fn test_labels_and_totals() {
        let receipts: Vec<Receipt> =
            serde_json::from_str(r#"[{"total": 12.5}, {"total": 3}, {}]"#).unwrap();
        let series = spending_series(&receipts);

        let labels: Vec<&str> = series.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["R1", "R2", "R3"]);
        assert_eq!(series[0].total, Decimal::new(125, 1));
        assert_eq!(series[1].total, Decimal::new(3, 0));
        assert_eq!(series[2].total, Decimal::ZERO);
    }
}
