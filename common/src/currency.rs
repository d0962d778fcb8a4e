use crate::catalog::FlatPrice;

/// Rupee sign used in every displayed amount.
pub const RUPEE: &str = "₹";

/// Group digits the Indian way: last three, then pairs (`12,34,567`).
pub fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Format a rupee amount for display, e.g. `₹1,000`.
pub fn format_inr(amount: u64) -> String {
    format!("{RUPEE}{}", group_indian(amount))
}

/// Display string for a flat-priced service.
pub fn format_flat(price: FlatPrice) -> String {
    match price {
        FlatPrice::Amount(amount) => format_inr(amount),
        FlatPrice::Free => "Free".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_ungrouped() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(250), "₹250");
        assert_eq!(format_inr(999), "₹999");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr(1000), "₹1,000");
        assert_eq!(format_inr(12_000), "₹12,000");
        assert_eq!(format_inr(100_000), "₹1,00,000");
        assert_eq!(format_inr(1_234_567), "₹12,34,567");
        assert_eq!(format_inr(10_000_000), "₹1,00,00,000");
    }

    #[test]
    fn flat_prices() {
        assert_eq!(format_flat(FlatPrice::Free), "Free");
        assert_eq!(format_flat(FlatPrice::Amount(1000)), "₹1,000");
    }
}
