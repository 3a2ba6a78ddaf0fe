/// Formats an integer with comma thousands separators
///
/// # Examples
/// ```
/// use analytics::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(-4200), "-4,200");
/// ```
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Amount in Ugandan shillings without fraction digits, e.g. "UGX 1,234,567"
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "UGX -".to_string();
    }
    format!("UGX {}", format_thousands(amount.round() as i64))
}

/// Money column of a report: two decimals, no grouping
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(42), "42");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567890), "1,234,567,890");
        assert_eq!(format_thousands(-999), "-999");
        assert_eq!(format_thousands(-1000), "-1,000");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "UGX 0");
        assert_eq!(format_currency(1234567.4), "UGX 1,234,567");
        assert_eq!(format_currency(999.5), "UGX 1,000");
        assert_eq!(format_currency(f64::NAN), "UGX -");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(10.0), "10.00");
        assert_eq!(format_money(1499.999), "1500.00");
    }
}
