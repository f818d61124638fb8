/// Formats a USD amount with thousands separators and exactly two decimals.
/// `63521.4` -> `$63,521.40`, `0.2345` -> `$0.23`, `-1234.5` -> `-$1,234.50`
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }
    let fixed = format!("{:.2}", amount.abs());
    // `{:.2}` always yields "<digits>.<2 digits>"
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Inserts a comma every three digits from the right: "1234567" -> "1,234,567"
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a price for axis labels and hover text.
/// - Large (>1000): 2 decimals ($95,123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Small (<1): 6-8 decimals ($0.00000231)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format_usd(price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.5}", price)
    } else {
        // Sub-penny / Meme coins: 8 decimals needed to see movement
        format!("${:.8}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_known_values() {
        assert_eq!(format_usd(63521.4), "$63,521.40");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(0.2345), "$0.23");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_usd(-1234.5), "-$1,234.50");
        assert_eq!(format_usd(-0.001), "$0.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn price_precision_scales_with_magnitude() {
        assert_eq!(format_price(95123.5), "$95,123.50");
        assert_eq!(format_price(12.48291), "$12.4829");
        assert_eq!(format_price(0.25), "$0.25000");
        assert_eq!(format_price(0.00000231), "$0.00000231");
    }

    fn is_usd_pattern(s: &str) -> bool {
        let Some(rest) = s.strip_prefix('$') else {
            return false;
        };
        let Some((whole, cents)) = rest.split_once('.') else {
            return false;
        };
        if cents.len() != 2 || !cents.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        let groups: Vec<&str> = whole.split(',').collect();
        let first_ok = (1..=3).contains(&groups[0].len());
        let rest_ok = groups[1..].iter().all(|g| g.len() == 3);
        first_ok && rest_ok && whole.chars().all(|c| c.is_ascii_digit() || c == ',')
    }

    proptest! {
        #[test]
        fn non_negative_prices_match_usd_pattern(price in 0.0f64..1e12) {
            let formatted = format_usd(price);
            prop_assert!(is_usd_pattern(&formatted), "bad format: {}", formatted);
        }

        #[test]
        fn grouping_does_not_change_digits(price in 0.0f64..1e12) {
            let formatted = format_usd(price);
            let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
            let expected: String = format!("{:.2}", price).chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(digits, expected);
        }
    }
}
