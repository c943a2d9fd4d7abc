//! Yen amount formatting.
//!
//! Amounts are whole yen stored as `u64`. The display form is `¥` followed
//! by the integer with a comma every three digits, e.g. `¥7,500`.

/// Currency prefix used in every displayed amount.
pub const YEN_SIGN: char = '¥';

/// Group an integer's digits in threes with commas.
///
/// ```
/// use quote_domain::core::yen::group_thousands;
///
/// assert_eq!(group_thousands(0), "0");
/// assert_eq!(group_thousands(1500), "1,500");
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// ```
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an amount as `¥` + grouped thousands.
///
/// ```
/// use quote_domain::format_yen;
///
/// assert_eq!(format_yen(5000), "¥5,000");
/// ```
pub fn format_yen(amount: u64) -> String {
    format!("{}{}", YEN_SIGN, group_thousands(amount))
}

/// Parse a string produced by [`format_yen`] back into an amount.
///
/// Accepts only the exact grouped form: a leading `¥`, digits, and commas
/// at every third position from the right.
pub fn parse_yen(s: &str) -> Option<u64> {
    let digits = s.trim().strip_prefix(YEN_SIGN)?;
    let amount: u64 = digits.replace(',', "").parse().ok()?;
    (group_thousands(amount) == digits).then_some(amount)
}
