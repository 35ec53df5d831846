//! Number formatting for table cells and summary figures

/// Formats with a comma thousands separator and the given number of decimals.
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Whole number with separators; `-` when missing
pub fn format_count(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format_number_with_decimals(v, 0))
}

/// CHF amount without decimals, as shown on appeal tables
pub fn format_amount(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("CHF {}", format_number_with_decimals(v, 0)))
}

/// Compact form for summary cards: 1.2K, 3.4M, 5.6B
pub fn format_short(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "K")
    } else {
        return format_number_with_decimals(value, 0);
    };
    format!("{:.1}{}", scaled, suffix)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1,234,567");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(format_count(None), "-");
        assert_eq!(format_amount(None), "-");
        assert_eq!(format_amount(Some(2500000.0)), "CHF 2,500,000");
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format_short(950.0), "950");
        assert_eq!(format_short(1240.0), "1.2K");
        assert_eq!(format_short(3_400_000.0), "3.4M");
        assert_eq!(format_short(5_600_000_000.0), "5.6B");
        assert_eq!(format_percent(12.4), "12%");
    }
}
