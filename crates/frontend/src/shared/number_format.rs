//! Number formatting for stat cards and money columns

/// Insert a thousands separator into the integer part
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals as usize);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i.to_string(), Some(d.to_string())),
        None => (formatted.clone(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }
    match decimal_part {
        Some(d) => format!("{}.{}", result, d),
        None => result,
    }
}

pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_number_with_decimals(value, 2))
}

/// Large amounts are shortened: 2 500 000 -> "2.5M"
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else {
        format_number_with_decimals(value, 0)
    }
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{:.prec$}%", value, prec = decimals as usize)
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
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_money_and_compact() {
        assert_eq!(format_money(25000.0, "USD"), "USD 25,000.00");
        assert_eq!(format_compact(2_500_000.0), "2.5M");
        assert_eq!(format_compact(3_200_000_000.0), "3.2B");
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_percent(62.345, 1), "62.3%");
    }
}
