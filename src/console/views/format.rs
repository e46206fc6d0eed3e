//! Display formatting helpers shared by tables and detail pages

/// Placeholder for absent optional cells
pub const PLACEHOLDER: &str = "-";

/// Group digits in threes with commas: `1234567` becomes `1,234,567`
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Money with a currency sign and grouping, or `None` when absent
pub fn money(value: Option<i64>) -> Option<String> {
    value.map(|amount| {
        let grouped = group_digits(amount);
        match grouped.strip_prefix('-') {
            Some(magnitude) => format!("-${magnitude}"),
            None => format!("${grouped}"),
        }
    })
}

/// Money cell for a table: formatted amount or a dash
pub fn money_cell(value: Option<i64>) -> String {
    money(value).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Optional text cell: the text, or a dash when absent or blank
pub fn text_cell(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_digits_should_insert_commas() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(85000), "85,000");
        assert_eq!(group_digits(1234567), "1,234,567");
        assert_eq!(group_digits(-4500), "-4,500");
    }

    #[test]
    fn money_cell_should_fall_back_to_dash() {
        assert_eq!(money_cell(Some(120000)), "$120,000");
        assert_eq!(money_cell(Some(0)), "$0");
        assert_eq!(money_cell(None), "-");
    }

    #[test]
    fn text_cell_should_treat_blank_as_absent() {
        assert_eq!(text_cell(Some("Remote")), "Remote");
        assert_eq!(text_cell(Some("  ")), "-");
        assert_eq!(text_cell(None), "-");
    }
}
