//! # Field Validation
//!
//! Client-side shape rules for form fields. Server-side checks (foreign
//! keys, uniqueness) are out of reach here; these rules only gate whether
//! a submit is allowed to reach the network.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-\+\(\)]*$").expect("phone pattern is valid"));

/// One validation rule attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be blank
    Required(&'static str),
    /// At least this many characters
    MinLength(usize, &'static str),
    /// At most this many characters
    MaxLength(usize, &'static str),
    /// Syntactically valid email address
    Email(&'static str),
    /// Absolute http(s) URL with a host
    Url(&'static str),
    /// Digits, spaces and `-+()` only
    Phone(&'static str),
    /// Non-negative whole number that fits an `i64`
    WholeNumber {
        not_a_number: &'static str,
        negative: &'static str,
        fractional: &'static str,
        too_large: &'static str,
    },
    /// Identifier picked from a selection input
    Reference(&'static str),
    /// One of a fixed set of values
    OneOf(&'static [&'static str], &'static str),
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub initial: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, Rule::Required(_) | Rule::Reference(_)))
    }
}

/// Parse a numeric input the way a number control would.
///
/// Returns `None` for blank or non-numeric text.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a whole number, accepting `12` and `12.0` alike.
///
/// Returns `None` for fractions and for values outside the `i64` range.
pub fn parse_whole_number(value: &str) -> Option<i64> {
    if let Ok(number) = value.trim().parse::<i64>() {
        return Some(number);
    }
    let number = parse_number(value)?;
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if number.fract() != 0.0 || number < i64::MIN as f64 || number >= i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}

/// Parse an identifier from a selection input
pub fn parse_reference(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

fn is_valid_url(value: &str) -> bool {
    match url::Url::parse(value.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

fn check(rule: &Rule, value: &str) -> Option<&'static str> {
    match *rule {
        Rule::Required(message) => value.trim().is_empty().then_some(message),
        Rule::MinLength(min, message) => (value.chars().count() < min).then_some(message),
        Rule::MaxLength(max, message) => (value.chars().count() > max).then_some(message),
        Rule::Email(message) => (!EMAIL_PATTERN.is_match(value.trim())).then_some(message),
        Rule::Url(message) => (!is_valid_url(value)).then_some(message),
        Rule::Phone(message) => (!PHONE_PATTERN.is_match(value)).then_some(message),
        Rule::WholeNumber {
            not_a_number,
            negative,
            fractional,
            too_large,
        } => match parse_number(value) {
            None => Some(not_a_number),
            Some(n) if n < 0.0 => Some(negative),
            Some(n) if n.fract() != 0.0 => Some(fractional),
            Some(_) => parse_whole_number(value).is_none().then_some(too_large),
        },
        Rule::Reference(message) => parse_reference(value).is_none().then_some(message),
        Rule::OneOf(allowed, message) => (!allowed.contains(&value.trim())).then_some(message),
    }
}

/// Validate one value against a field's rules.
///
/// A blank value only fails a required rule; optional blank fields pass.
/// Otherwise the first failing rule's message wins.
pub fn validate_value(spec: &FieldSpec, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return spec.rules.iter().find_map(|rule| match rule {
            Rule::Required(message) | Rule::Reference(message) => Some(message.to_string()),
            _ => None,
        });
    }
    spec.rules
        .iter()
        .find_map(|rule| check(rule, value))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldSpec = FieldSpec {
        name: "full_name",
        label: "Full Name",
        initial: "",
        rules: &[
            Rule::Required("Full name is required"),
            Rule::MinLength(2, "Name must be at least 2 characters"),
        ],
    };

    const SALARY: FieldSpec = FieldSpec {
        name: "salary",
        label: "Salary",
        initial: "",
        rules: &[Rule::WholeNumber {
            not_a_number: "Salary must be a number",
            negative: "Salary must be positive",
            fractional: "Salary must be a whole number",
            too_large: "Salary is too large",
        }],
    };

    const WEBSITE: FieldSpec = FieldSpec {
        name: "website",
        label: "Website",
        initial: "",
        rules: &[Rule::Url("Must be a valid URL")],
    };

    #[test]
    fn blank_required_field_should_report_required_message() {
        assert_eq!(
            validate_value(&NAME, "   "),
            Some("Full name is required".to_string())
        );
    }

    #[test]
    fn first_failing_rule_should_win() {
        assert_eq!(
            validate_value(&NAME, "A"),
            Some("Name must be at least 2 characters".to_string())
        );
        assert_eq!(validate_value(&NAME, "Al"), None);
    }

    #[test]
    fn blank_optional_field_should_pass() {
        assert_eq!(validate_value(&SALARY, ""), None);
        assert_eq!(validate_value(&WEBSITE, ""), None);
    }

    #[test]
    fn whole_number_rule_should_check_sign_then_fraction() {
        assert_eq!(
            validate_value(&SALARY, "-1.5"),
            Some("Salary must be positive".to_string())
        );
        assert_eq!(
            validate_value(&SALARY, "10.5"),
            Some("Salary must be a whole number".to_string())
        );
        assert_eq!(
            validate_value(&SALARY, "lots"),
            Some("Salary must be a number".to_string())
        );
        assert_eq!(
            validate_value(&SALARY, "NaN"),
            Some("Salary must be a number".to_string())
        );
        assert_eq!(validate_value(&SALARY, "0"), None);
        assert_eq!(validate_value(&SALARY, "85000"), None);
    }

    #[test]
    fn whole_number_rule_should_reject_values_beyond_i64() {
        assert_eq!(
            validate_value(&SALARY, "1e20"),
            Some("Salary is too large".to_string())
        );
        assert_eq!(
            validate_value(&SALARY, "99999999999999999999"),
            Some("Salary is too large".to_string())
        );
        assert_eq!(validate_value(&SALARY, "9223372036854775807"), None);
        assert_eq!(parse_whole_number("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_whole_number("1e20"), None);
    }

    #[test]
    fn url_rule_should_require_http_scheme_and_host() {
        assert_eq!(validate_value(&WEBSITE, "https://example.com"), None);
        assert!(validate_value(&WEBSITE, "example.com").is_some());
        assert!(validate_value(&WEBSITE, "ftp://example.com").is_some());
        assert!(validate_value(&WEBSITE, "http://").is_some());
    }

    #[test]
    fn email_and_phone_patterns_should_match_permissively() {
        assert_eq!(check(&Rule::Email("bad"), "ada@example.com"), None);
        assert_eq!(check(&Rule::Email("bad"), "ada@example"), Some("bad"));
        assert_eq!(check(&Rule::Email("bad"), "ada example.com"), Some("bad"));
        assert_eq!(check(&Rule::Phone("bad"), "+1 (555) 010-9999"), None);
        assert_eq!(check(&Rule::Phone("bad"), "555-CALL-NOW"), Some("bad"));
    }

    #[test]
    fn max_length_should_count_characters() {
        let rule = Rule::MaxLength(3, "too long");
        assert_eq!(check(&rule, "äöü"), None);
        assert_eq!(check(&rule, "äöüß"), Some("too long"));
    }

    #[test]
    fn whole_numbers_should_parse_integral_floats() {
        assert_eq!(parse_whole_number("12"), Some(12));
        assert_eq!(parse_whole_number(" 12.0 "), Some(12));
        assert_eq!(parse_whole_number("12.5"), None);
        assert_eq!(parse_whole_number(""), None);
        assert_eq!(parse_reference("3"), Some(3));
        assert_eq!(parse_reference("three"), None);
    }

    #[test]
    fn required_detection_should_cover_references() {
        let company = FieldSpec {
            name: "company_id",
            label: "Company",
            initial: "",
            rules: &[Rule::Reference("Company is required")],
        };
        assert!(company.is_required());
        assert!(NAME.is_required());
        assert!(!SALARY.is_required());
    }
}
