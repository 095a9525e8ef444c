pub mod date;

/// Treats missing and blank form values the same way
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Reads the run of digits at the start of `value`, like `parseInt` would.
/// A run too long for a `u64` saturates
pub fn leading_number(value: &str) -> Option<u64> {
    let value = value.trim_start();
    let value = value.strip_prefix('+').unwrap_or(value);
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let digits = &value[..end];
    if digits.is_empty() {
        return None;
    }

    Some(digits.parse().unwrap_or(u64::MAX))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some("  ".to_owned())), None);
        assert_eq!(non_empty(&Some("x".to_owned())), Some("x"));
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("12"), Some(12));
        assert_eq!(leading_number(" 2abc"), Some(2));
        assert_eq!(leading_number("1.5"), Some(1));
        assert_eq!(leading_number("+7"), Some(7));
        assert_eq!(leading_number("99999999999999999999999"), Some(u64::MAX));
        assert_eq!(leading_number("-1"), None);
        assert_eq!(leading_number("abc"), None);
    }
}
