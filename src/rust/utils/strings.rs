/// Returns true when the string parses as a 64-bit float.
///
/// A lightweight classifier for numeric-looking input, not a full numeric
/// parser; anything `f64` accepts counts as a number.
pub fn is_number(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_and_floats() {
        assert!(is_number("42"));
        assert!(is_number("-3.5"));
        assert!(is_number("1e6"));
    }

    #[test]
    fn test_non_numbers() {
        assert!(!is_number(""));
        assert!(!is_number("abc"));
        assert!(!is_number("1.2.3"));
        assert!(!is_number("42 "));
    }
}
