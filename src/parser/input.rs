//! Parsing of the user's comma-separated array and target fields
//!
//! Numbers are read the way a lenient integer parse would: leading whitespace
//! is skipped, an optional sign is accepted, and then the longest run of ASCII
//! digits is taken. Anything after the digits is ignored (`"12abc"` is `12`,
//! `"3.7"` is `3`). A token without digits has no value and is dropped, so
//! malformed input never reaches a simulator.

/// Parse the longest leading integer of `token`
pub fn parse_leading_int(token: &str) -> Option<i64> {
    let chars: Vec<char> = token.trim_start().chars().collect();
    let mut i = 0;
    let mut negative = false;

    if let Some(&c) = chars.first() {
        if c == '-' || c == '+' {
            negative = c == '-';
            i += 1;
        }
    }

    let start = i;
    let mut value: i64 = 0;
    while i < chars.len() {
        let Some(digit) = chars[i].to_digit(10) else {
            break;
        };
        // Saturate instead of wrapping on absurdly long inputs
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit));
        i += 1;
    }

    if i == start {
        return None;
    }

    Some(if negative { -value } else { value })
}

/// Parse a comma-separated list, silently discarding tokens that hold no number
pub fn parse_array(text: &str) -> Vec<i64> {
    text.split(',').filter_map(parse_leading_int).collect()
}

/// Parse the single search target
pub fn parse_target(text: &str) -> Option<i64> {
    parse_leading_int(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_default_sorting_input() {
        assert_eq!(
            parse_array("64, 34, 25, 12, 22, 11, 90"),
            vec![64, 34, 25, 12, 22, 11, 90]
        );
    }

    #[test]
    fn test_malformed_tokens_are_dropped() {
        assert_eq!(parse_array("5, abc, , 7,,x9, -3"), vec![5, 7, -3]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_array(""), Vec::<i64>::new());
        assert_eq!(parse_array(" , ,"), Vec::<i64>::new());
    }

    #[test_case("42", Some(42) ; "plain")]
    #[test_case("  -7 ", Some(-7) ; "negative with padding")]
    #[test_case("+8", Some(8) ; "explicit plus")]
    #[test_case("12abc", Some(12) ; "trailing garbage")]
    #[test_case("3.7", Some(3) ; "fraction truncated")]
    #[test_case("-", None ; "lone sign")]
    #[test_case("abc", None ; "no digits")]
    #[test_case("", None ; "empty")]
    fn test_parse_target(text: &str, expected: Option<i64>) {
        assert_eq!(parse_target(text), expected);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }
}
