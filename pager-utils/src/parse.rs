/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|page| *page >= 1)
}

/// Parse a positive size argument (page size, window size).
pub fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|size| *size > 0)
}

/// Parse a non-negative count argument (total item count).
pub fn parse_count(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok()
}

/// Parse a loose numeric value, keeping signs and fractions for later coercion.
///
/// Blank or unparseable text yields `None`, which callers treat as "absent".
pub fn parse_number(raw: &str) -> Option<f64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Parse a comma or whitespace separated list of numbers, skipping junk entries.
pub fn parse_number_list(raw: &str) -> Vec<f64> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(parse_number)
        .collect()
}

/// Parse a boolean switch like `true`, `1`, `yes` or `on`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("3"), Some(3))]
    #[case(Some(" 12 "), Some(12))]
    #[case(Some("0"), None)]
    #[case(Some("-2"), None)]
    #[case(Some("two"), None)]
    #[case(None, None)]
    fn one_based_pages(#[case] raw: Option<&str>, #[case] expected: Option<usize>) {
        assert_eq!(parse_one_based_page(raw), expected);
    }

    #[test]
    fn counts_accept_zero_but_sizes_do_not() {
        assert_eq!(parse_count(Some("0")), Some(0));
        assert_eq!(parse_positive(Some("0")), None);
        assert_eq!(parse_positive(Some("25")), Some(25));
    }

    #[test]
    fn number_lists_skip_junk() {
        assert_eq!(parse_number_list("10, 25,,abc 50 -5"), vec![10.0, 25.0, 50.0, -5.0]);
        assert!(parse_number_list("").is_empty());
    }

    #[test]
    fn numbers_keep_sign_and_fraction() {
        assert_eq!(parse_number(" -2.5 "), Some(-2.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("lots"), None);
    }

    #[rstest]
    #[case("TRUE", Some(true))]
    #[case("on", Some(true))]
    #[case("0", Some(false))]
    #[case("maybe", None)]
    fn flags(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_flag(raw), expected);
    }
}
