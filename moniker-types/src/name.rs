/// Normalize a user-entered wallet name.
///
/// Surrounding whitespace is trimmed. A name that is empty after trimming
/// returns `None`, meaning the stored name should be cleared. Any other text
/// is kept as entered.
pub fn normalize_wallet_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            normalize_wallet_name("  Savings  "),
            Some("Savings".to_string())
        );
    }

    #[test]
    fn test_blank_name_clears() {
        assert_eq!(normalize_wallet_name(""), None);
        assert_eq!(normalize_wallet_name(" \t "), None);
    }

    #[test]
    fn test_long_and_unusual_names_are_kept() {
        let long = "a".repeat(65);
        assert_eq!(normalize_wallet_name(&long), Some(long.clone()));
        assert_eq!(
            normalize_wallet_name("hot\u{7}wallet"),
            Some("hot\u{7}wallet".to_string())
        );
    }
}
