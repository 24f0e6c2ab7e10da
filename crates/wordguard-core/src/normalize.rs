/// Normalize a cell or text value for comparison.
///
/// Trims surrounding whitespace and case-folds. `None` (a missing field)
/// normalizes to the empty string. Applying it twice gives the same result
/// as applying it once.
pub fn normalize(value: Option<&str>) -> String {
    match value {
        Some(s) => fold_case(s.trim()),
        None => String::new(),
    }
}

/// Unicode case folding without trimming.
///
/// `str::to_lowercase` covers almost everything; the remaining characters
/// are those whose full case fold differs from their lowercase form. Final
/// sigma is folded to the plain sigma so that a text folded in pieces
/// matches the same text folded in one go.
pub fn fold_case(s: &str) -> String {
    let lower = s.to_lowercase();
    if !lower.chars().any(needs_fold) {
        return lower;
    }

    let mut folded = String::with_capacity(lower.len() + 2);
    for c in lower.chars() {
        match c {
            'ß' => folded.push_str("ss"),
            'ς' => folded.push('σ'),
            'ſ' => folded.push('s'),
            _ => folded.push(c),
        }
    }
    folded
}

fn needs_fold(c: char) -> bool {
    matches!(c, 'ß' | 'ς' | 'ſ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_empty() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize(Some("  Quantori LLC \t")), "quantori llc");
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(normalize(Some("ÅSA ÖBERG")), "åsa öberg");
        assert_eq!(normalize(Some("STRASSE")), normalize(Some("Straße")));
        assert_eq!(normalize(Some("ΟΔΟΣ")), normalize(Some("οδος")));
    }

    #[test]
    fn test_idempotent() {
        for raw in ["  Quantori ", "Straße", "ẞ", "İstanbul", "ΣΑΣ", "ǅ", ""] {
            let once = normalize(Some(raw));
            assert_eq!(normalize(Some(&once)), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_fold_case_keeps_whitespace() {
        assert_eq!(fold_case(" AB "), " ab ");
    }
}
