//! Validation of the icon's face symbol

use unicode_general_category::{get_general_category, GeneralCategory};

/// Symbol shown on a fresh install
pub const DEFAULT_SYMBOL: &str = "💎";

/// Check that `candidate` is exactly one symbol-class character.
///
/// Accepted categories: So (other symbol), Sk (modifier symbol) and Cs
/// (surrogate). Emoji written with a variation selector are two scalar
/// values and are rejected.
pub fn is_symbol(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => matches!(
            get_general_category(c),
            GeneralCategory::OtherSymbol
                | GeneralCategory::ModifierSymbol
                | GeneralCategory::Surrogate
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_emoji_accepted() {
        assert!(is_symbol("💎"));
        assert!(is_symbol("😀"));
        assert!(is_symbol("★"));
    }

    #[test]
    fn test_modifier_symbol_accepted() {
        assert!(is_symbol("^"));
        assert!(is_symbol("`"));
    }

    #[test]
    fn test_rejections() {
        assert!(!is_symbol(""));
        assert!(!is_symbol("A"));
        assert!(!is_symbol("中"));
        assert!(!is_symbol("💎💎"));
        assert!(!is_symbol("❤️"));
        assert!(!is_symbol(" "));
    }

    #[test]
    fn test_default_symbol_is_valid() {
        assert!(is_symbol(DEFAULT_SYMBOL));
    }
}
