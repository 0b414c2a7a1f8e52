//! Password strength meter.

use pagedom::{Element, find_element_mut};

/// Score a password from 0 to 6: one point each for reaching 8 and 12
/// characters, and one for each of lowercase, uppercase, digit and symbol.
///
/// Length is measured in UTF-16 code units, as browsers report it.
pub fn check_password_strength(password: &str) -> u8 {
    let len = password.encode_utf16().count();
    let checks = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|&&passed| passed).count() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Weak => "text-danger",
            Self::Medium => "text-warning",
            Self::Strong => "text-success",
        }
    }
}

/// Show the strength for `score` on the indicator element, replacing its
/// text and its whole class list. Returns false if the indicator is absent.
pub fn update_password_strength_indicator(
    root: &mut Element,
    indicator_id: &str,
    score: u8,
) -> bool {
    let Some(indicator) = find_element_mut(root, indicator_id) else {
        return false;
    };
    let strength = Strength::from_score(score);
    indicator.set_text(strength.label());
    indicator.classes.set(strength.class_name());
    true
}
