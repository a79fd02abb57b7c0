//! Wizard steps

use std::fmt;

/// The four fixed wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Contact = 1,
    Organization = 2,
    Planning = 3,
    Consent = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Contact,
        Step::Organization,
        Step::Planning,
        Step::Consent,
    ];

    /// 1-based step number
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Following step, capped at the last one
    pub fn next(self) -> Self {
        match self {
            Self::Contact => Self::Organization,
            Self::Organization => Self::Planning,
            Self::Planning | Self::Consent => Self::Consent,
        }
    }

    /// Preceding step, floored at the first one
    pub fn prev(self) -> Self {
        match self {
            Self::Contact | Self::Organization => Self::Contact,
            Self::Planning => Self::Organization,
            Self::Consent => Self::Planning,
        }
    }

    pub fn is_final(self) -> bool {
        self == Self::Consent
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Organization => "Organization",
            Self::Planning => "Planning",
            Self::Consent => "Consent",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        let numbers: Vec<_> = Step::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_next_is_capped() {
        assert_eq!(Step::Planning.next(), Step::Consent);
        assert_eq!(Step::Consent.next(), Step::Consent);
    }

    #[test]
    fn test_prev_is_floored() {
        assert_eq!(Step::Organization.prev(), Step::Contact);
        assert_eq!(Step::Contact.prev(), Step::Contact);
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::Organization.to_string(), "2 Organization");
    }
}
