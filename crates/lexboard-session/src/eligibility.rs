//! Contribution eligibility

/// Experience threshold for contributing cases, exclusive: an account needs
/// more than this many years.
pub const MIN_SUBMITTER_YEARS: u32 = 5;

/// An account's standing for contributing new precedents.
///
/// Both conditions must hold: strictly more than [`MIN_SUBMITTER_YEARS`]
/// years of experience, and administrative approval. Exactly five years is
/// not enough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitterEligibility {
    /// Declared years of professional experience
    pub years_of_experience: u32,
    /// Whether an administrator has approved the account
    pub approved: bool,
}

impl SubmitterEligibility {
    /// Whether the add-case surface is available to this account
    pub fn can_add_cases(&self) -> bool {
        self.years_of_experience > MIN_SUBMITTER_YEARS && self.approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experienced_and_approved_is_eligible() {
        let e = SubmitterEligibility {
            years_of_experience: 6,
            approved: true,
        };
        assert!(e.can_add_cases());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let e = SubmitterEligibility {
            years_of_experience: 5,
            approved: true,
        };
        assert!(!e.can_add_cases());
    }

    #[test]
    fn test_unapproved_is_never_eligible() {
        let e = SubmitterEligibility {
            years_of_experience: 20,
            approved: false,
        };
        assert!(!e.can_add_cases());
    }
}
