//! Error types for membership operations.
//!
//! The core keeps two channels apart: business outcomes (accept, upgrade,
//! reject) are ordinary values of [`crate::validation::Verdict`], while this
//! module covers genuinely exceptional inputs — strings or identifiers that
//! do not name anything in the reference data. Unknown values fail closed;
//! nothing is defaulted.

use thiserror::Error;

/// Errors that can occur when interpreting stored membership data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    /// A stored membership level string names no known level.
    #[error("unknown membership level: {value:?}")]
    UnknownLevel {
        /// The string that failed to parse.
        value: String,
    },

    /// A plan identifier names no plan in the catalog.
    #[error("unknown investment plan: {id:?}")]
    UnknownPlan {
        /// The identifier that was looked up.
        id: String,
    },
}

impl MembershipError {
    /// Creates a new unknown level error.
    #[must_use]
    pub fn unknown_level(value: impl Into<String>) -> Self {
        Self::UnknownLevel {
            value: value.into(),
        }
    }

    /// Creates a new unknown plan error.
    #[must_use]
    pub fn unknown_plan(id: impl Into<String>) -> Self {
        Self::UnknownPlan { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_message_names_the_value() {
        let err = MembershipError::unknown_level("platinum");
        assert!(err.to_string().contains("platinum"));
    }

    #[test]
    fn test_unknown_plan_message_names_the_id() {
        let err = MembershipError::unknown_plan("club_90");
        assert!(err.to_string().contains("club_90"));
    }
}
