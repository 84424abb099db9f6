//! Membership levels.
//!
//! The five levels form a total order by cumulative invested amount. The
//! wire and storage form is the lowercase name; storage may additionally
//! hold `"none"` for accounts that predate onboarding-granted Basic, which
//! parses to an *absent* level rather than a variant of its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MembershipError;

/// A membership level, ordered from lowest to highest qualifying amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MembershipLevel {
    /// Granted at onboarding; retained regardless of invested amount.
    Basic,
    /// First investment-earned level.
    Club,
    /// Mid level with a 180-day plan option.
    Premium,
    /// High level.
    Vip,
    /// Top level; no upper bound on cumulative investment.
    Elite,
}

impl MembershipLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Basic,
        Self::Club,
        Self::Premium,
        Self::Vip,
        Self::Elite,
    ];

    /// Returns the lowercase storage/wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Club => "club",
            Self::Premium => "premium",
            Self::Vip => "vip",
            Self::Elite => "elite",
        }
    }

    /// Returns the next level up, or `None` for [`Self::Elite`].
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Basic => Some(Self::Club),
            Self::Club => Some(Self::Premium),
            Self::Premium => Some(Self::Vip),
            Self::Vip => Some(Self::Elite),
            Self::Elite => None,
        }
    }

    /// Position in [`Self::ALL`]; doubles as the tier table index.
    #[must_use]
    pub const fn rank(&self) -> usize {
        *self as usize
    }

    /// Parses a stored level column, where `"none"` means no level was ever
    /// granted.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::UnknownLevel`] for any other unrecognized
    /// string; unknown values are never defaulted.
    pub fn parse_stored(value: &str) -> Result<Option<Self>, MembershipError> {
        if value == "none" {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for MembershipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MembershipLevel {
    type Err = MembershipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "club" => Ok(Self::Club),
            "premium" => Ok(Self::Premium),
            "vip" => Ok(Self::Vip),
            "elite" => Ok(Self::Elite),
            other => Err(MembershipError::unknown_level(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ascending() {
        for pair in MembershipLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_rank_matches_position_in_all() {
        for (index, level) in MembershipLevel::ALL.iter().enumerate() {
            assert_eq!(level.rank(), index);
        }
    }

    #[test]
    fn test_next_walks_the_ladder() {
        assert_eq!(MembershipLevel::Basic.next(), Some(MembershipLevel::Club));
        assert_eq!(MembershipLevel::Club.next(), Some(MembershipLevel::Premium));
        assert_eq!(MembershipLevel::Premium.next(), Some(MembershipLevel::Vip));
        assert_eq!(MembershipLevel::Vip.next(), Some(MembershipLevel::Elite));
        assert_eq!(MembershipLevel::Elite.next(), None);
    }

    #[test]
    fn test_round_trip_through_storage_name() {
        for level in MembershipLevel::ALL {
            assert_eq!(level.as_str().parse::<MembershipLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_parse_stored_none_is_absent() {
        assert_eq!(MembershipLevel::parse_stored("none"), Ok(None));
        assert_eq!(
            MembershipLevel::parse_stored("vip"),
            Ok(Some(MembershipLevel::Vip))
        );
    }

    #[test]
    fn test_parse_stored_rejects_unknown_values() {
        let err = MembershipLevel::parse_stored("gold").unwrap_err();
        assert_eq!(err, MembershipError::unknown_level("gold"));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MembershipLevel::Vip).unwrap();
        assert_eq!(json, "\"vip\"");
        let parsed: MembershipLevel = serde_json::from_str("\"elite\"").unwrap();
        assert_eq!(parsed, MembershipLevel::Elite);
    }
}
