//! The membership tier and investment plan catalog.
//!
//! This is the system's reference data: five tiers, each owning one or two
//! fixed-rate plans. The table is a `static` constructed at compile time,
//! shared by every caller, with no mutation API. Amounts are dollars as
//! `f64`, matching the wire representation used by the surrounding
//! platform.
//!
//! Two boundary facts in this table are deliberate and load-bearing:
//!
//! - Basic's upper bound (4 999) and Club's lower bound (20 000) leave a
//!   gap. Amounts in 5 000–19 999 belong to no tier band; resolution
//!   floors them at Basic (see [`crate::status::level_for_amount`]).
//! - Elite has no upper bound (`max_amount` is `None`) but still caps a
//!   single transaction via `max_per_investment`.

use serde::Serialize;

use crate::error::MembershipError;
use crate::level::MembershipLevel;

/// A fixed (rate, term) investment offer owned by one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanDefinition {
    /// Stable identifier, `<level>_<term_days>`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display description.
    pub description: &'static str,
    /// Owning membership level.
    #[serde(rename = "membership_level")]
    pub level: MembershipLevel,
    /// Annual percentage yield.
    pub rate: f64,
    /// Lock-in duration in days.
    pub term_days: u32,
    /// Minimum investment amount for this plan.
    pub min_amount: f64,
    /// Maximum investment amount per transaction for this plan.
    pub max_amount: f64,
    /// Catalog flag, carried for the persistence-seeding export.
    pub is_active: bool,
}

/// One membership tier: qualifying band, transaction ceiling, display
/// metadata, and owned plans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierDefinition {
    /// The level this tier defines.
    pub level: MembershipLevel,
    /// Display name.
    pub name: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Display benefits line.
    pub benefits: &'static str,
    /// Inclusive lower bound of cumulative investment qualifying for this
    /// tier.
    pub min_amount: f64,
    /// Inclusive upper bound, `None` for the unbounded top tier.
    pub max_amount: Option<f64>,
    /// Ceiling on a single investment transaction.
    pub max_per_investment: f64,
    /// Owned plans in declaration order (shorter term first).
    pub plans: &'static [PlanDefinition],
}

/// The five tiers in ascending order of `min_amount`.
///
/// Indexable by [`MembershipLevel::rank`]; [`tier`] is the checked way in.
pub static TIERS: [TierDefinition; 5] = [
    TierDefinition {
        level: MembershipLevel::Basic,
        name: "Basic Member",
        icon: "\u{1f331}",
        benefits: "Start your investment journey with low minimums",
        min_amount: 0.0,
        max_amount: Some(4_999.0),
        max_per_investment: 5_000.0,
        plans: &[PlanDefinition {
            id: "basic_365",
            name: "\u{1f331} Basic Member - 1 Year",
            description: "3% APY locked for 1 year",
            level: MembershipLevel::Basic,
            rate: 3.0,
            term_days: 365,
            min_amount: 100.0,
            max_amount: 5_000.0,
            is_active: true,
        }],
    },
    TierDefinition {
        level: MembershipLevel::Club,
        name: "Club Member",
        icon: "\u{1f949}",
        benefits: "Entry-level membership with solid returns",
        min_amount: 20_000.0,
        max_amount: Some(49_999.0),
        max_per_investment: 50_000.0,
        plans: &[PlanDefinition {
            id: "club_365",
            name: "\u{1f949} Club Member - 1 Year",
            description: "6% APY locked for 1 year",
            level: MembershipLevel::Club,
            rate: 6.0,
            term_days: 365,
            min_amount: 20_000.0,
            max_amount: 50_000.0,
            is_active: true,
        }],
    },
    TierDefinition {
        level: MembershipLevel::Premium,
        name: "Premium Member",
        icon: "\u{1f948}",
        benefits: "Enhanced returns with flexible lock periods",
        min_amount: 50_000.0,
        max_amount: Some(99_999.0),
        max_per_investment: 100_000.0,
        plans: &[
            PlanDefinition {
                id: "premium_180",
                name: "\u{1f948} Premium Member - 6 Months",
                description: "8% APY locked for 6 months",
                level: MembershipLevel::Premium,
                rate: 8.0,
                term_days: 180,
                min_amount: 50_000.0,
                max_amount: 100_000.0,
                is_active: true,
            },
            PlanDefinition {
                id: "premium_365",
                name: "\u{1f948} Premium Member - 1 Year",
                description: "10% APY locked for 1 year",
                level: MembershipLevel::Premium,
                rate: 10.0,
                term_days: 365,
                min_amount: 50_000.0,
                max_amount: 100_000.0,
                is_active: true,
            },
        ],
    },
    TierDefinition {
        level: MembershipLevel::Vip,
        name: "VIP Member",
        icon: "\u{1f947}",
        benefits: "Premium rates with exclusive VIP treatment",
        min_amount: 100_000.0,
        max_amount: Some(249_999.0),
        max_per_investment: 250_000.0,
        plans: &[
            PlanDefinition {
                id: "vip_180",
                name: "\u{1f947} VIP Member - 6 Months",
                description: "12% APY locked for 6 months",
                level: MembershipLevel::Vip,
                rate: 12.0,
                term_days: 180,
                min_amount: 100_000.0,
                max_amount: 250_000.0,
                is_active: true,
            },
            PlanDefinition {
                id: "vip_365",
                name: "\u{1f947} VIP Member - 1 Year",
                description: "14% APY locked for 1 year",
                level: MembershipLevel::Vip,
                rate: 14.0,
                term_days: 365,
                min_amount: 100_000.0,
                max_amount: 250_000.0,
                is_active: true,
            },
        ],
    },
    TierDefinition {
        level: MembershipLevel::Elite,
        name: "Elite Member",
        icon: "\u{1f48e}",
        benefits: "Highest rates with unlimited investment capacity",
        min_amount: 250_000.0,
        max_amount: None,
        max_per_investment: 250_000.0,
        plans: &[
            PlanDefinition {
                id: "elite_180",
                name: "\u{1f48e} Elite Member - 6 Months",
                description: "16% APY locked for 6 months",
                level: MembershipLevel::Elite,
                rate: 16.0,
                term_days: 180,
                min_amount: 250_000.0,
                max_amount: 250_000.0,
                is_active: true,
            },
            PlanDefinition {
                id: "elite_365",
                name: "\u{1f48e} Elite Member - 1 Year",
                description: "20% APY locked for 1 year",
                level: MembershipLevel::Elite,
                rate: 20.0,
                term_days: 365,
                min_amount: 250_000.0,
                max_amount: 250_000.0,
                is_active: true,
            },
        ],
    },
];

/// Returns the tier definition for a level.
#[must_use]
pub fn tier(level: MembershipLevel) -> &'static TierDefinition {
    &TIERS[level.rank()]
}

/// Looks up a plan by its stable identifier.
///
/// # Errors
///
/// Returns [`MembershipError::UnknownPlan`] if no plan carries the id.
pub fn plan(id: &str) -> Result<&'static PlanDefinition, MembershipError> {
    TIERS
        .iter()
        .flat_map(|t| t.plans)
        .find(|p| p.id == id)
        .ok_or_else(|| MembershipError::unknown_plan(id))
}

/// Returns the plans the persistence layer seeds into its plan collection:
/// Club through Elite, in tier order.
///
/// Basic's plan is excluded — Basic membership is granted at onboarding,
/// not sold from the seeded plan collection.
pub fn seed_plans() -> impl Iterator<Item = &'static PlanDefinition> {
    TIERS[MembershipLevel::Club.rank()..]
        .iter()
        .flat_map(|t| t.plans.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_indexable_by_rank() {
        for level in MembershipLevel::ALL {
            assert_eq!(tier(level).level, level);
        }
    }

    #[test]
    fn test_minimums_strictly_ascend() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].min_amount < pair[1].min_amount);
        }
    }

    #[test]
    fn test_bands_are_contiguous_except_the_basic_club_gap() {
        // Club through Elite partition the amount space: each upper bound
        // is one dollar below the next lower bound. Basic's band ends at
        // 4 999 with Club starting at 20 000 — the deliberate gap.
        for pair in TIERS[1..].windows(2) {
            let upper = pair[0].max_amount.expect("only Elite is unbounded");
            assert_eq!(upper + 1.0, pair[1].min_amount);
        }
        assert_eq!(tier(MembershipLevel::Basic).max_amount, Some(4_999.0));
        assert_eq!(tier(MembershipLevel::Club).min_amount, 20_000.0);
    }

    #[test]
    fn test_only_elite_is_unbounded() {
        for t in &TIERS {
            assert_eq!(t.max_amount.is_none(), t.level == MembershipLevel::Elite);
        }
    }

    #[test]
    fn test_plan_ids_are_unique() {
        let mut ids: Vec<&str> = TIERS.iter().flat_map(|t| t.plans).map(|p| p.id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_plans_belong_to_their_tier() {
        for t in &TIERS {
            for p in t.plans {
                assert_eq!(p.level, t.level);
                assert!(p.id.starts_with(t.level.as_str()));
                assert!(p.max_amount <= t.max_per_investment);
                assert!(p.rate >= 0.0);
            }
        }
    }

    #[test]
    fn test_plans_declare_shorter_terms_first() {
        for t in &TIERS {
            for pair in t.plans.windows(2) {
                assert!(pair[0].term_days < pair[1].term_days);
            }
        }
    }

    #[test]
    fn test_terms_are_the_two_offered_durations() {
        for t in &TIERS {
            for p in t.plans {
                assert!(p.term_days == 180 || p.term_days == 365);
            }
        }
    }

    #[test]
    fn test_plan_lookup_by_id() {
        let p = plan("premium_180").unwrap();
        assert_eq!(p.rate, 8.0);
        assert_eq!(p.term_days, 180);

        let err = plan("premium_90").unwrap_err();
        assert_eq!(err, MembershipError::unknown_plan("premium_90"));
    }

    #[test]
    fn test_seed_plans_cover_club_through_elite() {
        let seeded: Vec<&str> = seed_plans().map(|p| p.id).collect();
        assert_eq!(
            seeded,
            [
                "club_365",
                "premium_180",
                "premium_365",
                "vip_180",
                "vip_365",
                "elite_180",
                "elite_365",
            ]
        );
    }

    #[test]
    fn test_plan_serializes_with_wire_field_names() {
        let json = serde_json::to_value(plan("club_365").unwrap()).unwrap();
        assert_eq!(json["membership_level"], "club");
        assert_eq!(json["rate"], 6.0);
        assert_eq!(json["term_days"], 365);
    }
}
