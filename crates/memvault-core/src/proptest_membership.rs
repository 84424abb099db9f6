//! Property-based tests for tier resolution and validation.
//!
//! These verify the invariants that unit scenarios cannot sweep: progress
//! bounds and monotonicity, the Elite ceiling, the Basic floor, and the
//! totality of the verdict function over hostile input.

use proptest::prelude::*;

use crate::level::MembershipLevel;
use crate::status::{level_for_amount, progress_to_next, resolve_level, resolve_membership};
use crate::validation::{validate_investment, InvestmentRequest, RejectReason};

/// Strategy for realistic dollar amounts.
fn amount() -> impl Strategy<Value = f64> {
    0.0..2_000_000.0f64
}

/// Strategy for an optional stored level.
fn stored_level() -> impl Strategy<Value = Option<MembershipLevel>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(MembershipLevel::ALL.to_vec()).prop_map(Some),
    ]
}

fn request(amount: f64, rate: f64, term_months: u32) -> InvestmentRequest {
    InvestmentRequest {
        name: String::from("prop"),
        amount,
        rate,
        term_months,
    }
}

proptest! {
    /// Property: every amount at or above Elite's minimum resolves Elite.
    #[test]
    fn prop_elite_is_the_ceiling(extra in 0.0..10_000_000.0f64, stored in stored_level()) {
        let total = 250_000.0 + extra;
        prop_assert_eq!(level_for_amount(total), MembershipLevel::Elite);
        prop_assert_eq!(resolve_level(total, stored), MembershipLevel::Elite);
    }

    /// Property: every amount below Club's minimum resolves Basic,
    /// whatever level is stored — the gap included.
    #[test]
    fn prop_basic_is_the_floor(total in 0.0..20_000.0f64, stored in stored_level()) {
        prop_assert_eq!(resolve_level(total, stored), MembershipLevel::Basic);
    }

    /// Property: progress stays within [0, 100].
    #[test]
    fn prop_progress_is_bounded(total in amount(), stored in stored_level()) {
        let status = resolve_membership(total, stored);
        prop_assert!(status.progress_percentage >= 0.0);
        prop_assert!(status.progress_percentage <= 100.0);
    }

    /// Property: while the resolved level is unchanged, progress toward
    /// the next tier is non-decreasing in the invested amount. (Across a
    /// level transition the ratio rebases to the next threshold, so
    /// monotonicity holds per tier band.)
    #[test]
    fn prop_progress_monotone_within_a_band(
        low in amount(),
        delta in 0.0..50_000.0f64,
        stored in stored_level(),
    ) {
        let high = low + delta;
        let a = resolve_membership(low, stored);
        let b = resolve_membership(high, stored);
        if a.level == b.level {
            prop_assert!(b.progress_percentage >= a.progress_percentage);
        }
    }

    /// Property: the resolved level never decreases as the amount grows.
    #[test]
    fn prop_level_monotone_in_amount(
        low in amount(),
        delta in 0.0..1_000_000.0f64,
        stored in stored_level(),
    ) {
        prop_assert!(resolve_level(low + delta, stored) >= resolve_level(low, stored));
    }

    /// Property: the verdict function is total and never accepts a
    /// non-finite or non-positive amount.
    #[test]
    fn prop_never_accepts_unrepresentable_amounts(
        amount in prop_oneof![
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            -1_000_000.0..=0.0f64,
        ],
        rate in 0.0..25.0f64,
        term_months in 0u32..240,
        stored in stored_level(),
    ) {
        let verdict = validate_investment(stored, &request(amount, rate, term_months));
        prop_assert_eq!(
            verdict.reject_reason(),
            Some(RejectReason::UnrepresentableAmount)
        );
    }

    /// Property: any finite positive input yields a defined verdict
    /// without panicking, including absurd terms.
    #[test]
    fn prop_verdict_is_total(
        amount in 0.01..10_000_000.0f64,
        rate in 0.0..100.0f64,
        term_months in 0u32..=u32::MAX,
        stored in stored_level(),
    ) {
        let verdict = validate_investment(stored, &request(amount, rate, term_months));
        // Accepted verdicts always carry a level and a rate.
        if verdict.is_accepted() {
            prop_assert!(verdict.assigned_level().is_some());
            prop_assert!(verdict.effective_rate().is_some());
        } else {
            prop_assert!(verdict.reject_reason().is_some());
        }
    }

    /// Property: an upgrade verdict only ever targets Club, and only for
    /// amounts at or past Club's minimum.
    #[test]
    fn prop_upgrades_target_club(
        amount in 0.01..2_000_000.0f64,
        rate in 0.0..25.0f64,
        term_months in 0u32..240,
        stored in stored_level(),
    ) {
        let verdict = validate_investment(stored, &request(amount, rate, term_months));
        if let crate::validation::Verdict::AcceptWithUpgrade { to, effective_rate } = verdict {
            prop_assert_eq!(to, MembershipLevel::Club);
            prop_assert_eq!(effective_rate, 6.0);
            prop_assert!(amount >= 20_000.0);
            // Only Basic or never-granted accounts upgrade.
            prop_assert!(matches!(stored, None | Some(MembershipLevel::Basic)));
        }
    }
}
