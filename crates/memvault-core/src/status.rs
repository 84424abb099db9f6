//! Membership status resolution.
//!
//! A user's level is derived fresh on every call from two inputs: the sum
//! of their non-deleted investments and the optional stored level. Nothing
//! here is cached or mutated in place; the returned [`MembershipStatus`]
//! is built, serialized by the caller, and discarded.

use serde::Serialize;

use crate::catalog::{self, PlanDefinition, TIERS};
use crate::level::MembershipLevel;

/// Derived membership state for one user at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipStatus {
    /// Resolved level.
    pub level: MembershipLevel,
    /// Display name of the resolved level.
    pub level_name: &'static str,
    /// Display icon of the resolved level.
    pub icon: &'static str,
    /// Cumulative invested amount the level was resolved from.
    pub total_invested: f64,
    /// Lower bound of the resolved tier's qualifying band.
    pub current_min: f64,
    /// Upper bound of the resolved tier's qualifying band, `None` for
    /// Elite.
    pub current_max: Option<f64>,
    /// The level immediately above, `None` for Elite.
    pub next_level: Option<MembershipLevel>,
    /// Display name of the next level.
    pub next_level_name: Option<&'static str>,
    /// Raw distance to the next level's minimum. Negative once the
    /// threshold is passed; display clamping is the caller's concern.
    pub amount_to_next: Option<f64>,
    /// Progress toward the next level's minimum, clamped to 100.
    pub progress_percentage: f64,
    /// Plans visible to this level, in catalog order.
    pub available_plans: Vec<&'static PlanDefinition>,
}

/// Progress toward the tier above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierProgress {
    /// The next level up.
    pub next_level: MembershipLevel,
    /// Display name of the next level.
    pub next_level_name: &'static str,
    /// `next_level.min_amount - total_invested`, unclamped.
    pub amount_to_next: f64,
    /// `min(100, total / next_level.min_amount * 100)`, 0 when nothing is
    /// invested.
    pub progress_percentage: f64,
}

/// Returns the highest level whose minimum the amount meets.
///
/// Tiers are checked from Elite down; Basic is the floor, so amounts in
/// the 5 000–19 999 gap (and any amount below Club's minimum) resolve to
/// Basic.
#[must_use]
pub fn level_for_amount(total_invested: f64) -> MembershipLevel {
    TIERS
        .iter()
        .rev()
        .find(|t| total_invested >= t.min_amount)
        .map_or(MembershipLevel::Basic, |t| t.level)
}

/// Resolves the effective level from the invested amount and the stored
/// level.
///
/// Basic is granted at an onboarding step rather than earned by investing,
/// so a stored Basic below Club's minimum stays Basic regardless of the
/// amount. Every other stored value defers to [`level_for_amount`] — a
/// level is otherwise investment-derived, never sticky.
#[must_use]
pub fn resolve_level(
    total_invested: f64,
    stored: Option<MembershipLevel>,
) -> MembershipLevel {
    let club_min = catalog::tier(MembershipLevel::Club).min_amount;
    if stored == Some(MembershipLevel::Basic) && total_invested < club_min {
        return MembershipLevel::Basic;
    }
    level_for_amount(total_invested)
}

/// Returns the plans visible to a level, in catalog order.
///
/// Basic members also see Club's plans as upgrade options; no other level
/// is augmented.
#[must_use]
pub fn available_plans(level: MembershipLevel) -> Vec<&'static PlanDefinition> {
    let mut plans: Vec<&'static PlanDefinition> =
        catalog::tier(level).plans.iter().collect();
    if level == MembershipLevel::Basic {
        plans.extend(catalog::tier(MembershipLevel::Club).plans.iter());
    }
    plans
}

/// Computes progress toward the next tier, or `None` at the top.
#[must_use]
pub fn progress_to_next(
    level: MembershipLevel,
    total_invested: f64,
) -> Option<TierProgress> {
    let next_level = level.next()?;
    let next = catalog::tier(next_level);
    let progress_percentage = if total_invested > 0.0 {
        (total_invested / next.min_amount * 100.0).min(100.0)
    } else {
        0.0
    };
    Some(TierProgress {
        next_level,
        next_level_name: next.name,
        amount_to_next: next.min_amount - total_invested,
        progress_percentage,
    })
}

/// Resolves the full membership status for one user.
#[must_use]
pub fn resolve_membership(
    total_invested: f64,
    stored: Option<MembershipLevel>,
) -> MembershipStatus {
    let level = resolve_level(total_invested, stored);
    let tier = catalog::tier(level);
    let progress = progress_to_next(level, total_invested);

    MembershipStatus {
        level,
        level_name: tier.name,
        icon: tier.icon,
        total_invested,
        current_min: tier.min_amount,
        current_max: tier.max_amount,
        next_level: progress.map(|p| p.next_level),
        next_level_name: progress.map(|p| p.next_level_name),
        amount_to_next: progress.map(|p| p.amount_to_next),
        progress_percentage: progress.map_or(0.0, |p| p.progress_percentage),
        available_plans: available_plans(level),
    }
}
