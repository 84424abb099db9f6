//! Investment validation against the tier/plan rules.
//!
//! [`validate_investment`] is the decision table for a proposed
//! investment. Business outcomes are values of the closed [`Verdict`] sum
//! type — rejection is not an error, and callers must handle all three
//! cases. The function is total: every input, including hostile floats,
//! yields a defined verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::level::MembershipLevel;
use crate::status::available_plans;

/// Months-to-days conversion used by plan matching. Terms are quoted in
/// months and locked in 30-day blocks, so a 6-month request matches a
/// 180-day plan.
pub const DAYS_PER_MONTH: u32 = 30;

/// A proposed investment as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvestmentRequest {
    /// Client-chosen label for the investment.
    pub name: String,
    /// Proposed amount in dollars.
    pub amount: f64,
    /// Requested APY percentage.
    pub rate: f64,
    /// Requested lock-in term in months.
    pub term_months: u32,
}

/// Why a proposed investment was rejected.
///
/// The `Display` form is the user-facing reason string the HTTP layer
/// returns with a 400-class response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Below the Basic member minimum of $100.
    BelowBasicMinimum,
    /// Above the Basic member single-investment ceiling of $5,000.
    AboveBasicMaximum,
    /// A member with no level needs Club's minimum to establish one.
    ClubMinimumRequired,
    /// No plan at the member's level matches the requested rate and term.
    NoMatchingPlan,
    /// Below the matched plan's minimum.
    BelowPlanMinimum {
        /// The plan minimum that was not met.
        min: f64,
    },
    /// Above the matched plan's per-transaction maximum.
    AbovePlanMaximum {
        /// The plan maximum that was exceeded.
        max: f64,
    },
    /// The amount or rate is not a representable positive number.
    UnrepresentableAmount,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowBasicMinimum => {
                write!(f, "Minimum investment for Basic Members is $100")
            }
            Self::AboveBasicMaximum => write!(
                f,
                "Maximum investment for Basic Members is $5,000. \
                 Invest $20,000+ to become a Club Member."
            ),
            Self::ClubMinimumRequired => write!(
                f,
                "Minimum investment required is $20,000 to become a Club Member"
            ),
            Self::NoMatchingPlan => {
                write!(f, "Invalid investment plan for your membership level")
            }
            Self::BelowPlanMinimum { min } => write!(
                f,
                "Minimum investment for your membership level is ${}",
                format_amount(*min)
            ),
            Self::AbovePlanMaximum { max } => write!(
                f,
                "Maximum investment per transaction is ${}",
                format_amount(*max)
            ),
            Self::UnrepresentableAmount => {
                write!(f, "Investment amount must be a positive finite number")
            }
        }
    }
}

/// Outcome of validating a proposed investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// The investment is valid at the member's current level.
    Accept {
        /// Level the investment is booked under.
        level: MembershipLevel,
        /// Rate the investment accrues at.
        effective_rate: f64,
    },
    /// The investment is valid and promotes the member; the caller must
    /// persist the level transition it signals.
    AcceptWithUpgrade {
        /// Level the member transitions to.
        to: MembershipLevel,
        /// Rate the investment accrues at.
        effective_rate: f64,
    },
    /// The investment is not valid.
    Reject {
        /// Why it was rejected.
        reason: RejectReason,
    },
}

impl Verdict {
    /// Returns `true` for both accepting outcomes.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept { .. } | Self::AcceptWithUpgrade { .. })
    }

    /// Returns the level the investment books under, if accepted.
    #[must_use]
    pub const fn assigned_level(&self) -> Option<MembershipLevel> {
        match self {
            Self::Accept { level, .. } => Some(*level),
            Self::AcceptWithUpgrade { to, .. } => Some(*to),
            Self::Reject { .. } => None,
        }
    }

    /// Returns the effective rate, if accepted.
    #[must_use]
    pub const fn effective_rate(&self) -> Option<f64> {
        match self {
            Self::Accept { effective_rate, .. }
            | Self::AcceptWithUpgrade { effective_rate, .. } => Some(*effective_rate),
            Self::Reject { .. } => None,
        }
    }

    /// Returns the rejection reason, if rejected.
    #[must_use]
    pub const fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Reject { reason } => Some(*reason),
            _ => None,
        }
    }
}

/// Validates a proposed investment against the member's current level.
///
/// `current` is `None` for legacy accounts that were never granted a
/// level; they can only enter at Club's minimum. The decision table runs
/// in a fixed order, so an upgrade-qualifying amount is accepted before
/// any bound check applies.
// Plan rates are table constants matched for identity, never computed.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn validate_investment(
    current: Option<MembershipLevel>,
    request: &InvestmentRequest,
) -> Verdict {
    // NaN falls through every comparison below and would reach the Basic
    // accept arm; reject unrepresentable input before the table runs.
    if !request.amount.is_finite() || request.amount <= 0.0 || !request.rate.is_finite() {
        return Verdict::Reject {
            reason: RejectReason::UnrepresentableAmount,
        };
    }

    let club = catalog::tier(MembershipLevel::Club);
    let club_rate = club.plans[0].rate;

    match current {
        Some(MembershipLevel::Basic) => {
            let basic = catalog::tier(MembershipLevel::Basic);
            if request.amount >= club.min_amount {
                Verdict::AcceptWithUpgrade {
                    to: MembershipLevel::Club,
                    effective_rate: club_rate,
                }
            } else if request.amount < basic.plans[0].min_amount {
                Verdict::Reject {
                    reason: RejectReason::BelowBasicMinimum,
                }
            } else if request.amount > basic.max_per_investment {
                Verdict::Reject {
                    reason: RejectReason::AboveBasicMaximum,
                }
            } else {
                // The rate is caller-supplied on this arm rather than
                // derived from a plan; preserved as observed.
                Verdict::Accept {
                    level: MembershipLevel::Basic,
                    effective_rate: request.rate,
                }
            }
        }
        None => {
            if request.amount >= club.min_amount {
                Verdict::AcceptWithUpgrade {
                    to: MembershipLevel::Club,
                    effective_rate: club_rate,
                }
            } else {
                Verdict::Reject {
                    reason: RejectReason::ClubMinimumRequired,
                }
            }
        }
        Some(level) => {
            let term_days = u64::from(request.term_months) * u64::from(DAYS_PER_MONTH);
            let matched = available_plans(level)
                .into_iter()
                .find(|p| p.rate == request.rate && u64::from(p.term_days) == term_days);

            let Some(plan) = matched else {
                return Verdict::Reject {
                    reason: RejectReason::NoMatchingPlan,
                };
            };

            if request.amount < plan.min_amount {
                Verdict::Reject {
                    reason: RejectReason::BelowPlanMinimum {
                        min: plan.min_amount,
                    },
                }
            } else if request.amount > plan.max_amount {
                Verdict::Reject {
                    reason: RejectReason::AbovePlanMaximum {
                        max: plan.max_amount,
                    },
                }
            } else {
                Verdict::Accept {
                    level,
                    effective_rate: plan.rate,
                }
            }
        }
    }
}

/// Formats a dollar amount with thousands separators and no decimals,
/// matching the platform's user-facing messages.
#[allow(clippy::cast_possible_truncation)] // Catalog amounts are small integers.
pub(crate) fn format_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if whole < 0 {
        grouped.insert(0, '-');
    }
    grouped
}
