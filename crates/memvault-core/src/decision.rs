//! The single write path for investment creation.
//!
//! Every membership-level transition funnels through [`plan_investment`]:
//! it resolves the member's effective level, runs the validation decision
//! table, and returns the complete instruction set for the persistence
//! collaborator — the investment row to insert and, on upgrades, the
//! level transition to apply. No call site decides on its own when to
//! write a membership level.
//!
//! The function is pure with respect to reference data and performs no
//! persistence itself; it only signals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog;
use crate::level::MembershipLevel;
use crate::status::resolve_level;
use crate::validation::{format_amount, validate_investment, InvestmentRequest, Verdict};

/// Persisted membership inputs for one user, as read by the persistence
/// collaborator.
///
/// Concurrent investments for the same user race on this snapshot; the
/// persistence layer must serialize read-modify-write of a user's
/// membership record so two upgrade decisions cannot both apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MembershipSnapshot {
    /// The stored membership level; `None` for accounts never granted one.
    pub stored_level: Option<MembershipLevel>,
    /// Sum of the user's non-deleted investment amounts.
    pub total_invested: f64,
}

/// Lifecycle state of a persisted investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    /// Accruing; counts toward the member's total.
    Active,
    /// Awaiting funds confirmation; counts toward the member's total.
    Pending,
}

/// The investment row the persistence collaborator inserts on an
/// accepting verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentRecord {
    /// Record identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: String,
    /// Client-chosen label.
    pub name: String,
    /// Invested amount in dollars.
    pub amount: f64,
    /// Effective APY from the verdict — not necessarily the requested one.
    pub rate: f64,
    /// Lock-in term in months.
    #[serde(rename = "term")]
    pub term_months: u32,
    /// Level the investment books under.
    #[serde(rename = "membership_level")]
    pub level: MembershipLevel,
    /// Lifecycle state at creation.
    pub status: InvestmentStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// An explicit membership-level transition for the persistence
/// collaborator to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipChange {
    /// The user whose stored level changes.
    pub user_id: String,
    /// The stored level before the transition.
    pub from: Option<MembershipLevel>,
    /// The level to persist.
    pub to: MembershipLevel,
}

/// Everything the caller needs to act on one proposed investment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentDecision {
    /// The validation outcome.
    pub verdict: Verdict,
    /// Row to insert when the verdict accepts; `None` on rejection.
    pub record: Option<InvestmentRecord>,
    /// Level transition to persist; `None` unless the verdict upgrades.
    pub membership_change: Option<MembershipChange>,
    /// User-facing response message.
    pub message: String,
}

impl InvestmentDecision {
    /// Returns `true` when the investment was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

/// Resolves, validates, and plans one proposed investment.
///
/// The effective level is resolved from the snapshot: accounts with a
/// stored level validate at their investment-derived level (with the
/// retained-Basic rule), accounts never granted a level take the legacy
/// path. On accepting verdicts the returned decision carries the record
/// to insert; on upgrades it additionally carries the [`MembershipChange`]
/// that the caller must persist together with the record.
#[must_use]
pub fn plan_investment(
    user_id: &str,
    snapshot: &MembershipSnapshot,
    request: &InvestmentRequest,
) -> InvestmentDecision {
    let current = snapshot
        .stored_level
        .map(|stored| resolve_level(snapshot.total_invested, Some(stored)));

    let verdict = validate_investment(current, request);

    match verdict {
        Verdict::AcceptWithUpgrade { to, effective_rate } => {
            info!(
                user_id,
                from = current.map_or("none", |l| l.as_str()),
                to = to.as_str(),
                amount = request.amount,
                "investment accepted with membership upgrade"
            );
            InvestmentDecision {
                verdict,
                record: Some(build_record(user_id, request, to, effective_rate)),
                membership_change: Some(MembershipChange {
                    user_id: user_id.to_owned(),
                    from: snapshot.stored_level,
                    to,
                }),
                message: upgrade_message(current, to, request.amount),
            }
        }
        Verdict::Accept {
            level,
            effective_rate,
        } => {
            debug!(
                user_id,
                level = level.as_str(),
                amount = request.amount,
                "investment accepted"
            );
            InvestmentDecision {
                verdict,
                record: Some(build_record(user_id, request, level, effective_rate)),
                membership_change: None,
                message: accept_message(level),
            }
        }
        Verdict::Reject { reason } => {
            debug!(
                user_id,
                amount = request.amount,
                reason = %reason,
                "investment rejected"
            );
            InvestmentDecision {
                verdict,
                record: None,
                membership_change: None,
                message: reason.to_string(),
            }
        }
    }
}

fn build_record(
    user_id: &str,
    request: &InvestmentRequest,
    level: MembershipLevel,
    effective_rate: f64,
) -> InvestmentRecord {
    InvestmentRecord {
        id: Uuid::new_v4(),
        user_id: user_id.to_owned(),
        name: request.name.clone(),
        amount: request.amount,
        rate: effective_rate,
        term_months: request.term_months,
        level,
        status: InvestmentStatus::Active,
        created_at: Utc::now(),
    }
}

fn upgrade_message(from: Option<MembershipLevel>, to: MembershipLevel, amount: f64) -> String {
    let tier_name = catalog::tier(to).name;
    let amount = format_amount(amount);
    if from.is_none() {
        // Legacy accounts establish membership rather than upgrade it.
        format!("Investment created successfully! You are now a {tier_name} with ${amount} invested.")
    } else {
        format!("Congratulations! You've upgraded to {tier_name} with ${amount} invested.")
    }
}

fn accept_message(level: MembershipLevel) -> String {
    // The Basic response has carried the exclamation mark since the first
    // release; established tiers never had it.
    if level == MembershipLevel::Basic {
        String::from("Investment created successfully!")
    } else {
        String::from("Investment created successfully")
    }
}
