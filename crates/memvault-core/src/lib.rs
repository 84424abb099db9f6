//! # memvault-core
//!
//! Membership-tier and investment-plan core for the memvault investment
//! platform.
//!
//! A member's level (Basic, Club, Premium, VIP, Elite) is derived from the
//! sum of their investments against a fixed five-tier catalog. This crate
//! owns that derivation and everything that depends on it:
//!
//! - Resolve a [`MembershipStatus`] — level, visible plans, and progress
//!   toward the next tier — from `(total_invested, stored_level)`
//! - Validate a proposed investment into a [`Verdict`]: accept, accept
//!   with a level upgrade, or reject with a user-facing reason
//! - Plan the persistence work for one investment through the single
//!   write path, [`plan_investment`]
//!
//! ## Core Concepts
//!
//! - **Tier catalog**: five [`catalog::TierDefinition`]s with their
//!   [`catalog::PlanDefinition`]s, a compile-time `static` shared by every
//!   caller. Basic's band ends at $4,999 and Club's starts at $20,000;
//!   amounts in between resolve to Basic (the floor).
//! - **Retained Basic**: Basic is granted at onboarding, not earned, so a
//!   stored Basic below Club's minimum is never demoted.
//! - **Verdict**: a closed sum type — callers must handle all three
//!   outcomes, and rejection is data, not an error.
//! - **Single write path**: all membership transitions are signaled by
//!   [`plan_investment`] as an explicit [`MembershipChange`]; the
//!   persistence layer applies them, serialized per user.
//!
//! ## Example
//!
//! ```rust
//! use memvault_core::{
//!     plan_investment, resolve_membership, InvestmentRequest, MembershipLevel,
//!     MembershipSnapshot,
//! };
//!
//! // A freshly onboarded member with nothing invested.
//! let status = resolve_membership(0.0, Some(MembershipLevel::Basic));
//! assert_eq!(status.level, MembershipLevel::Basic);
//! assert_eq!(status.available_plans.len(), 2); // own plan + Club upgrade
//!
//! // Their first investment meets Club's minimum and upgrades them.
//! let decision = plan_investment(
//!     "user-1",
//!     &MembershipSnapshot {
//!         stored_level: Some(MembershipLevel::Basic),
//!         total_invested: 0.0,
//!     },
//!     &InvestmentRequest {
//!         name: "First investment".to_string(),
//!         amount: 20_000.0,
//!         rate: 6.0,
//!         term_months: 12,
//!     },
//! );
//! assert!(decision.is_accepted());
//! assert_eq!(
//!     decision.membership_change.as_ref().map(|c| c.to),
//!     Some(MembershipLevel::Club)
//! );
//! ```
//!
//! ## Design Notes
//!
//! Every operation here is a synchronous pure function over `'static`
//! reference data — no I/O, no locks, no caches. The HTTP and persistence
//! layers are collaborators: this crate consumes two scalars per user and
//! produces serializable results plus explicit write instructions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod decision;
pub mod error;
pub mod level;
pub mod status;
pub mod validation;

#[cfg(test)]
mod proptest_membership;

// Re-export main types at crate root for convenience
pub use catalog::{plan, seed_plans, tier, PlanDefinition, TierDefinition, TIERS};
pub use decision::{
    plan_investment, InvestmentDecision, InvestmentRecord, InvestmentStatus, MembershipChange,
    MembershipSnapshot,
};
pub use error::MembershipError;
pub use level::MembershipLevel;
pub use status::{
    available_plans, level_for_amount, progress_to_next, resolve_level, resolve_membership,
    MembershipStatus, TierProgress,
};
pub use validation::{
    validate_investment, InvestmentRequest, RejectReason, Verdict, DAYS_PER_MONTH,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{PlanDefinition, TierDefinition};
    pub use crate::decision::{
        plan_investment, InvestmentDecision, InvestmentRecord, MembershipChange,
        MembershipSnapshot,
    };
    pub use crate::error::MembershipError;
    pub use crate::level::MembershipLevel;
    pub use crate::status::{resolve_membership, MembershipStatus};
    pub use crate::validation::{validate_investment, InvestmentRequest, Verdict};
}
