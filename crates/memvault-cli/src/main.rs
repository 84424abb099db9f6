//! memvault - membership core operator CLI
//!
//! Inspect the tier catalog, resolve membership statuses, and dry-run
//! investment validation against the same code the platform serves with.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memvault_core::{
    plan_investment, resolve_membership, InvestmentRequest, MembershipLevel,
    MembershipSnapshot, TIERS,
};
use tracing_subscriber::EnvFilter;

/// memvault - membership core operator CLI
#[derive(Parser, Debug)]
#[command(name = "memvault")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the membership tier and plan catalog
    Tiers,

    /// Resolve the membership status for an invested total
    Status {
        /// Cumulative invested amount in dollars
        #[arg(long)]
        invested: f64,

        /// Stored membership level (none, basic, club, premium, vip, elite)
        #[arg(long, default_value = "none")]
        stored: String,
    },

    /// Dry-run an investment through the single write path
    Validate {
        /// Cumulative invested amount in dollars
        #[arg(long)]
        invested: f64,

        /// Stored membership level (none, basic, club, premium, vip, elite)
        #[arg(long, default_value = "none")]
        stored: String,

        /// Proposed investment amount in dollars
        #[arg(long)]
        amount: f64,

        /// Requested APY percentage
        #[arg(long)]
        rate: f64,

        /// Requested term in months
        #[arg(long)]
        term_months: u32,

        /// Label for the investment
        #[arg(long, default_value = "cli dry run")]
        name: String,

        /// User id stamped on the planned record
        #[arg(long, default_value = "cli")]
        user: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .init();

    match cli.command {
        Commands::Tiers => {
            print_tiers(cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Status { invested, stored } => {
            let stored = parse_stored(&stored)?;
            print_status(invested, stored, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate {
            invested,
            stored,
            amount,
            rate,
            term_months,
            name,
            user,
        } => {
            let stored = parse_stored(&stored)?;
            let snapshot = MembershipSnapshot {
                stored_level: stored,
                total_invested: invested,
            };
            let request = InvestmentRequest {
                name,
                amount,
                rate,
                term_months,
            };
            let decision = plan_investment(&user, &snapshot, &request);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&decision)?);
            } else {
                println!("{}", decision.message);
                if let Some(record) = &decision.record {
                    println!(
                        "record: {} | {} | ${} at {}% for {} months",
                        record.id,
                        record.level,
                        record.amount,
                        record.rate,
                        record.term_months
                    );
                }
                if let Some(change) = &decision.membership_change {
                    let from = change.from.map_or("none", |l| l.as_str());
                    println!("membership change: {from} -> {}", change.to);
                }
            }

            if decision.is_accepted() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn parse_stored(value: &str) -> Result<Option<MembershipLevel>> {
    MembershipLevel::parse_stored(value)
        .with_context(|| format!("invalid --stored value {value:?}"))
}

fn print_tiers(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&TIERS)?);
        return Ok(());
    }

    for tier in &TIERS {
        let band = match tier.max_amount {
            Some(max) => format!("${} - ${}", tier.min_amount, max),
            None => format!("${}+", tier.min_amount),
        };
        println!("{} {} ({band})", tier.icon, tier.name);
        for plan in tier.plans {
            println!(
                "    {}: {}% APY, {} days, ${} - ${}",
                plan.id, plan.rate, plan.term_days, plan.min_amount, plan.max_amount
            );
        }
    }
    Ok(())
}

fn print_status(invested: f64, stored: Option<MembershipLevel>, json: bool) -> Result<()> {
    let status = resolve_membership(invested, stored);

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {} (${} invested)",
        status.icon, status.level_name, status.total_invested
    );
    match (status.next_level_name, status.amount_to_next) {
        (Some(next), Some(to_next)) => println!(
            "next: {next} (${} to go, {:.1}% there)",
            to_next.max(0.0),
            status.progress_percentage
        ),
        _ => println!("top tier reached"),
    }
    for plan in &status.available_plans {
        println!("    {}: {}", plan.name, plan.description);
    }
    Ok(())
}
