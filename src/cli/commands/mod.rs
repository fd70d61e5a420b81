//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::budget::TimeBudget;
use crate::cli::Commands;
use crate::error::{Result, S24Error};

pub mod budget;
pub mod categories;
pub mod completions;
pub mod learn;
pub mod list;
pub mod recommend;
pub mod search;
pub mod show;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::List(args) => list::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Categories(args) => categories::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Recommend(args) => recommend::run(ctx, args),
        Commands::Budget(args) => budget::run(ctx, args),
        Commands::Learn(args) => learn::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Apply `name=hours` spend entries to a time budget.
///
/// The activity name must be a preset; the hour value follows the
/// coerce-to-zero policy for unparsable or negative input.
pub(crate) fn apply_spend(budget: &mut TimeBudget, entries: &[String]) -> Result<()> {
    for entry in entries {
        let (name, raw_hours) = entry.split_once('=').ok_or_else(|| {
            S24Error::InvalidArgument(format!(
                "expected NAME=HOURS, got '{entry}' (e.g. --spend youtube=3.5)"
            ))
        })?;
        budget.set_named(name.trim(), raw_hours)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_spend_parses_entries() {
        let mut budget = TimeBudget::new();
        apply_spend(
            &mut budget,
            &["youtube=3".to_string(), "netflix=1.5".to_string()],
        )
        .unwrap();
        assert!((budget.total() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn apply_spend_rejects_bad_shape_and_unknown_names() {
        let mut budget = TimeBudget::new();
        assert!(apply_spend(&mut budget, &["youtube".to_string()]).is_err());
        assert!(apply_spend(&mut budget, &["reading=2".to_string()]).is_err());
    }

    #[test]
    fn apply_spend_coerces_bad_hours_to_zero() {
        let mut budget = TimeBudget::new();
        apply_spend(&mut budget, &["gaming=lots".to_string()]).unwrap();
        assert!(budget.total().abs() < f64::EPSILON);
    }
}
