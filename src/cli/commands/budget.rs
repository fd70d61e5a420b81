//! s24 budget - Total tracked activity hours and timeframe share

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::budget::{TimeBudget, Timeframe, motivational_message};
use crate::cli::card::format_hours;
use crate::cli::commands::apply_spend;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::icons;
use crate::recommend::{language_capacity, recommend};

#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Tracked activity hours as NAME=HOURS (repeatable; presets: tiktok,
    /// instagram, youtube, netflix, gaming, other)
    #[arg(long = "spend", value_name = "NAME=HOURS")]
    pub spend: Vec<String>,

    /// Timeframe for the percent-of-period metric
    #[arg(long, short, value_enum, default_value_t)]
    pub timeframe: Timeframe,
}

pub fn run(ctx: &AppContext, args: &BudgetArgs) -> Result<()> {
    let mut budget = TimeBudget::new();
    apply_spend(&mut budget, &args.spend)?;

    let total = budget.total();
    let percent = budget.percent_of(args.timeframe);
    let params = ctx.recommend_params();
    let within_reach = recommend(total, ctx.catalog.skills(), &params).len();
    let capacity = language_capacity(total, &params);

    if ctx.robot_mode() {
        return emit_json(&robot_ok(serde_json::json!({
            "activities": budget.activities(),
            "total_hours": total,
            "timeframe": args.timeframe,
            "timeframe_hours": args.timeframe.hours(),
            "percent_of_timeframe": percent,
            "skills_within_reach": within_reach,
            "language_capacity": capacity,
        })));
    }

    for activity in budget.activities() {
        println!(
            "{} {:12} {:>7}",
            icons::resolve(activity.icon),
            activity.name,
            format_hours(activity.hours)
        );
    }

    println!();
    println!(
        "Total per {}: {} ({percent:.1}% of {} hours)",
        args.timeframe.label(),
        format_hours(total).bold(),
        args.timeframe.hours()
    );
    println!("{}", motivational_message(total).dimmed());

    if total > 0.0 {
        println!();
        println!("Skills within reach: {within_reach}");
        println!("Languages fundable:  {capacity}");
        println!();
        println!("See them with: s24 recommend --hours {total}");
    }

    Ok(())
}
