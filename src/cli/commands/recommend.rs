//! s24 recommend - Recommend skills for an available-hours budget

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::budget::{TimeBudget, Timeframe, motivational_message};
use crate::cli::card::format_hours;
use crate::cli::commands::apply_spend;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::{Result, S24Error};
use crate::icons;
use crate::recommend::{is_stretch, language_capacity, progress_percent, recommend};

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Available hours, given directly
    #[arg(long, conflicts_with = "spend")]
    pub hours: Option<f64>,

    /// Tracked activity hours as NAME=HOURS (repeatable; presets: tiktok,
    /// instagram, youtube, netflix, gaming, other)
    #[arg(long = "spend", value_name = "NAME=HOURS")]
    pub spend: Vec<String>,

    /// Timeframe for the percent-of-period metric
    #[arg(long, short, value_enum, default_value_t)]
    pub timeframe: Timeframe,

    /// Show the full list instead of the first entries
    #[arg(long)]
    pub all: bool,
}

pub fn run(ctx: &AppContext, args: &RecommendArgs) -> Result<()> {
    if args.hours.is_none() && args.spend.is_empty() {
        return Err(S24Error::InvalidArgument(
            "provide --hours N or at least one --spend NAME=HOURS".to_string(),
        ));
    }

    let mut budget = TimeBudget::new();
    apply_spend(&mut budget, &args.spend)?;

    let total = args.hours.map_or_else(|| budget.total(), |h| h.max(0.0));
    let percent = ((total / args.timeframe.hours()) * 100.0).min(100.0);

    let params = ctx.recommend_params();
    let matched = recommend(total, ctx.catalog.skills(), &params);
    let capacity = language_capacity(total, &params);

    if ctx.robot_mode() {
        let skills: Vec<_> = matched
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "name": s.name,
                    "category": s.category,
                    "hours_required": s.hours_required,
                    "difficulty_level": s.difficulty_level,
                    "progress_percent": progress_percent(total, s),
                    "stretch": is_stretch(total, s),
                })
            })
            .collect();
        return emit_json(&robot_ok(serde_json::json!({
            "available_hours": total,
            "timeframe": args.timeframe,
            "percent_of_timeframe": percent,
            "language_capacity": capacity,
            "total": skills.len(),
            "skills": skills,
        })));
    }

    println!(
        "{} tracked per {} ({percent:.1}% of the {})",
        format_hours(total).bold(),
        args.timeframe.label(),
        args.timeframe.label()
    );
    println!("{}", motivational_message(total).dimmed());
    println!();

    if matched.is_empty() {
        if total > 0.0 {
            println!("{}", "Add more time".bold());
            println!("Track more hours to see personal skill recommendations.");
        } else {
            println!("{}", "Let's get started".bold());
            println!("Enter your time to unlock learning opportunities.");
        }
        return Ok(());
    }

    println!(
        "{} skills within reach, {} language(s) fundable",
        matched.len(),
        capacity
    );
    println!();

    let limit = if args.all {
        matched.len()
    } else {
        ctx.config.display.recommend_limit
    };

    for skill in matched.iter().take(limit) {
        let progress = progress_percent(total, skill);
        let progress_display = if progress >= 100.0 {
            format!("{progress:.0}%").green()
        } else if progress >= 70.0 {
            format!("{progress:.0}%").blue()
        } else {
            format!("{progress:.0}%").yellow()
        };

        println!(
            "{} {:28} {:>7}  {:12} {:>5}",
            icons::resolve(&skill.icon),
            skill.name.bold(),
            format_hours(skill.hours_required),
            skill.category.dimmed(),
            progress_display
        );

        if is_stretch(total, skill) {
            println!(
                "   {}",
                format!(
                    "needs {} more to fully master",
                    format_hours(skill.hours_required - total)
                )
                .yellow()
            );
        }
    }

    if matched.len() > limit {
        println!();
        println!(
            "{}",
            format!("… and {} more (use --all)", matched.len() - limit).dimmed()
        );
    }

    Ok(())
}
