//! s24 list - List the skill catalog

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::catalog::{DifficultyLevel, Skill};
use crate::cli::card::{SkillCard, format_hours};
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by category
    #[arg(long, short)]
    pub category: Option<String>,

    /// Filter by difficulty: beginner, intermediate, advanced
    #[arg(long, short)]
    pub difficulty: Option<DifficultyLevel>,

    /// Only skills learnable within this many hours
    #[arg(long)]
    pub max_hours: Option<f64>,

    /// Sort by: catalog, name, hours
    #[arg(long, default_value = "catalog")]
    pub sort: String,

    /// Maximum number of skills to show (default from config)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let mut skills: Vec<&Skill> = ctx
        .catalog
        .skills()
        .iter()
        .filter(|s| {
            args.category
                .as_ref()
                .is_none_or(|c| s.category.eq_ignore_ascii_case(c))
        })
        .filter(|s| {
            args.difficulty
                .is_none_or(|d| s.difficulty_level == d)
        })
        .filter(|s| args.max_hours.is_none_or(|max| s.hours_required <= max))
        .collect();

    match args.sort.as_str() {
        "name" => skills.sort_by(|a, b| a.name.cmp(&b.name)),
        "hours" => skills.sort_by(|a, b| a.hours_required.total_cmp(&b.hours_required)),
        _ => {}
    }

    let limit = args.limit.unwrap_or(ctx.config.display.list_limit);
    skills.truncate(limit);

    if ctx.robot_mode() {
        let summaries: Vec<_> = skills
            .iter()
            .map(|s| SkillCard::new(s).to_summary())
            .collect();
        return emit_json(&robot_ok(serde_json::json!({
            "total": summaries.len(),
            "skills": summaries,
        })));
    }

    if skills.is_empty() {
        println!("{}", "No skills found".dimmed());
        println!();
        println!("See available categories with: s24 categories");
        return Ok(());
    }

    println!(
        "{:24} {:12} {:>7}  {:13} {}",
        "ID".bold(),
        "CATEGORY".bold(),
        "HOURS".bold(),
        "DIFFICULTY".bold(),
        "NAME".bold()
    );
    println!("{}", "─".repeat(84).dimmed());

    for skill in &skills {
        let difficulty = skill.difficulty_level.label();
        let difficulty_colored = match skill.difficulty_level {
            DifficultyLevel::Beginner => difficulty.green(),
            DifficultyLevel::Intermediate => difficulty.yellow(),
            DifficultyLevel::Advanced => difficulty.red(),
        };

        println!(
            "{:24} {:12} {:>7}  {:13} {}",
            skill.id,
            skill.category,
            format_hours(skill.hours_required),
            difficulty_colored,
            skill.name
        );
    }

    println!();
    println!("{} skills shown", skills.len());
    Ok(())
}
