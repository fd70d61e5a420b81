//! s24 search - Search the catalog by free text and category

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::card::{SkillCard, format_hours};
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::search::CatalogFilter;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (matched against name, description and category)
    #[arg(default_value = "")]
    pub query: String,

    /// Category selector ("all" selects every category)
    #[arg(long, short, default_value = "all")]
    pub category: String,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let mut filter = CatalogFilter::new().with_query(args.query.clone());
    if !args.category.eq_ignore_ascii_case("all") {
        filter = filter.with_category(args.category.clone());
    }

    let results = filter.apply(ctx.catalog.skills());

    if ctx.robot_mode() {
        let summaries: Vec<_> = results
            .iter()
            .map(|s| SkillCard::new(s).to_summary())
            .collect();
        return emit_json(&robot_ok(serde_json::json!({
            "query": args.query,
            "category": args.category,
            "total": summaries.len(),
            "skills": summaries,
        })));
    }

    if results.is_empty() {
        println!("{}", "No skills found".dimmed());
        println!();
        println!("Try different search terms or another category.");
        println!("Reset filters with: s24 search --category all");
        return Ok(());
    }

    for skill in &results {
        println!(
            "{:24} {:>7}  {} {}",
            skill.id.bold(),
            format_hours(skill.hours_required),
            skill.name,
            format!("({})", skill.category).dimmed()
        );
    }

    println!();
    if args.category.eq_ignore_ascii_case("all") {
        println!("{} skills matched", results.len());
    } else {
        println!("{} skills matched in {}", results.len(), args.category);
    }
    Ok(())
}
