//! s24 categories - List categories with skill counts

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug, Default)]
pub struct CategoriesArgs {}

pub fn run(ctx: &AppContext, _args: &CategoriesArgs) -> Result<()> {
    let counts = ctx.catalog.category_counts();

    if ctx.robot_mode() {
        return emit_json(&robot_ok(serde_json::json!({
            "total_skills": ctx.catalog.len(),
            "categories": counts,
        })));
    }

    if counts.is_empty() {
        println!("{}", "No categories (empty catalog)".dimmed());
        return Ok(());
    }

    for (category, count) in &counts {
        println!("{category:16} {count:>3}");
    }
    println!();
    println!(
        "{} categories, {} skills",
        counts.len(),
        ctx.catalog.len()
    );
    Ok(())
}
