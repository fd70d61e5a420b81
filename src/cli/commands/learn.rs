//! s24 learn - Open a learning-course search for a skill in the browser

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::{Result, S24Error};
use crate::launch::{SearchEngine, learning_url, open_browser};

#[derive(Args, Debug)]
pub struct LearnArgs {
    /// Skill id (see `s24 list`)
    pub id: String,

    /// Search engine to use (default from config)
    #[arg(long, short, value_enum)]
    pub engine: Option<SearchEngine>,

    /// Print the URL instead of opening a browser
    #[arg(long)]
    pub print: bool,
}

pub fn run(ctx: &AppContext, args: &LearnArgs) -> Result<()> {
    let skill = ctx
        .catalog
        .get(&args.id)
        .ok_or_else(|| S24Error::SkillNotFound(args.id.clone()))?;

    let engine = args.engine.unwrap_or(ctx.config.learn.engine);
    let url = learning_url(engine, &skill.name);

    if ctx.robot_mode() {
        return emit_json(&robot_ok(serde_json::json!({
            "skill": skill.id,
            "engine": engine,
            "url": url,
            "opened": false,
        })));
    }

    if args.print {
        println!("{url}");
        return Ok(());
    }

    // Fire-and-forget: a failed launch falls back to printing the URL
    if open_browser(&url) {
        println!(
            "Opening {} search for {}…",
            engine.label(),
            skill.name.bold()
        );
    } else {
        println!("Could not open a browser. Search here instead:");
        println!("{url}");
    }
    Ok(())
}
