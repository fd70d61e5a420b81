//! s24 show - Show skill details

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::card::SkillCard;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::{Result, S24Error};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Skill id (see `s24 list`)
    pub id: String,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let skill = ctx
        .catalog
        .get(&args.id)
        .ok_or_else(|| S24Error::SkillNotFound(args.id.clone()))?;

    let card = SkillCard::new(skill).detailed();

    if ctx.robot_mode() {
        return emit_json(&robot_ok(card.to_summary()));
    }

    println!("{}", card.format_human());
    println!();
    println!(
        "Start learning: {}",
        format!("s24 learn {}", skill.id).bold()
    );
    Ok(())
}
