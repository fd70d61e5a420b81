//! Skill card formatter for displaying skill information.

use console::style;
use serde::Serialize;

use crate::catalog::{DifficultyLevel, Skill};
use crate::cli::output::HumanLayout;
use crate::icons;

/// A formatted view of a skill for display.
#[derive(Debug, Clone)]
pub struct SkillCard<'a> {
    pub skill: &'a Skill,
    /// Whether to show outcomes and resources.
    pub detailed: bool,
}

/// Serializable skill summary for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct SkillSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub hours_required: f64,
    pub difficulty_level: DifficultyLevel,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub learning_outcomes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources_needed: Vec<String>,
}

impl<'a> SkillCard<'a> {
    #[must_use]
    pub const fn new(skill: &'a Skill) -> Self {
        Self {
            skill,
            detailed: false,
        }
    }

    /// Include learning outcomes and needed resources.
    #[must_use]
    pub const fn detailed(mut self) -> Self {
        self.detailed = true;
        self
    }

    #[must_use]
    pub fn to_summary(&self) -> SkillSummary {
        SkillSummary {
            id: self.skill.id.clone(),
            name: self.skill.name.clone(),
            description: self.skill.description.clone(),
            category: self.skill.category.clone(),
            hours_required: self.skill.hours_required,
            difficulty_level: self.skill.difficulty_level,
            learning_outcomes: if self.detailed {
                self.skill.learning_outcomes.clone()
            } else {
                Vec::new()
            },
            resources_needed: if self.detailed {
                self.skill.resources_needed.clone()
            } else {
                Vec::new()
            },
        }
    }

    #[must_use]
    pub fn format_human(&self) -> String {
        let mut layout = HumanLayout::new();

        layout.title(&format!(
            "{} {}",
            icons::resolve(&self.skill.icon),
            self.skill.name
        ));

        layout.kv("ID", &self.skill.id);
        layout.kv("Category", &self.skill.category);
        layout.kv("Hours", &format_hours(self.skill.hours_required));
        layout.kv(
            "Difficulty",
            &difficulty_colored(self.skill.difficulty_level),
        );
        layout.blank();

        for line in textwrap::wrap(&self.skill.description, 72) {
            layout.push_line(line.to_string());
        }

        if self.detailed {
            if !self.skill.learning_outcomes.is_empty() {
                layout.blank().section("What you'll learn");
                for outcome in &self.skill.learning_outcomes {
                    layout.bullet(outcome);
                }
            }

            if !self.skill.resources_needed.is_empty() {
                layout.blank().section("What you'll need");
                for resource in &self.skill.resources_needed {
                    layout.bullet(resource);
                }
            }
        }

        layout.build()
    }
}

/// Hour count with a trailing `h`, dropping a useless `.0`.
#[must_use]
pub fn format_hours(hours: f64) -> String {
    if (hours.fract()).abs() < f64::EPSILON {
        format!("{hours:.0}h")
    } else {
        format!("{hours:.1}h")
    }
}

/// Difficulty label colored like the original app's badges.
#[must_use]
pub fn difficulty_colored(level: DifficultyLevel) -> String {
    let label = level.label();
    match level {
        DifficultyLevel::Beginner => style(label).green().to_string(),
        DifficultyLevel::Intermediate => style(label).yellow().to_string(),
        DifficultyLevel::Advanced => style(label).red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::skill;

    #[test]
    fn card_shows_core_fields() {
        console::set_colors_enabled(false);
        let mut s = skill("latte-art", "Cooking", 6.0);
        s.name = "Latte Art".to_string();
        s.learning_outcomes = vec!["Steam microfoam".to_string()];

        let brief = SkillCard::new(&s).format_human();
        assert!(brief.contains("Latte Art"));
        assert!(brief.contains("Cooking"));
        assert!(brief.contains("6h"));
        assert!(!brief.contains("Steam microfoam"));

        let detailed = SkillCard::new(&s).detailed().format_human();
        assert!(detailed.contains("Steam microfoam"));
    }

    #[test]
    fn summary_omits_detail_lists_when_brief() {
        let mut s = skill("x", "Art", 2.0);
        s.learning_outcomes = vec!["a".to_string()];
        let summary = SkillCard::new(&s).to_summary();
        assert!(summary.learning_outcomes.is_empty());
        let summary = SkillCard::new(&s).detailed().to_summary();
        assert_eq!(summary.learning_outcomes.len(), 1);
    }

    #[test]
    fn hour_formatting() {
        assert_eq!(format_hours(3.0), "3h");
        assert_eq!(format_hours(3.5), "3.5h");
    }
}
