//! Recommendation engine - maps an available-hours budget to a ranked,
//! category-diversified subset of the catalog.
//!
//! Skills are bucketed into feasibility tiers relative to the budget
//! (quick win, achievable, stretch), one pick per category is taken from a
//! bounded prefix of each tier's categories, language skills are budgeted
//! separately at a flat per-language cost, and the tail is every remaining
//! affordable skill sorted by closeness of fit. All ordering is
//! deterministic: grouping follows first appearance in catalog order and
//! every sort is stable, so ties fall back to catalog order.

use std::collections::HashSet;

use crate::catalog::{LANGUAGES_CATEGORY, Skill};

/// Share of the budget below which a skill counts as a quick win.
const QUICK_WIN_RATIO: f64 = 0.3;
/// Budget multiple up to which a skill still counts as a stretch goal.
const STRETCH_RATIO: f64 = 1.5;
/// Sweet-spot share of the budget targeted by achievable-tier picks.
const TARGET_RATIO: f64 = 0.7;

/// Tunable parameters for the recommendation engine.
#[derive(Debug, Clone)]
pub struct RecommendParams {
    /// Flat hour cost assumed per language skill.
    pub hours_per_language: f64,
    /// Category cap for the quick-win tier.
    pub quick_win_categories: usize,
    /// Category cap for the achievable tier.
    pub achievable_categories: usize,
    /// Category cap for the stretch tier.
    pub stretch_categories: usize,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            hours_per_language: 300.0,
            quick_win_categories: 3,
            achievable_categories: 4,
            stretch_categories: 2,
        }
    }
}

/// How many language skills the budget can fund.
#[must_use]
pub fn language_capacity(available_hours: f64, params: &RecommendParams) -> usize {
    if available_hours <= 0.0 || params.hours_per_language <= 0.0 {
        return 0;
    }
    (available_hours / params.hours_per_language).floor() as usize
}

/// Progress toward a skill given the current budget, as a capped percentage.
#[must_use]
pub fn progress_percent(available_hours: f64, skill: &Skill) -> f64 {
    ((available_hours / skill.hours_required) * 100.0).min(100.0)
}

/// Whether a skill needs more hours than the budget provides.
#[must_use]
pub fn is_stretch(available_hours: f64, skill: &Skill) -> bool {
    skill.hours_required > available_hours
}

/// Produce the ordered recommendation list for a time budget.
///
/// Returns an empty list for a zero budget. The result never repeats an id:
/// tier picks check the accumulated selection, the remaining-skills tail
/// excludes everything selected before it, and language skills live in a
/// disjoint partition.
#[must_use]
pub fn recommend<'a>(
    available_hours: f64,
    skills: &'a [Skill],
    params: &RecommendParams,
) -> Vec<&'a Skill> {
    if available_hours <= 0.0 {
        return Vec::new();
    }

    let (language_skills, other_skills): (Vec<&Skill>, Vec<&Skill>) = skills
        .iter()
        .partition(|s| s.category == LANGUAGES_CATEGORY);

    let capacity = language_capacity(available_hours, params);
    let selected_languages: Vec<&Skill> = language_skills.into_iter().take(capacity).collect();

    let quick_wins: Vec<&Skill> = other_skills
        .iter()
        .copied()
        .filter(|s| s.hours_required <= available_hours * QUICK_WIN_RATIO)
        .collect();
    let achievable: Vec<&Skill> = other_skills
        .iter()
        .copied()
        .filter(|s| {
            s.hours_required > available_hours * QUICK_WIN_RATIO
                && s.hours_required <= available_hours
        })
        .collect();
    let stretch: Vec<&Skill> = other_skills
        .iter()
        .copied()
        .filter(|s| {
            s.hours_required > available_hours
                && s.hours_required <= available_hours * STRETCH_RATIO
        })
        .collect();

    let mut recommendations: Vec<&Skill> = Vec::new();
    let mut selected: HashSet<&str> = HashSet::new();

    // Quick wins: cheapest skill from each of the first categories.
    for (_, mut members) in group_by_category(&quick_wins)
        .into_iter()
        .take(params.quick_win_categories)
    {
        members.sort_by(|a, b| a.hours_required.total_cmp(&b.hours_required));
        if let Some(pick) = members.first() {
            selected.insert(pick.id.as_str());
            recommendations.push(pick);
        }
    }

    // Achievable: per category, the skill closest to the budget sweet spot.
    let target = available_hours * TARGET_RATIO;
    for (_, mut members) in group_by_category(&achievable)
        .into_iter()
        .take(params.achievable_categories)
    {
        members.sort_by(|a, b| {
            (a.hours_required - target)
                .abs()
                .total_cmp(&(b.hours_required - target).abs())
        });
        if let Some(pick) = members.first() {
            if selected.insert(pick.id.as_str()) {
                recommendations.push(pick);
            }
        }
    }

    // Stretch: cheapest per category, bounded to a short tail.
    for (_, mut members) in group_by_category(&stretch)
        .into_iter()
        .take(params.stretch_categories)
    {
        members.sort_by(|a, b| a.hours_required.total_cmp(&b.hours_required));
        if let Some(pick) = members.first() {
            if selected.insert(pick.id.as_str()) {
                recommendations.push(pick);
            }
        }
    }

    recommendations.extend(selected_languages.iter().copied());

    // Closest-fit tail: every affordable skill not yet shown.
    let mut remaining: Vec<&Skill> = other_skills
        .iter()
        .copied()
        .filter(|s| !selected.contains(s.id.as_str()))
        .filter(|s| s.hours_required <= available_hours)
        .collect();
    remaining.sort_by(|a, b| {
        (a.hours_required - available_hours)
            .abs()
            .total_cmp(&(b.hours_required - available_hours).abs())
    });
    recommendations.extend(remaining);

    recommendations
}

/// Group a tier's members by category, in order of first appearance.
fn group_by_category<'a>(tier: &[&'a Skill]) -> Vec<(&'a str, Vec<&'a Skill>)> {
    let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();
    for skill in tier {
        match groups.iter_mut().find(|(c, _)| *c == skill.category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((skill.category.as_str(), vec![skill])),
        }
    }
    groups
}
