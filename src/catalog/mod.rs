//! Skill catalog - the immutable skill data set and its access surface.
//!
//! The catalog is assembled from three independently authored JSON sets
//! embedded in the binary, concatenated in authoring order and sorted by
//! category. It is loaded once per process and never mutated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, S24Error};

/// Category tag for the language partition used by the recommendation engine.
pub const LANGUAGES_CATEGORY: &str = "Languages";

/// A catalog entry describing a learnable competency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub hours_required: f64,
    pub difficulty_level: DifficultyLevel,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub resources_needed: Vec<String>,
    pub icon: String,
}

/// Ordinal difficulty tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DifficultyLevel {
    type Err = S24Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(S24Error::InvalidArgument(format!(
                "unknown difficulty '{other}' (expected beginner, intermediate or advanced)"
            ))),
        }
    }
}

// The three authored data sets. Concatenation order matters: within a
// category, authoring order is the stable secondary sort key.
const SKILLS_CORE: &str = include_str!("../../assets/skills_core.json");
const SKILLS_EXTENDED: &str = include_str!("../../assets/skills_extended.json");
const SKILLS_ADVANCED: &str = include_str!("../../assets/skills_advanced.json");

/// The full skill catalog, frozen for the process lifetime.
#[derive(Debug, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    /// Load and assemble the catalog from the embedded data sets.
    ///
    /// Skills are sorted by category (lexicographic); the sort is stable so
    /// authoring order is preserved within each category. No de-duplication
    /// is performed: id uniqueness is a data-authoring contract.
    pub fn load() -> Result<Self> {
        let mut skills = Vec::new();
        for (set_name, raw) in [
            ("core", SKILLS_CORE),
            ("extended", SKILLS_EXTENDED),
            ("advanced", SKILLS_ADVANCED),
        ] {
            let set: Vec<Skill> = serde_json::from_str(raw).map_err(|err| {
                S24Error::CatalogData(format!("parse {set_name} skill set: {err}"))
            })?;
            skills.extend(set);
        }

        skills.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(Self { skills })
    }

    /// Construct a catalog from an already ordered skill list. Test seam.
    #[must_use]
    pub fn from_skills(mut skills: Vec<Skill>) -> Self {
        skills.sort_by(|a, b| a.category.cmp(&b.category));
        Self { skills }
    }

    /// Full ordered skill sequence.
    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Look up a skill by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Distinct category names, sorted lexicographically and deduplicated.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.skills.iter().map(|s| s.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Per-category skill counts, keyed in sorted category order.
    #[must_use]
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for skill in &self.skills {
            *counts.entry(skill.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::{DifficultyLevel, Skill};

    /// Minimal skill constructor for engine tests.
    pub fn skill(id: &str, category: &str, hours: f64) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_string(),
            description: format!("{id} description"),
            category: category.to_string(),
            hours_required: hours,
            difficulty_level: DifficultyLevel::Beginner,
            learning_outcomes: vec![],
            resources_needed: vec![],
            icon: "book-open".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_embedded_sets() {
        let catalog = SkillCatalog::load().unwrap();
        assert!(!catalog.is_empty());
        // Every skill has a positive hour estimate
        assert!(catalog.skills().iter().all(|s| s.hours_required > 0.0));
    }

    #[test]
    fn catalog_is_sorted_by_category() {
        let catalog = SkillCatalog::load().unwrap();
        let categories: Vec<&str> = catalog.skills().iter().map(|s| s.category.as_str()).collect();
        let mut sorted = categories.clone();
        sorted.sort_unstable();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn catalog_ids_are_unique() {
        // Authoring contract, checked here rather than at runtime
        let catalog = SkillCatalog::load().unwrap();
        let mut ids: Vec<&str> = catalog.skills().iter().map(|s| s.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate skill ids in authored data");
    }

    #[test]
    fn categories_are_sorted_and_deduplicated() {
        let catalog = SkillCatalog::from_skills(vec![
            test_fixtures::skill("a", "Music", 5.0),
            test_fixtures::skill("b", "Art", 5.0),
            test_fixtures::skill("c", "Music", 5.0),
        ]);
        assert_eq!(catalog.categories(), vec!["Art", "Music"]);
    }

    #[test]
    fn stable_sort_preserves_authoring_order_within_category() {
        let catalog = SkillCatalog::from_skills(vec![
            test_fixtures::skill("second", "Music", 5.0),
            test_fixtures::skill("a-art", "Art", 5.0),
            test_fixtures::skill("third", "Music", 5.0),
        ]);
        let music: Vec<&str> = catalog
            .skills()
            .iter()
            .filter(|s| s.category == "Music")
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(music, vec!["second", "third"]);
    }

    #[test]
    fn category_counts_match() {
        let catalog = SkillCatalog::load().unwrap();
        let counts = catalog.category_counts();
        assert_eq!(counts.values().sum::<usize>(), catalog.len());
        assert!(counts.contains_key(LANGUAGES_CATEGORY));
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!(
            "Beginner".parse::<DifficultyLevel>().unwrap(),
            DifficultyLevel::Beginner
        );
        assert!("expert".parse::<DifficultyLevel>().is_err());
    }
}
