//! Catalog filtering - category and free-text narrowing of the skill list.
//!
//! A pure inclusion filter: no ranking, no tokenization, original catalog
//! order is preserved. A skill matches when the category selector passes
//! (no selector = the "all" sentinel) and the query, if any, is a
//! case-insensitive substring of its name, description or category.

use crate::catalog::Skill;

/// Filter over the skill catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Category selector; `None` means "all".
    pub category: Option<String>,
    /// Free-text query; empty matches everything.
    pub query: String,
}

impl CatalogFilter {
    /// Create a new empty filter (matches everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category selector.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Check if any narrowing is in effect.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.query.is_empty()
    }

    /// Check if a skill passes the filter.
    #[must_use]
    pub fn matches(&self, skill: &Skill) -> bool {
        if let Some(ref category) = self.category {
            if skill.category != *category {
                return false;
            }
        }

        if self.query.is_empty() {
            return true;
        }

        let needle = self.query.to_lowercase();
        skill.name.to_lowercase().contains(&needle)
            || skill.description.to_lowercase().contains(&needle)
            || skill.category.to_lowercase().contains(&needle)
    }

    /// Apply the filter, preserving catalog order.
    #[must_use]
    pub fn apply<'a>(&self, skills: &'a [Skill]) -> Vec<&'a Skill> {
        skills.iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::skill;

    fn sample() -> Vec<Skill> {
        let mut guitar = skill("guitar", "Music", 10.0);
        guitar.name = "Campfire Guitar".to_string();
        guitar.description = "Strum songs for friends".to_string();

        let mut sketching = skill("sketching", "Art", 6.0);
        sketching.name = "Urban Sketching".to_string();
        sketching.description = "Draw the city around you".to_string();

        let mut salsa = skill("salsa", "Cooking", 2.0);
        salsa.name = "Fresh Salsa".to_string();
        salsa.description = "Knife work and seasoning for salsa".to_string();

        vec![guitar, sketching, salsa]
    }

    #[test]
    fn empty_filter_is_identity() {
        let skills = sample();
        let result = CatalogFilter::new().apply(&skills);
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["guitar", "sketching", "salsa"]);
    }

    #[test]
    fn category_filter_narrows() {
        let skills = sample();
        let result = CatalogFilter::new().with_category("Art").apply(&skills);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "sketching");
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let skills = sample();
        let result = CatalogFilter::new().with_query("GUITAR").apply(&skills);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "guitar");
    }

    #[test]
    fn query_matches_description_and_category() {
        let skills = sample();

        // "city" only appears in the sketching description
        let by_description = CatalogFilter::new().with_query("city").apply(&skills);
        assert_eq!(by_description[0].id, "sketching");

        // "cook" matches the Cooking category label
        let by_category = CatalogFilter::new().with_query("cook").apply(&skills);
        assert_eq!(by_category[0].id, "salsa");
    }

    #[test]
    fn category_and_query_combine_with_and() {
        let skills = sample();
        let result = CatalogFilter::new()
            .with_category("Music")
            .with_query("city")
            .apply(&skills);
        assert!(result.is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let skills = sample();
        let result = CatalogFilter::new().with_query("quantum").apply(&skills);
        assert!(result.is_empty());

        let result = CatalogFilter::new().apply(&[]);
        assert!(result.is_empty());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn arb_skill() -> impl Strategy<Value = Skill> {
            (
                "[a-z]{1,8}",
                prop_oneof![
                    Just("Music".to_string()),
                    Just("Art".to_string()),
                    Just("Cooking".to_string())
                ],
                1.0f64..50.0,
            )
                .prop_map(|(id, category, hours)| skill(&id, &category, hours))
        }

        fn arb_filter() -> impl Strategy<Value = CatalogFilter> {
            (
                proptest::option::of(prop_oneof![
                    Just("Music".to_string()),
                    Just("Art".to_string())
                ]),
                "[a-z]{0,4}",
            )
                .prop_map(|(category, query)| CatalogFilter { category, query })
        }

        proptest! {
            #[test]
            fn result_is_order_preserving_subsequence(
                skills in proptest::collection::vec(arb_skill(), 0..20),
                filter in arb_filter(),
            ) {
                let result = filter.apply(&skills);
                // Every result position maps to a later catalog position
                let mut cursor = 0usize;
                for matched in &result {
                    let pos = skills[cursor..]
                        .iter()
                        .position(|s| std::ptr::eq(s, *matched))
                        .expect("result member must come from the input in order");
                    cursor += pos + 1;
                }
            }

            #[test]
            fn filtering_is_idempotent(
                skills in proptest::collection::vec(arb_skill(), 0..20),
                filter in arb_filter(),
            ) {
                let once: Vec<Skill> = filter.apply(&skills).into_iter().cloned().collect();
                let twice = filter.apply(&once);
                prop_assert_eq!(once.len(), twice.len());
            }
        }
    }
}
