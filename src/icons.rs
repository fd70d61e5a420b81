//! Icon registry - symbolic icon names resolved to terminal glyphs.
//!
//! Catalog entries and preset activities carry symbolic icon names; the
//! registry maps them to glyphs at render time and falls back to a default
//! for unknown names.

/// Glyph used when a symbolic name has no registered icon.
pub const DEFAULT_ICON: &str = "📖";

const ICON_TABLE: [(&str, &str); 27] = [
    ("book-open", "📖"),
    ("briefcase", "💼"),
    ("camera", "📷"),
    ("chef-hat", "🍳"),
    ("circle-dot", "🤹"),
    ("code", "💻"),
    ("coffee", "☕"),
    ("database", "🗄️"),
    ("dumbbell", "🏋️"),
    ("film", "🎬"),
    ("gamepad", "🎮"),
    ("git-branch", "🌿"),
    ("globe", "🌍"),
    ("keyboard", "⌨️"),
    ("leaf", "🍃"),
    ("mic", "🎤"),
    ("monitor", "🖥️"),
    ("more-horizontal", "⋯"),
    ("music", "🎵"),
    ("palette", "🎨"),
    ("pen-tool", "🖋️"),
    ("piggy-bank", "🐷"),
    ("scissors", "✂️"),
    ("shapes", "🏺"),
    ("smartphone", "📱"),
    ("waves", "🌊"),
    ("wheat", "🌾"),
];

/// Resolve a symbolic icon name to a glyph, falling back to the default.
#[must_use]
pub fn resolve(name: &str) -> &'static str {
    lookup(name).unwrap_or(DEFAULT_ICON)
}

/// Whether a symbolic name has a registered glyph.
#[must_use]
pub fn is_registered(name: &str) -> bool {
    lookup(name).is_some()
}

fn lookup(name: &str) -> Option<&'static str> {
    ICON_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, glyph)| *glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SkillCatalog;

    #[test]
    fn known_names_resolve() {
        assert_eq!(resolve("music"), "🎵");
        assert_eq!(resolve("globe"), "🌍");
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(resolve("no-such-icon"), DEFAULT_ICON);
        assert_eq!(resolve(""), DEFAULT_ICON);
    }

    #[test]
    fn every_catalog_icon_is_registered() {
        // Fallback exists, but the bundled data should not rely on it
        let catalog = SkillCatalog::load().unwrap();
        for skill in catalog.skills() {
            assert!(
                is_registered(&skill.icon),
                "unregistered icon '{}' on skill {}",
                skill.icon,
                skill.id
            );
        }
    }
}
