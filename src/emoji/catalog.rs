use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cells per row and column of the shared sprite sheet.
pub const SPRITE_GRID_SIZE: u16 = 49;

/// Variation selector that asks for emoji presentation.
const VARIATION_SELECTOR_16: char = '\u{FE0F}';

static BUILTIN: LazyLock<EmojiCatalog> = LazyLock::new(|| {
    EmojiCatalog::from_json(include_str!("../../data/emoji_catalog.json"))
        .unwrap_or_else(|err| panic!("built-in emoji catalog is invalid: {err}"))
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiEntry {
    pub char: String,
    pub name: String,
    /// Column in the sprite sheet.
    pub x: u16,
    /// Row in the sprite sheet.
    pub y: u16,
    /// Unicode emoji version that introduced the glyph.
    pub version: f32,
}

#[derive(Debug, Error)]
pub enum EmojiCatalogError {
    #[error("malformed emoji catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("emoji {0:?} is listed more than once")]
    Duplicate(String),

    #[error(
        "emoji {char:?} at ({x}, {y}) is outside the {grid}x{grid} sprite grid",
        grid = SPRITE_GRID_SIZE
    )]
    OutOfGrid { char: String, x: u16, y: u16 },
}

/// Index from emoji character to its sprite cell and metadata.
#[derive(Debug, Clone, Default)]
pub struct EmojiCatalog {
    entries: IndexMap<String, EmojiEntry>,
}

impl EmojiCatalog {
    /// The catalog bundled with the crate.
    pub fn builtin() -> &'static EmojiCatalog {
        &BUILTIN
    }

    /// Parses a JSON list of [`EmojiEntry`] objects.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, EmojiCatalogError> {
        let entries: Vec<EmojiEntry> = serde_json::from_str(json.as_ref())?;
        Self::from_entries(entries)
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = EmojiEntry>,
    ) -> Result<Self, EmojiCatalogError> {
        let mut catalog = Self::default();

        for entry in entries {
            if entry.x >= SPRITE_GRID_SIZE || entry.y >= SPRITE_GRID_SIZE {
                return Err(EmojiCatalogError::OutOfGrid {
                    char: entry.char,
                    x: entry.x,
                    y: entry.y,
                });
            }

            let key = strip_variation_selector(&entry.char).to_owned();
            if catalog.entries.contains_key(&key) {
                return Err(EmojiCatalogError::Duplicate(entry.char));
            }

            catalog.entries.insert(key, entry);
        }

        Ok(catalog)
    }

    /// Looks up a character, ignoring a trailing emoji variation selector.
    pub fn get(&self, char: &str) -> Option<&EmojiEntry> {
        self.entries.get(strip_variation_selector(char))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &EmojiEntry> {
        self.entries.values()
    }
}

fn strip_variation_selector(char: &str) -> &str {
    char.strip_suffix(VARIATION_SELECTOR_16).unwrap_or(char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(char: &str, x: u16, y: u16) -> EmojiEntry {
        EmojiEntry {
            char: char.to_owned(),
            name: "test".to_owned(),
            x,
            y,
            version: 1.0,
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = EmojiCatalog::builtin();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("😀").map(|e| e.name.as_str()), Some("grinning face"));
    }

    #[test]
    fn test_lookup_ignores_variation_selector() {
        let catalog = EmojiCatalog::builtin();
        let plain = catalog.get("❤").expect("heart should be in the catalog");
        let presented = catalog.get("❤\u{FE0F}").expect("selector should be ignored");
        assert_eq!(plain, presented);
    }

    #[test]
    fn test_unknown_character_is_none() {
        assert!(EmojiCatalog::builtin().get("a").is_none());
        assert!(EmojiCatalog::builtin().get("").is_none());
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = EmojiCatalog::from_entries([entry("🙂", 1, 1), entry("🙂\u{FE0F}", 2, 2)]);
        assert!(matches!(result, Err(EmojiCatalogError::Duplicate(c)) if c == "🙂\u{FE0F}"));
    }

    #[test]
    fn test_rejects_out_of_grid_coordinates() {
        let result = EmojiCatalog::from_entries([entry("🙂", SPRITE_GRID_SIZE, 0)]);
        assert!(matches!(
            result,
            Err(EmojiCatalogError::OutOfGrid { x: 49, y: 0, .. })
        ));

        assert!(EmojiCatalog::from_entries([entry("🙂", 48, 48)]).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = EmojiCatalog::from_json(r#"[{ "char": "🙂" }]"#).unwrap_err();
        assert!(matches!(err, EmojiCatalogError::Json(_)));
        assert!(err.to_string().starts_with("malformed emoji catalog"));
    }

    #[test]
    fn test_preserves_catalog_order() {
        let catalog =
            EmojiCatalog::from_entries([entry("🙂", 0, 0), entry("🙃", 0, 1), entry("😉", 0, 2)])
                .unwrap();

        let chars: Vec<_> = catalog.iter().map(|e| e.char.as_str()).collect();
        assert_eq!(chars, ["🙂", "🙃", "😉"]);
    }
}
