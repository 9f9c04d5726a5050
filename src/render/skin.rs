use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AssetError;
use crate::game::Direction;

/// Glyph set used by the arcade renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skin {
    pub head_up: String,
    pub head_down: String,
    pub head_left: String,
    pub head_right: String,
    pub body: String,
    /// Body glyph while a growth is still being shown
    pub fresh_body: String,
    pub food: String,
    pub empty: String,
}

impl Default for Skin {
    fn default() -> Self {
        Self {
            head_up: "▲".into(),
            head_down: "▼".into(),
            head_left: "◀".into(),
            head_right: "▶".into(),
            body: "■".into(),
            fresh_body: "□".into(),
            food: "●".into(),
            empty: "·".into(),
        }
    }
}

impl Skin {
    /// Load a skin from a JSON file; omitted glyphs keep their defaults
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let raw = fs::read_to_string(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let skin: Self = serde_json::from_str(&raw).map_err(|source| AssetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        skin.validate()?;
        Ok(skin)
    }

    /// Every glyph must be a single character so the grid stays aligned
    pub fn validate(&self) -> Result<(), AssetError> {
        let glyphs = [
            ("head_up", &self.head_up),
            ("head_down", &self.head_down),
            ("head_left", &self.head_left),
            ("head_right", &self.head_right),
            ("body", &self.body),
            ("fresh_body", &self.fresh_body),
            ("food", &self.food),
            ("empty", &self.empty),
        ];

        for (field, value) in glyphs {
            if value.chars().count() != 1 {
                return Err(AssetError::InvalidGlyph {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn head_for(&self, direction: Direction) -> &str {
        match direction {
            Direction::Up => &self.head_up,
            Direction::Down => &self.head_down,
            Direction::Left => &self.head_left,
            Direction::Right => &self.head_right,
        }
    }
}
