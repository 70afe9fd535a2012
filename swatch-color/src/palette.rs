//! Read-only reference palette mapping known colors to human names.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ColorError;
use crate::parse::{parse_color, parse_hex};
use crate::rgb::Rgb;

const BUILTIN_DATASET: &str = include_str!("../assets/colors.json");

/// Errors raised while building a palette from a reference dataset.
///
/// These indicate a packaging defect rather than bad user input.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("palette entry {index} has an empty name")]
    UnnamedEntry { index: usize },

    #[error("palette entry {index} ({name}) has an invalid hex value")]
    InvalidEntry {
        index: usize,
        name: String,
        #[source]
        source: ColorError,
    },
}

/// Palette entry as it appears in a dataset, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPaletteEntry {
    pub name: String,
    pub hex: String,
}

impl RawPaletteEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PaletteDataset {
    colors: Vec<RawPaletteEntry>,
}

/// Validated palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    name: String,
    hex: Rgb,
}

impl PaletteEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hex(&self) -> Rgb {
        self.hex
    }
}

/// Exact-match lookup from canonical color to palette name.
#[derive(Debug, Clone, Default)]
pub struct PaletteIndex {
    entries: Vec<PaletteEntry>,
    by_color: HashMap<Rgb, usize>,
}

impl PaletteIndex {
    /// Build an index from dataset entries, keeping their order.
    ///
    /// When several entries share a color, the earliest one wins lookups.
    /// Fails on the first entry with an invalid hex or a blank name.
    pub fn load<I>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = RawPaletteEntry>,
    {
        let mut index = Self::default();

        for (position, raw) in entries.into_iter().enumerate() {
            let name = raw.name.trim();
            if name.is_empty() {
                return Err(PaletteError::UnnamedEntry { index: position });
            }

            let hex = parse_hex(raw.hex.trim()).map_err(|source| {
                PaletteError::InvalidEntry {
                    index: position,
                    name: name.to_string(),
                    source,
                }
            })?;

            index.by_color.entry(hex).or_insert(position);
            index.entries.push(PaletteEntry {
                name: name.to_string(),
                hex,
            });
        }

        log::debug!(
            "palette loaded: {} entries, {} distinct colors",
            index.entries.len(),
            index.by_color.len()
        );
        Ok(index)
    }

    /// Build an index from a `{"colors": [{"name", "hex"}, ...]}` document.
    pub fn from_json(text: &str) -> Result<Self, PaletteError> {
        let dataset: PaletteDataset = serde_json::from_str(text)?;
        Self::load(dataset.colors)
    }

    /// Palette shipped with the crate (the CSS named colors).
    pub fn builtin() -> Result<Self, PaletteError> {
        Self::from_json(BUILTIN_DATASET)
    }

    /// Name of the first entry whose color equals `color`.
    pub fn lookup_exact(&self, color: Rgb) -> Option<&str> {
        self.by_color
            .get(&color)
            .map(|&position| self.entries[position].name.as_str())
    }

    /// Normalize free text and look it up; unparseable text has no match.
    pub fn lookup_text(&self, text: &str) -> Option<&str> {
        parse_color(text)
            .ok()
            .and_then(|color| self.lookup_exact(color))
    }

    /// Color of the first entry named `name`, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<Rgb> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.hex)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
