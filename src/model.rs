use std::collections::BTreeSet;

use crate::{
    classify::classify,
    color::{Hsl, derive_color},
    glyph::{Glyph, GlyphOptions, generate_glyph},
};

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A raw poem as fetched. Every field defaults so a malformed record
/// normalizes instead of failing deserialization; unknown fields (PoetryDB
/// sends `linecount` and friends) are ignored.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PoemRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

impl PoemRecord {
    /// Normalizes in place: sentinel title/author for blank values, trailing
    /// whitespace stripped per line, empty lines dropped. Line order is
    /// preserved.
    pub fn normalize(mut self) -> Self {
        self.title = non_blank_or(self.title, UNTITLED);
        self.author = non_blank_or(self.author, UNKNOWN_AUTHOR);
        self.lines = self
            .lines
            .into_iter()
            .map(|l| l.trim_end().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        self
    }
}

fn non_blank_or(value: String, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// The fully-derived, renderable representation of one poem. Built once per
/// poem at grid-build time and never mutated afterwards.
#[derive(Clone, Debug, serde::Serialize)]
pub struct CardRecord {
    pub title: String,
    pub author: String,
    pub line_count: usize,
    pub max_line_length: usize,
    pub glyph: Glyph,
    pub color: Hsl,
    pub groups: BTreeSet<String>,
}

impl CardRecord {
    pub fn from_poem(poem: PoemRecord, options: &GlyphOptions) -> Self {
        let poem = poem.normalize();
        let line_count = poem.lines.len();
        let max_line_length = poem
            .lines
            .iter()
            .map(|l| l.trim().chars().count())
            .max()
            .unwrap_or(0);
        let glyph = generate_glyph(&poem.lines, options);
        let color = derive_color(&poem.author);
        let groups = classify(&poem.author, line_count);

        Self {
            title: poem.title,
            author: poem.author,
            line_count,
            max_line_length,
            glyph,
            color,
            groups,
        }
    }
}

/// Builds the card set for a freshly loaded corpus.
pub fn build_cards(poems: Vec<PoemRecord>, options: &GlyphOptions) -> Vec<CardRecord> {
    poems
        .into_iter()
        .map(|p| CardRecord::from_poem(p, options))
        .collect()
}
