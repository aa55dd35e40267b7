use crate::model::CardRecord;

/// How the visible cards are ordered. `Default` keeps insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Default,
    MostLines,
    FewestLines,
    LongestLine,
    Title,
}

impl SortMode {
    /// Maps a selector string to a mode. Unrecognized input falls back to
    /// `Default` rather than erroring.
    pub fn parse(s: &str) -> Self {
        match s {
            "most-lines" => Self::MostLines,
            "fewest-lines" => Self::FewestLines,
            "longest-line" => Self::LongestLine,
            "title" => Self::Title,
            _ => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::MostLines => "most-lines",
            Self::FewestLines => "fewest-lines",
            Self::LongestLine => "longest-line",
            Self::Title => "title",
        }
    }
}

/// Transient UI state for the grid. Reset to defaults on a full rebuild.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub query: String,
    pub sort_mode: SortMode,
}

/// Computes the visible, ordered subset of cards. Filtering is
/// case-insensitive substring containment over title and author; sorting is
/// stable, so ties keep their relative insertion order.
pub fn compute_view<'a>(
    cards: &'a [CardRecord],
    query: &str,
    sort_mode: SortMode,
) -> Vec<&'a CardRecord> {
    let needle = query.trim().to_lowercase();

    let mut view: Vec<&CardRecord> = cards
        .iter()
        .filter(|card| {
            needle.is_empty()
                || card.title.to_lowercase().contains(&needle)
                || card.author.to_lowercase().contains(&needle)
        })
        .collect();

    match sort_mode {
        SortMode::Default => {}
        SortMode::MostLines => view.sort_by(|a, b| b.line_count.cmp(&a.line_count)),
        SortMode::FewestLines => view.sort_by(|a, b| a.line_count.cmp(&b.line_count)),
        SortMode::LongestLine => view.sort_by(|a, b| b.max_line_length.cmp(&a.max_line_length)),
        SortMode::Title => view.sort_by_key(|c| c.title.to_lowercase()),
    }

    view
}
