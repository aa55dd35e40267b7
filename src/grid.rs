use crate::{
    glyph::GlyphOptions,
    model::{CardRecord, PoemRecord, build_cards},
    view::{SortMode, ViewState, compute_view},
};

/// The single owner of the card collection and the transient view state.
/// A reload replaces the card set wholesale and resets the view state;
/// nothing in here is persisted.
#[derive(Debug, Default)]
pub struct Grid {
    cards: Vec<CardRecord>,
    state: ViewState,
}

impl Grid {
    #[tracing::instrument(skip(poems, options), fields(poems = poems.len()))]
    pub fn build(poems: Vec<PoemRecord>, options: &GlyphOptions) -> Self {
        Self {
            cards: build_cards(poems, options),
            state: ViewState::default(),
        }
    }

    /// Replaces the card set with a freshly loaded corpus. The previous cards
    /// are dropped wholesale and the query/sort state resets.
    pub fn rebuild(&mut self, poems: Vec<PoemRecord>, options: &GlyphOptions) {
        *self = Self::build(poems, options);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.state.sort_mode = sort_mode;
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The currently visible, ordered subset.
    pub fn view(&self) -> Vec<&CardRecord> {
        compute_view(&self.cards, &self.state.query, self.state.sort_mode)
    }
}
