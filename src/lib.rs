#![forbid(unsafe_code)]

pub mod classify;
pub mod color;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod model;
pub mod source;
pub mod view;

pub use classify::LengthBucket;
pub use color::{Hsl, derive_color};
pub use error::{VersegridError, VersegridResult};
pub use glyph::{Glyph, GlyphOptions, generate_glyph};
pub use grid::Grid;
pub use model::{CardRecord, PoemRecord, build_cards};
pub use source::{DEFAULT_URL, embedded_poems, fetch_poems, load_poems_file, load_with_fallback};
pub use view::{SortMode, ViewState, compute_view};
