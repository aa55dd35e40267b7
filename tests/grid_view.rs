use versegrid::{GlyphOptions, Grid, PoemRecord, SortMode, load_with_fallback};

fn poem(title: &str, author: &str, lines: &[&str]) -> PoemRecord {
    PoemRecord {
        title: title.to_string(),
        author: author.to_string(),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

/// Poem A: 4 lines, longest line 29 chars.
fn poem_a() -> PoemRecord {
    poem(
        "Zig",
        "First Author",
        &["a", "bb", "ccc", "the quick brown fox jumps far"],
    )
}

/// Poem B: 12 lines, longest line 21 chars.
fn poem_b() -> PoemRecord {
    let mut lines = vec!["twenty-one characters"];
    lines.extend(std::iter::repeat_n("line", 11));
    poem("Alpha", "Second Author", &lines)
}

#[test]
fn title_sort_ignores_line_stats() {
    let mut grid = Grid::build(vec![poem_a(), poem_b()], &GlyphOptions::default());
    grid.set_sort_mode(SortMode::Title);
    let titles: Vec<&str> = grid.view().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Alpha", "Zig"]);
}

#[test]
fn longest_line_sort_places_a_before_b() {
    let mut grid = Grid::build(vec![poem_b(), poem_a()], &GlyphOptions::default());
    grid.set_sort_mode(SortMode::LongestLine);
    let view = grid.view();
    assert_eq!(view[0].title, "Zig");
    assert_eq!(view[0].max_line_length, 29);
    assert_eq!(view[1].title, "Alpha");
    assert_eq!(view[1].max_line_length, 21);
}

#[test]
fn derived_metadata_matches_the_corpus() {
    let grid = Grid::build(vec![poem_a(), poem_b()], &GlyphOptions::default());
    let cards = grid.cards();

    assert_eq!(cards[0].line_count, 4);
    assert!(cards[0].groups.contains("length:short"));
    assert_eq!(cards[1].line_count, 12);
    assert!(cards[1].groups.contains("length:medium"));
    assert!(cards[1].groups.contains("author:Second Author"));

    // The longest line of each poem spans the full glyph width.
    for card in cards {
        let widest = card
            .glyph
            .bars
            .iter()
            .map(|b| b.rect().width())
            .fold(0.0_f64, f64::max);
        assert_eq!(widest, 300.0);
    }
}

#[test]
fn query_then_sort_composes() {
    let mut grid = Grid::build(
        vec![poem_a(), poem_b(), poem("Unrelated", "Nobody", &["x"])],
        &GlyphOptions::default(),
    );
    grid.set_query("author");
    grid.set_sort_mode(SortMode::FewestLines);
    let titles: Vec<&str> = grid.view().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Zig", "Alpha"]);
}

#[test]
fn cards_serialize_to_json() {
    let grid = Grid::build(vec![poem_a()], &GlyphOptions::default());
    let value = serde_json::to_value(grid.cards()).unwrap();
    let card = &value[0];
    assert_eq!(card["title"], "Zig");
    assert_eq!(card["line_count"], 4);
    assert!(card["glyph"]["bars"].is_array());
}

#[test]
fn double_source_failure_still_renders_cards() {
    let poems = load_with_fallback(
        Some("http://127.0.0.1:9/poems"),
        Some(std::path::Path::new("target/grid_view/definitely-absent.json")),
    );
    let grid = Grid::build(poems, &GlyphOptions::default());
    assert!(!grid.cards().is_empty());
    assert!(!grid.view().is_empty());
}
