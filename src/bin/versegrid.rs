use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use versegrid::{CardRecord, GlyphOptions, Grid, SortMode, load_with_fallback};

#[derive(Parser, Debug)]
#[command(name = "versegrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the filtered, sorted view as a table.
    List(ViewArgs),
    /// Write the grid as a self-contained HTML page with inline SVG glyphs.
    Grid(GridArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Primary endpoint returning a JSON array of poems.
    #[arg(long, default_value = versegrid::DEFAULT_URL)]
    url: String,

    /// Local JSON file used when the endpoint fails.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Skip the network and go straight to the local/embedded sources.
    #[arg(long)]
    offline: bool,
}

#[derive(Parser, Debug)]
struct ViewArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Search query matched against title and author.
    #[arg(long, default_value = "")]
    query: String,

    /// Sort mode: most-lines, fewest-lines, longest-line, title, or default.
    /// Anything unrecognized means default order.
    #[arg(long, default_value = "default")]
    sort: String,
}

#[derive(Parser, Debug)]
struct GridArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Grid(args) => cmd_grid(args),
    }
}

fn build_grid(args: &ViewArgs) -> Grid {
    let url = (!args.source.offline).then_some(args.source.url.as_str());
    let poems = load_with_fallback(url, args.source.in_path.as_deref());

    let mut grid = Grid::build(poems, &GlyphOptions::default());
    grid.set_query(args.query.clone());
    grid.set_sort_mode(SortMode::parse(&args.sort));
    grid
}

fn cmd_list(args: ViewArgs) -> anyhow::Result<()> {
    let grid = build_grid(&args);
    let view = grid.view();

    for card in &view {
        println!(
            "{:<40} {:<28} lines={:<4} longest={}",
            card.title, card.author, card.line_count, card.max_line_length
        );
    }
    eprintln!("{} of {} cards shown", view.len(), grid.cards().len());
    Ok(())
}

fn cmd_grid(args: GridArgs) -> anyhow::Result<()> {
    let grid = build_grid(&args.view);
    let html = render_html(&grid.view());

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, html)
        .with_context(|| format!("write html '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Thin presentation layer: consumes the ordered view and emits markup. The
/// core never sees the page; it only hands over the card references.
fn render_html(view: &[&CardRecord]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>versegrid</title>\n<style>\n\
         body { font-family: sans-serif; background: #121420; color: #e5e7eb; margin: 2rem; }\n\
         main { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1rem; }\n\
         article { background: #1c1f2e; border-radius: 8px; padding: 1rem; }\n\
         article h2 { font-size: 1rem; margin: 0 0 0.25rem; }\n\
         article p { font-size: 0.8rem; margin: 0 0 0.75rem; }\n\
         article svg { width: 100%; height: auto; display: block; }\n\
         </style>\n</head>\n<body>\n<main>\n",
    );

    for card in view {
        page.push_str(&format!(
            "<article style=\"border-left: 4px solid {}\">\n<h2>{}</h2>\n<p>{} &middot; {} lines</p>\n{}</article>\n",
            card.color.to_css(),
            escape_html(&card.title),
            escape_html(&card.author),
            card.line_count,
            card.glyph.to_svg()
        ));
    }

    page.push_str("</main>\n</body>\n</html>\n");
    page
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
