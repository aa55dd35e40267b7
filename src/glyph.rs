use kurbo::{RoundedRect, Size};

/// Knobs for the bar-chart glyph. Widths and offsets are in user units; the
/// output is a vector description so the consumer can scale it freely.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GlyphOptions {
    pub bar_thickness: f64,
    pub gap: f64,
    pub max_width: f64,
    pub fill: String,
}

impl Default for GlyphOptions {
    fn default() -> Self {
        Self {
            bar_thickness: 6.0,
            gap: 2.0,
            max_width: 300.0,
            fill: "#6b7280".to_string(),
        }
    }
}

/// A poem's line-length profile as stacked horizontal bars. One bar per line,
/// width proportional to trimmed character length, longest line spanning the
/// full canvas width.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Glyph {
    pub size: Size,
    pub bars: Vec<RoundedRect>,
    pub fill: String,
}

pub fn generate_glyph<S: AsRef<str>>(lines: &[S], options: &GlyphOptions) -> Glyph {
    let lengths: Vec<f64> = lines
        .iter()
        .map(|l| l.as_ref().trim().chars().count() as f64)
        .collect();

    // Floor of 1 so an all-empty poem never divides by zero.
    let longest = lengths.iter().copied().fold(1.0_f64, f64::max);

    let step = options.bar_thickness + options.gap;
    let mut bars = Vec::with_capacity(lengths.len());
    for (i, len) in lengths.iter().enumerate() {
        let width = (len / longest * options.max_width).max(2.0);
        let y = i as f64 * step;
        let radius = (options.bar_thickness * 0.5).min(width * 0.5);
        bars.push(RoundedRect::new(
            0.0,
            y,
            width,
            y + options.bar_thickness,
            radius,
        ));
    }

    let height = (lengths.len() as f64 * step - options.gap).max(options.bar_thickness);

    Glyph {
        size: Size::new(options.max_width, height),
        bars,
        fill: options.fill.clone(),
    }
}

impl Glyph {
    /// Renders the glyph as standalone SVG markup. The `viewBox` carries the
    /// geometry, so it stays crisp at any display size.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" role=\"img\">\n",
            self.size.width, self.size.height
        );
        for bar in &self.bars {
            let r = bar.rect();
            let rx = bar.radii().top_left;
            svg.push_str(&format!(
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>\n",
                r.x0,
                r.y0,
                r.width(),
                r.height(),
                rx,
                self.fill
            ));
        }
        svg.push_str("</svg>\n");
        svg
    }
}
