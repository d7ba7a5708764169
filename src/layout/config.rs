//! Configuration for the layout engine

/// Configuration options for layout computation.
///
/// `font_size`, `line_spacing`, and `width_ratio` must all be positive; the
/// derived glyph width is `width_ratio * font_size`.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Font size in layout units
    pub font_size: f64,

    /// Vertical advance per line of text
    pub line_spacing: f64,

    /// Ratio of average glyph width to font size
    pub width_ratio: f64,

    /// Maximum characters per wrapped cell line; `None` disables wrapping
    pub max_chars: Option<usize>,

    /// Whether to draw table borders
    pub draw_borders: bool,

    /// Extra horizontal gap inserted after each table column
    pub col_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: 28.0,
            line_spacing: 30.5,
            width_ratio: 0.6,
            max_chars: None,
            draw_borders: true,
            col_gap: 0.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Average horizontal footprint of one glyph
    pub fn glyph_width(&self) -> f64 {
        self.width_ratio * self.font_size
    }

    /// Set the font size
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line spacing
    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the glyph width ratio
    pub fn with_width_ratio(mut self, ratio: f64) -> Self {
        self.width_ratio = ratio;
        self
    }

    /// Set the per-line character budget for cell wrapping
    pub fn with_max_chars(mut self, max_chars: Option<usize>) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Enable or disable table borders
    pub fn with_borders(mut self, draw: bool) -> Self {
        self.draw_borders = draw;
        self
    }

    /// Set the gap inserted after each table column
    pub fn with_col_gap(mut self, gap: f64) -> Self {
        self.col_gap = gap;
        self
    }
}
