//! Configuration for SVG output

/// Configuration options for the SVG document envelope.
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Fixed document width
    pub canvas_width: f64,

    /// Margin added below the final cursor position
    pub bottom_margin: f64,

    /// Font family applied to every text element
    pub font_family: String,

    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            canvas_width: 2000.0,
            bottom_margin: 50.0,
            font_family: "Myhandwriting".to_string(),
            pretty_print: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document width
    pub fn with_canvas_width(mut self, width: f64) -> Self {
        self.canvas_width = width;
        self
    }

    /// Set the bottom margin
    pub fn with_bottom_margin(mut self, margin: f64) -> Self {
        self.bottom_margin = margin;
        self
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
