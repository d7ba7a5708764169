//! Handmark - handwritten-style SVG notes from a Markdown subset
//!
//! This library converts plain text lines and pipe-delimited tables into a
//! static SVG that emulates handwritten notes: each input line becomes a
//! rendered line of text, and table blocks become bordered grids with
//! wrapped cell text and auto-sized columns.
//!
//! # Example
//!
//! ```rust
//! let svg = handmark::convert("Hello World").unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Hello World"));
//! ```

pub mod layout;
pub mod parser;
pub mod preset;
pub mod renderer;

pub use layout::{LayoutConfig, LayoutError, LayoutResult, Primitive};
pub use parser::{classify, Block};
pub use preset::{Preset, PresetError};
pub use renderer::{render_svg, SvgConfig};

use thiserror::Error;

/// Errors that can occur during the conversion pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error resolving a paper preset
    #[error("preset error: {0}")]
    Preset(#[from] PresetError),
}

/// Configuration for the complete conversion pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Debug mode: dump primitive positions to stderr
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
            debug: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Apply a paper preset's overrides to the layout configuration
    pub fn with_preset(mut self, preset: &Preset) -> Self {
        self.layout = preset.apply(self.layout);
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Convert input text to SVG with default configuration.
///
/// This is the main entry point for the library. It classifies the input
/// into blocks, computes the layout, and generates the SVG document.
///
/// # Example
///
/// ```rust
/// let svg = handmark::convert("name|value\nx|1").unwrap();
/// assert!(svg.contains("<line"));
/// assert!(svg.contains("name"));
/// ```
pub fn convert(source: &str) -> Result<String, RenderError> {
    convert_with_config(source, RenderConfig::default())
}

/// Convert input text to SVG with custom configuration.
///
/// # Example
///
/// ```rust
/// use handmark::{convert_with_config, LayoutConfig, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_borders(false));
///
/// let svg = convert_with_config("a|b", config).unwrap();
/// assert!(!svg.contains("<line"));
/// ```
pub fn convert_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let blocks = parser::classify(source);

    let result = layout::compute(&blocks, &config.layout)?;

    if config.debug {
        eprintln!("=== Layout Debug ===");
        for primitive in &result.primitives {
            match primitive {
                Primitive::Text(t) => {
                    eprintln!("text x={:.1} y={:.1} lines={}", t.x, t.y, t.lines.len())
                }
                Primitive::Border(b) => {
                    eprintln!("line ({:.1},{:.1}) -> ({:.1},{:.1})", b.x1, b.y1, b.x2, b.y2)
                }
            }
        }
        eprintln!("height={:.1}", result.height);
        eprintln!("====================");
    }

    Ok(render_svg(&result, &config.layout, &config.svg))
}

/// Convert input text to SVG using a named paper preset.
///
/// Preset resolution happens before any conversion work; an unknown name
/// fails with [`PresetError::UnknownPreset`] and produces no output.
pub fn convert_with_preset(source: &str, preset_name: &str) -> Result<String, RenderError> {
    let preset = Preset::named(preset_name)?;
    convert_with_config(source, RenderConfig::new().with_preset(&preset))
}
