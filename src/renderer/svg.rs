//! SVG generation from layout results
//!
//! Primitives are rendered into a single ordered element buffer; emission
//! order is paint order.

use crate::layout::{BorderLine, LayoutConfig, LayoutResult, Primitive, TextBlock};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    font_size: f64,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig, font_size: f64) -> Self {
        Self {
            config,
            font_size,
            elements: vec![],
        }
    }

    fn indent_str(&self, depth: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a text element with one tspan per sub-line, each offset
    /// vertically by one font-size increment
    pub fn add_text_block(&mut self, block: &TextBlock) {
        let nl = self.newline();
        let mut text = format!(
            r#"{}<text xml:space="preserve" style="font-size:{}px; line-height:{}px; font-family:{};" x="0" y="0">{}"#,
            self.indent_str(1),
            self.font_size,
            self.font_size + 2.0,
            self.config.font_family,
            nl,
        );
        for (i, line) in block.lines.iter().enumerate() {
            text.push_str(&format!(
                r#"{}<tspan x="{}" y="{}">{}</tspan>{}"#,
                self.indent_str(2),
                block.x,
                block.y + i as f64 * self.font_size,
                escape_xml(line),
                nl,
            ));
        }
        text.push_str(&format!("{}</text>", self.indent_str(1)));
        self.elements.push(text);
    }

    /// Add a border line element
    pub fn add_border_line(&mut self, line: &BorderLine) {
        self.elements.push(format!(
            r#"{}<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
            self.indent_str(1),
            line.x1,
            line.y1,
            line.x2,
            line.y2,
        ));
    }

    /// Build the final SVG string
    pub fn build(self, content_height: f64) -> String {
        let nl = self.newline();
        let height = content_height + self.config.bottom_margin;

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.config.canvas_width, height,
        );
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a LayoutResult to an SVG string.
///
/// `layout` supplies the font size that positions tspans within their text
/// blocks; `config` supplies the document envelope.
pub fn render_svg(result: &LayoutResult, layout: &LayoutConfig, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone(), layout.font_size);

    for primitive in &result.primitives {
        match primitive {
            Primitive::Text(block) => builder.add_text_block(block),
            Primitive::Border(line) => builder.add_border_line(line),
        }
    }

    builder.build(result.height)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
