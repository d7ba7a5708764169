//! Full-document regression snapshots
//!
//! These pin the exact SVG output for small documents. Configurations use
//! exact binary values (10, 0.5) so every coordinate is a round number and
//! the snapshots are stable across platforms.

use handmark::{convert_with_config, LayoutConfig, RenderConfig};

fn exact_config() -> RenderConfig {
    RenderConfig::new().with_layout(
        LayoutConfig::new()
            .with_font_size(10.0)
            .with_line_spacing(10.0)
            .with_width_ratio(0.5),
    )
}

#[test]
fn test_single_line_document() {
    let svg = convert_with_config("Hi", exact_config()).unwrap();
    insta::assert_snapshot!(svg, @r#"
<svg xmlns="http://www.w3.org/2000/svg" width="2000" height="60">
  <text xml:space="preserve" style="font-size:10px; line-height:12px; font-family:Myhandwriting;" x="0" y="0">
    <tspan x="5" y="0">Hi</tspan>
  </text>
</svg>
"#);
}

#[test]
fn test_single_row_table_document() {
    let svg = convert_with_config("a|b", exact_config()).unwrap();
    insta::assert_snapshot!(svg, @r#"
<svg xmlns="http://www.w3.org/2000/svg" width="2000" height="70">
  <text xml:space="preserve" style="font-size:10px; line-height:12px; font-family:Myhandwriting;" x="0" y="0">
    <tspan x="5" y="10">a</tspan>
  </text>
  <text xml:space="preserve" style="font-size:10px; line-height:12px; font-family:Myhandwriting;" x="0" y="0">
    <tspan x="10" y="10">b</tspan>
  </text>
  <line x1="0" y1="0" x2="10" y2="0" stroke="black"/>
  <line x1="0" y1="10" x2="10" y2="10" stroke="black"/>
  <line x1="0" y1="0" x2="0" y2="10" stroke="black"/>
  <line x1="5" y1="0" x2="5" y2="10" stroke="black"/>
  <line x1="10" y1="0" x2="10" y2="10" stroke="black"/>
</svg>
"#);
}

#[test]
fn test_wrapped_cell_document() {
    // Budget 3 splits the first cell into two sub-lines, doubling the row.
    let config = RenderConfig::new().with_layout(
        LayoutConfig::new()
            .with_font_size(10.0)
            .with_line_spacing(10.0)
            .with_width_ratio(0.5)
            .with_max_chars(Some(3)),
    );
    let svg = convert_with_config("aa bb|c", config).unwrap();
    insta::assert_snapshot!(svg, @r#"
<svg xmlns="http://www.w3.org/2000/svg" width="2000" height="80">
  <text xml:space="preserve" style="font-size:10px; line-height:12px; font-family:Myhandwriting;" x="0" y="0">
    <tspan x="5" y="10">aa</tspan>
    <tspan x="5" y="20">bb</tspan>
  </text>
  <text xml:space="preserve" style="font-size:10px; line-height:12px; font-family:Myhandwriting;" x="0" y="0">
    <tspan x="15" y="10">c</tspan>
  </text>
  <line x1="0" y1="0" x2="15" y2="0" stroke="black"/>
  <line x1="0" y1="20" x2="15" y2="20" stroke="black"/>
  <line x1="0" y1="0" x2="0" y2="20" stroke="black"/>
  <line x1="10" y1="0" x2="10" y2="20" stroke="black"/>
  <line x1="15" y1="0" x2="15" y2="20" stroke="black"/>
</svg>
"#);
}
