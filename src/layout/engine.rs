//! Layout computation engine
//!
//! Walks the classified blocks in order with a single vertical cursor that
//! accumulates downward through the document. Plain lines consume one
//! line-spacing each; tables consume their full height plus one line-spacing
//! of breathing room. Table geometry is derived entirely from the wrapped
//! cell content: column widths from the longest sub-line per column, row
//! heights from the tallest cell per row.

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::types::{BorderLine, LayoutResult, Primitive, TextBlock};
use super::wrap::wrap_cell;

use crate::parser::{Block, Row};

/// Horizontal inset between an anchor point and the start of its text.
const TEXT_INSET: f64 = 5.0;

/// Compute the layout for a classified document.
///
/// The cursor starts at 0; an empty block list produces an empty primitive
/// sequence and height 0.
pub fn compute(blocks: &[Block], config: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
    let mut result = LayoutResult::new();

    for block in blocks {
        match block {
            Block::Line(text) => {
                result.primitives.push(Primitive::Text(TextBlock::new(
                    TEXT_INSET,
                    result.height,
                    vec![text.clone()],
                )));
                result.height += config.line_spacing;
            }
            Block::Blank => {
                result.height += config.line_spacing;
            }
            Block::Table(rows) => {
                result.height = layout_table(rows, result.height, config, &mut result.primitives)?;
            }
        }
    }

    Ok(result)
}

/// Wrapped cells plus the column widths derived from them, in one pass.
struct SizedTable {
    wrapped_rows: Vec<Vec<Vec<String>>>,
    col_widths: Vec<f64>,
}

fn size_table(rows: &[Row], config: &LayoutConfig) -> Result<SizedTable, LayoutError> {
    let num_cols = rows
        .iter()
        .map(|row| row.cells.len())
        .max()
        .ok_or(LayoutError::EmptyTable)?;

    let glyph_width = config.glyph_width();
    let mut col_widths = vec![0.0_f64; num_cols];
    let mut wrapped_rows = Vec::with_capacity(rows.len());

    for row in rows {
        let mut wrapped_row = Vec::with_capacity(row.cells.len());
        for (c, cell) in row.cells.iter().enumerate() {
            let lines = wrap_cell(cell, config.max_chars);
            let max_len = lines
                .iter()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0);
            col_widths[c] = col_widths[c].max(max_len as f64 * glyph_width);
            wrapped_row.push(lines);
        }
        wrapped_rows.push(wrapped_row);
    }

    Ok(SizedTable {
        wrapped_rows,
        col_widths,
    })
}

/// Lay out one table block starting at `y_offset`; returns the cursor value
/// after the table (its height plus one line-spacing of breathing room).
fn layout_table(
    rows: &[Row],
    y_offset: f64,
    config: &LayoutConfig,
    primitives: &mut Vec<Primitive>,
) -> Result<f64, LayoutError> {
    let sized = size_table(rows, config)?;

    let row_heights: Vec<f64> = sized
        .wrapped_rows
        .iter()
        .map(|row| {
            let tallest = row.iter().map(|cell| cell.len()).max().unwrap_or(0);
            tallest as f64 * config.line_spacing
        })
        .collect();

    let table_height: f64 = row_heights.iter().sum();
    let table_width: f64 = sized.col_widths.iter().sum::<f64>()
        + config.col_gap * (sized.col_widths.len() as f64 - 1.0);

    // Cell text. Each cell anchors one font-size below its row top so the
    // first sub-line's baseline sits inside the row.
    let mut y_cursor = y_offset;
    for (wrapped_row, row_height) in sized.wrapped_rows.iter().zip(&row_heights) {
        let mut x_cursor = 0.0;
        for (c, cell_lines) in wrapped_row.iter().enumerate() {
            primitives.push(Primitive::Text(TextBlock::new(
                x_cursor + TEXT_INSET,
                y_cursor + config.font_size,
                cell_lines.clone(),
            )));
            x_cursor += sized.col_widths[c] + config.col_gap;
        }
        y_cursor += row_height;
    }

    if config.draw_borders {
        // Horizontal rules at every row boundary, top and bottom included.
        let mut y_cursor = y_offset;
        for row_height in &row_heights {
            primitives.push(Primitive::Border(BorderLine::horizontal(
                0.0,
                table_width,
                y_cursor,
            )));
            y_cursor += row_height;
        }
        primitives.push(Primitive::Border(BorderLine::horizontal(
            0.0,
            table_width,
            y_cursor,
        )));

        // Vertical rules at every column boundary. The walk advances by
        // width + gap after every column, so with a non-zero gap the
        // rightmost rule lands one gap past the horizontal rules.
        let mut x_cursor = 0.0;
        for width in &sized.col_widths {
            primitives.push(Primitive::Border(BorderLine::vertical(
                x_cursor,
                y_offset,
                y_offset + table_height,
            )));
            x_cursor += width + config.col_gap;
        }
        primitives.push(Primitive::Border(BorderLine::vertical(
            x_cursor,
            y_offset,
            y_offset + table_height,
        )));
    }

    Ok(y_offset + table_height + config.line_spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::classify;

    fn config() -> LayoutConfig {
        // Exact binary values keep the position arithmetic exact.
        LayoutConfig::new()
            .with_font_size(10.0)
            .with_line_spacing(10.0)
            .with_width_ratio(0.5)
    }

    fn texts(result: &LayoutResult) -> Vec<&TextBlock> {
        result
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text(t) => Some(t),
                Primitive::Border(_) => None,
            })
            .collect()
    }

    fn borders(result: &LayoutResult) -> Vec<&BorderLine> {
        result
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Border(b) => Some(b),
                Primitive::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_document() {
        let result = compute(&[], &config()).unwrap();
        assert!(result.primitives.is_empty());
        assert_eq!(result.height, 0.0);
    }

    #[test]
    fn test_plain_line_placement() {
        let blocks = classify("Hello World");
        let result = compute(&blocks, &config()).unwrap();

        let texts = texts(&result);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].x, 5.0);
        assert_eq!(texts[0].y, 0.0);
        assert_eq!(texts[0].lines, vec!["Hello World"]);
        assert_eq!(result.height, 10.0);
    }

    #[test]
    fn test_cursor_advances_per_line() {
        let blocks = classify("one\ntwo\nthree");
        let result = compute(&blocks, &config()).unwrap();

        let texts = texts(&result);
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0].y, 0.0);
        assert_eq!(texts[1].y, 10.0);
        assert_eq!(texts[2].y, 20.0);
        assert_eq!(result.height, 30.0);
    }

    #[test]
    fn test_blank_line_consumes_spacing() {
        let blocks = classify("a\n\nb");
        let result = compute(&blocks, &config()).unwrap();

        let texts = texts(&result);
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[1].y, 20.0);
        assert_eq!(result.height, 30.0);
    }

    #[test]
    fn test_table_cell_positions() {
        // 2x2 grid, glyph width 5: both columns are one character wide.
        let blocks = classify("a|b\n1|2");
        let result = compute(&blocks, &config()).unwrap();

        let texts = texts(&result);
        assert_eq!(texts.len(), 4);

        // Cells anchor at (x + 5, y + font_size); column 1 starts at x = 5.
        assert_eq!((texts[0].x, texts[0].y), (5.0, 10.0));
        assert_eq!((texts[1].x, texts[1].y), (10.0, 10.0));
        assert_eq!((texts[2].x, texts[2].y), (5.0, 20.0));
        assert_eq!((texts[3].x, texts[3].y), (10.0, 20.0));
    }

    #[test]
    fn test_border_counts() {
        // R+1 horizontal and C+1 vertical rules.
        let blocks = classify("a|b\n1|2");
        let result = compute(&blocks, &config()).unwrap();

        let borders = borders(&result);
        let horizontal = borders.iter().filter(|b| b.y1 == b.y2).count();
        let vertical = borders.iter().filter(|b| b.x1 == b.x2).count();
        assert_eq!(horizontal, 3);
        assert_eq!(vertical, 3);
    }

    #[test]
    fn test_no_borders_when_disabled() {
        let blocks = classify("a|b");
        let result = compute(&blocks, &config().with_borders(false)).unwrap();
        assert_eq!(result.border_count(), 0);
        assert_eq!(result.text_count(), 2);
    }

    #[test]
    fn test_table_advances_height_plus_spacing() {
        let blocks = classify("a|b");
        let result = compute(&blocks, &config()).unwrap();
        // One row of height 10, plus one line-spacing after the table.
        assert_eq!(result.height, 20.0);
    }

    #[test]
    fn test_column_width_from_widest_cell() {
        // Column 0 content: "a" and "wide" -> 4 chars * 5 = 20 units.
        let blocks = classify("a|b\nwide|c");
        let result = compute(&blocks, &config()).unwrap();

        let texts = texts(&result);
        // Second column of both rows starts after column 0's width.
        assert_eq!(texts[1].x, 25.0);
        assert_eq!(texts[3].x, 25.0);
    }

    #[test]
    fn test_column_width_monotone_in_content() {
        let narrow = compute(&classify("ab|x"), &config()).unwrap();
        let wide = compute(&classify("abcd|x"), &config()).unwrap();

        let narrow_second = texts(&narrow)[1].x;
        let wide_second = texts(&wide)[1].x;
        assert!(wide_second > narrow_second);
    }

    #[test]
    fn test_ragged_rows_use_max_column_count() {
        let blocks = classify("a|b|c\nd|e");
        let result = compute(&blocks, &config()).unwrap();

        assert_eq!(result.text_count(), 5);
        let borders = borders(&result);
        let horizontal = borders.iter().filter(|b| b.y1 == b.y2).count();
        let vertical = borders.iter().filter(|b| b.x1 == b.x2).count();
        assert_eq!(horizontal, 3);
        assert_eq!(vertical, 4);
    }

    #[test]
    fn test_multi_line_cell_grows_row() {
        // Budget 3 splits "aa bb" into two sub-lines; the row doubles.
        let blocks = classify("aa bb|c");
        let result = compute(&blocks, &config().with_max_chars(Some(3))).unwrap();

        let texts = texts(&result);
        assert_eq!(texts[0].lines, vec!["aa", "bb"]);
        // Row height 20, plus spacing 10 after the table.
        assert_eq!(result.height, 30.0);
    }

    #[test]
    fn test_col_gap_spreads_columns() {
        let blocks = classify("a|b");
        let result = compute(&blocks, &config().with_col_gap(4.0)).unwrap();

        let texts = texts(&result);
        // Column 0 width 5, gap 4: column 1 starts at x = 9.
        assert_eq!(texts[1].x, 14.0);
    }

    #[test]
    fn test_col_gap_right_border_trails() {
        let blocks = classify("a|b");
        let result = compute(&blocks, &config().with_col_gap(4.0)).unwrap();

        let borders = borders(&result);
        let verticals: Vec<f64> = borders
            .iter()
            .filter(|b| b.x1 == b.x2)
            .map(|b| b.x1)
            .collect();
        // Widths 5 + 5, gap after each column: 0, 9, 18.
        assert_eq!(verticals, vec![0.0, 9.0, 18.0]);

        // Horizontal rules stop at table width = 5 + 5 + 4.
        let horizontal = borders.iter().find(|b| b.y1 == b.y2).unwrap();
        assert_eq!(horizontal.x2, 14.0);
    }

    #[test]
    fn test_empty_table_is_invariant_violation() {
        let blocks = vec![Block::Table(vec![])];
        let err = compute(&blocks, &config()).unwrap_err();
        assert!(matches!(err, LayoutError::EmptyTable));
    }

    #[test]
    fn test_table_then_line_positions() {
        let blocks = classify("a|b\nafter");
        let result = compute(&blocks, &config()).unwrap();

        let texts = texts(&result);
        // Table occupies 10 + spacing 10; the line lands at y = 20.
        let after = texts.last().unwrap();
        assert_eq!(after.lines, vec!["after"]);
        assert_eq!((after.x, after.y), (5.0, 20.0));
        assert_eq!(result.height, 30.0);
    }

    #[test]
    fn test_single_column_table_has_no_gap() {
        let blocks = classify("only|"); // trailing delimiter, one cell
        let result = compute(&blocks, &config().with_col_gap(4.0)).unwrap();

        let borders = borders(&result);
        let horizontal = borders.iter().find(|b| b.y1 == b.y2).unwrap();
        // One column of 4 chars * 5 units; no gap term for a single column.
        assert_eq!(horizontal.x2, 20.0);
    }
}
