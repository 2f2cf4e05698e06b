//! Reusable document components: info boxes, zebra tables, highlight boxes.

use crate::models::TierRow;

use super::layout::{Align, BREAK_LIMIT, Color, LayoutEngine, MARGIN, color};
use super::metrics::{FontFace, text_height};

const BODY_SIZE: f64 = 10.0;

/// One label/value pair of a two-column info box.
#[derive(Debug, Clone)]
pub struct InfoCell {
    /// Bold label on the left of the column.
    pub label: String,
    /// Value text; absent values render as `-`.
    pub value: Option<String>,
}

impl InfoCell {
    /// Creates a cell from a label and an optional value.
    pub fn new(label: impl Into<String>, value: Option<String>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    fn value_text(&self) -> &str {
        match self.value.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => "-",
        }
    }
}

/// Draws two independent label/value lists side by side in one shaded,
/// bordered block.
///
/// Each row's height is the maximum of the corresponding row's height in
/// either column, so uneven text lengths never misalign.
pub(crate) fn two_column_info(engine: &mut LayoutEngine, left: &[InfoCell], right: &[InfoCell]) {
    let start_x = MARGIN;
    let max_w = engine.content_width();
    let gap = 18.0;
    let col_w = (max_w - gap) / 2.0;
    let pad_x = 10.0;
    let pad_y = 8.0;
    let label_left_w = 120.0;
    let label_right_w = 140.0;
    let value_left_w = col_w - 132.0;
    let value_right_w = col_w - 152.0;

    let rows = left.len().max(right.len());
    let row_height = |l: Option<&InfoCell>, r: Option<&InfoCell>| -> f64 {
        let mut h: f64 = 16.0;
        if let Some(cell) = l {
            h = h
                .max(text_height(FontFace::Bold, &cell.label, BODY_SIZE, label_left_w))
                .max(text_height(
                    FontFace::Regular,
                    cell.value_text(),
                    BODY_SIZE,
                    value_left_w,
                ));
        }
        if let Some(cell) = r {
            h = h
                .max(text_height(FontFace::Bold, &cell.label, BODY_SIZE, label_right_w))
                .max(text_height(
                    FontFace::Regular,
                    cell.value_text(),
                    BODY_SIZE,
                    value_right_w,
                ));
        }
        (h + 2.0).ceil()
    };

    let row_heights: Vec<f64> = (0..rows)
        .map(|i| row_height(left.get(i), right.get(i)))
        .collect();
    let box_h = row_heights.iter().sum::<f64>() + pad_y * 2.0;

    engine.ensure_room(box_h + 14.0);
    let y = engine.cursor();

    engine.fill_rect(start_x, y, max_w, box_h, color::SHADE);
    engine.stroke_rect(start_x, y, max_w, box_h, 1.0, color::BORDER);

    let right_x = start_x + col_w + gap;
    let mut cy = y + pad_y;
    for i in 0..rows {
        if let Some(cell) = left.get(i) {
            engine.text_block(
                FontFace::Bold,
                BODY_SIZE,
                color::INK,
                start_x + pad_x,
                cy,
                label_left_w,
                Align::Left,
                &cell.label,
            );
            engine.text_block(
                FontFace::Regular,
                BODY_SIZE,
                color::INK,
                start_x + pad_x + 122.0,
                cy,
                value_left_w,
                Align::Left,
                cell.value_text(),
            );
        }
        if let Some(cell) = right.get(i) {
            engine.text_block(
                FontFace::Bold,
                BODY_SIZE,
                color::INK,
                right_x + pad_x,
                cy,
                label_right_w,
                Align::Left,
                &cell.label,
            );
            engine.text_block(
                FontFace::Regular,
                BODY_SIZE,
                color::INK,
                right_x + pad_x + 142.0,
                cy,
                value_right_w,
                Align::Left,
                cell.value_text(),
            );
        }
        cy += row_heights[i];
    }

    engine.set_cursor(y + box_h + 14.0);
}

/// Draws a three-column zebra table.
///
/// The header row uses the accent background with reversed text; body rows
/// alternate two shades unless `row_fill` overrides the background. A row
/// that would cross the reserved bottom margin breaks the page, re-emitting
/// the page header and the table header row.
pub(crate) fn zebra_table<F>(
    engine: &mut LayoutEngine,
    columns: [&str; 3],
    rows: &[TierRow],
    row_fill: F,
) where
    F: Fn(&TierRow, usize) -> Option<Color>,
{
    let start_x = MARGIN;
    let table_w = engine.content_width();
    let col_w = [0.36 * table_w, 0.42 * table_w, 0.22 * table_w];
    let header_h = 22.0;
    let pad_x = 8.0;
    let pad_y = 6.0;

    let draw_header_row = |engine: &mut LayoutEngine, y: f64| {
        engine.fill_rect(start_x, y, table_w, header_h, color::PRIMARY);
        engine.text_block(
            FontFace::Bold,
            BODY_SIZE,
            color::WHITE,
            start_x + pad_x,
            y + pad_y,
            col_w[0] - pad_x * 2.0,
            Align::Left,
            columns[0],
        );
        engine.text_block(
            FontFace::Bold,
            BODY_SIZE,
            color::WHITE,
            start_x + col_w[0] + pad_x,
            y + pad_y,
            col_w[1] - pad_x * 2.0,
            Align::Left,
            columns[1],
        );
        engine.text_block(
            FontFace::Bold,
            BODY_SIZE,
            color::WHITE,
            start_x + col_w[0] + col_w[1] + pad_x,
            y + pad_y,
            col_w[2] - pad_x * 2.0,
            Align::Right,
            columns[2],
        );
    };

    let row_height = |row: &TierRow| -> f64 {
        let h0 = text_height(FontFace::Regular, &row.label, BODY_SIZE, col_w[0] - pad_x * 2.0);
        let h1 = text_height(
            FontFace::Regular,
            &row.description,
            BODY_SIZE,
            col_w[1] - pad_x * 2.0,
        );
        let h2 = text_height(FontFace::Bold, &row.amount, BODY_SIZE, col_w[2] - pad_x * 2.0);
        let content_h = h0.max(h1).max(h2);
        (content_h + pad_y * 2.0).ceil().max(22.0)
    };

    engine.ensure_room(header_h + 22.0);
    let header_y = engine.cursor();
    draw_header_row(engine, header_y);
    let mut y = header_y + header_h;

    for (idx, row) in rows.iter().enumerate() {
        let rh = row_height(row);

        if y + rh > BREAK_LIMIT {
            engine.new_page();
            let new_header_y = engine.cursor();
            draw_header_row(engine, new_header_y);
            y = new_header_y + header_h;
        }

        let alternate = if idx % 2 == 0 { color::WHITE } else { color::SHADE };
        let fill = row_fill(row, idx).unwrap_or(alternate);
        engine.fill_rect(start_x, y, table_w, rh, fill);

        engine.text_block(
            FontFace::Regular,
            BODY_SIZE,
            color::INK,
            start_x + pad_x,
            y + pad_y,
            col_w[0] - pad_x * 2.0,
            Align::Left,
            &row.label,
        );
        engine.text_block(
            FontFace::Regular,
            BODY_SIZE,
            color::INK,
            start_x + col_w[0] + pad_x,
            y + pad_y,
            col_w[1] - pad_x * 2.0,
            Align::Left,
            &row.description,
        );
        engine.text_block(
            FontFace::Bold,
            BODY_SIZE,
            color::INK,
            start_x + col_w[0] + col_w[1] + pad_x,
            y + pad_y,
            col_w[2] - pad_x * 2.0,
            Align::Right,
            &row.amount,
        );

        y += rh;
    }

    engine.set_cursor(y + 12.0);
}

/// Draws a bordered, shaded box with a bold title and wrapped body lines.
pub(crate) fn highlight_box(engine: &mut LayoutEngine, title: &str, lines: &[String]) {
    let start_x = MARGIN;
    let max_w = engine.content_width();
    let pad_x = 12.0;
    let pad_y = 10.0;
    let inner_w = max_w - pad_x * 2.0;

    let title_h = text_height(FontFace::Bold, title, 11.0, inner_w);
    let lines_h: f64 = lines
        .iter()
        .map(|line| text_height(FontFace::Regular, line, BODY_SIZE, inner_w))
        .sum();
    let box_h = pad_y + title_h + 8.0 + lines_h + pad_y;

    engine.ensure_room(box_h + 14.0);
    let y = engine.cursor();

    engine.fill_rect(start_x, y, max_w, box_h, color::SHADE);
    engine.stroke_rect(start_x, y, max_w, box_h, 1.0, color::BORDER);

    let mut cy = y + pad_y;
    engine.text_block(
        FontFace::Bold,
        11.0,
        color::INK,
        start_x + pad_x,
        cy,
        inner_w,
        Align::Left,
        title,
    );
    cy += title_h + 8.0;

    for line in lines {
        let h = engine.text_block(
            FontFace::Regular,
            BODY_SIZE,
            color::INK,
            start_x + pad_x,
            cy,
            inner_w,
            Align::Left,
            line,
        );
        cy += h;
    }

    engine.set_cursor(y + box_h + 14.0);
}
