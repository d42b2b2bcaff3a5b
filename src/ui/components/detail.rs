//! Book detail overlay renderer.
//!
//! This module renders the detail view for a selected book: title, author and
//! publication year, wrapped description, genre list, and the cover image URL,
//! inside a bordered box layered over the card list.

use crate::ui::components::boxes::{render_box_bottom, render_box_text, render_box_top};
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Horizontal margin around the detail box.
const DETAIL_BOX_MARGIN: usize = 6;

/// First row of the detail box (1-indexed).
const DETAIL_BOX_TOP: usize = 4;

/// Rows of chrome around the description inside the box: borders, title,
/// subtitle, two blank separators, genres, and image lines.
const DETAIL_CHROME_ROWS: usize = 8;

/// Renders the book detail overlay.
///
/// Layout:
///
/// ```text
/// ┌─────────────────────────────────┐
/// │ Dune Messiah                    │
/// │ Frank Herbert (1969)            │
/// │                                 │
/// │ Twelve years after his victory, │
/// │ Paul Atreides rules as emperor… │
/// │                                 │
/// │ Genres: Science Fiction         │
/// │ Cover:  https://…               │
/// └─────────────────────────────────┘
/// ```
///
/// The description is word-wrapped to the box width and truncated to the
/// rows the terminal can fit.
///
/// # Parameters
///
/// * `detail` - Detail overlay display information
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_detail_overlay(detail: &DetailInfo, theme: &Theme, cols: usize, rows: usize) {
    let inner_width = cols.saturating_sub(DETAIL_BOX_MARGIN * 2 + 2);
    let text_width = inner_width.saturating_sub(2);
    let border = &theme.colors.overlay_border;

    let max_description_rows = rows
        .saturating_sub(DETAIL_BOX_TOP + DETAIL_CHROME_ROWS + 2)
        .max(1);
    let mut description = wrap_text(&detail.description, text_width);
    description.truncate(max_description_rows);

    let mut row = render_box_top(DETAIL_BOX_TOP, DETAIL_BOX_MARGIN, inner_width, border);
    row = render_box_text(
        row,
        DETAIL_BOX_MARGIN,
        inner_width,
        border,
        theme,
        &format!(" {}", detail.title),
    );
    row = render_box_text(
        row,
        DETAIL_BOX_MARGIN,
        inner_width,
        border,
        theme,
        &format!(" {}", detail.subtitle),
    );
    row = render_box_text(row, DETAIL_BOX_MARGIN, inner_width, border, theme, "");

    for line in &description {
        row = render_box_text(
            row,
            DETAIL_BOX_MARGIN,
            inner_width,
            border,
            theme,
            &format!(" {line}"),
        );
    }

    row = render_box_text(row, DETAIL_BOX_MARGIN, inner_width, border, theme, "");
    row = render_box_text(
        row,
        DETAIL_BOX_MARGIN,
        inner_width,
        border,
        theme,
        &format!(" Genres: {}", detail.genres),
    );
    row = render_box_text(
        row,
        DETAIL_BOX_MARGIN,
        inner_width,
        border,
        theme,
        &format!(" Cover:  {}", detail.image),
    );
    render_box_bottom(row, DETAIL_BOX_MARGIN, inner_width, border);
}
