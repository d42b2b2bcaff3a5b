//! Search form overlay renderer.
//!
//! This module renders the three-field filter form (title text, author
//! select, genre select) inside a bordered box layered over the card list.
//! The focused row carries a marker; select rows show the chosen display
//! name, never raw ids.

use crate::ui::components::boxes::{render_box_bottom, render_box_text, render_box_top};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldFocus, SearchOverlayInfo};

/// Horizontal margin around the search box.
const SEARCH_BOX_MARGIN: usize = 8;

/// First row of the search box (1-indexed).
const SEARCH_BOX_TOP: usize = 6;

/// Renders the search form overlay.
///
/// Layout:
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ ▸ Title:  dune       │ [margin]
/// [margin] │   Author: All Authors│ [margin]
/// [margin] │   Genre:  Fantasy    │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// The focused field carries the `▸` marker. Borders use the theme's
/// `overlay_border` color; field text uses `text_normal`.
///
/// # Parameters
///
/// * `search` - Search overlay display information
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
pub fn render_search_overlay(search: &SearchOverlayInfo, theme: &Theme, cols: usize) {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = &theme.colors.overlay_border;

    let title_row = field_line(
        search.focus == FieldFocus::Title,
        "Title: ",
        &search.title_text,
    );
    let author_row = field_line(
        search.focus == FieldFocus::Author,
        "Author:",
        &search.author_label,
    );
    let genre_row = field_line(
        search.focus == FieldFocus::Genre,
        "Genre: ",
        &search.genre_label,
    );

    let mut row = render_box_top(SEARCH_BOX_TOP, SEARCH_BOX_MARGIN, inner_width, border);
    row = render_box_text(row, SEARCH_BOX_MARGIN, inner_width, border, theme, &title_row);
    row = render_box_text(row, SEARCH_BOX_MARGIN, inner_width, border, theme, &author_row);
    row = render_box_text(row, SEARCH_BOX_MARGIN, inner_width, border, theme, &genre_row);
    render_box_bottom(row, SEARCH_BOX_MARGIN, inner_width, border);
}

fn field_line(focused: bool, label: &str, value: &str) -> String {
    let marker = if focused { '\u{25b8}' } else { ' ' };
    format!(" {marker} {label} {value}")
}
