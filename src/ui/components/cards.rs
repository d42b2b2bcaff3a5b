//! Preview card list renderer.
//!
//! This module renders the revealed slice of the match set as a two-column
//! list with TITLE and AUTHOR columns. It supports selection highlighting and
//! title match highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Fixed width of the TITLE column, including trailing gap.
const TITLE_COLUMN_WIDTH: usize = 37;

/// Renders the card column headers at the specified row.
///
/// Displays "TITLE" and "AUTHOR" column headers with bold styling and theme
/// colors.
///
/// # Parameters
///
/// * `row` - Row position to render the headers (1-indexed)
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_card_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<width$} AUTHOR", "TITLE", width = TITLE_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all visible cards starting at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position (1-indexed)
/// * `cards` - Windowed card items to render
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns (for padding)
///
/// # Returns
///
/// The next available row position (row + number of cards)
pub fn render_cards(row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single preview card at the specified row position.
///
/// Displays one book with the TITLE column (fixed width, left-aligned), the
/// AUTHOR column (remaining width), selection highlighting (full row
/// background), and title match highlighting (character ranges). The row is
/// padded to fill the entire terminal width so the selection background is
/// continuous.
fn render_card(row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if card.highlight_ranges.is_empty() {
        print!("{}", card.title);
    } else {
        helpers::render_highlighted_text(
            &card.title,
            &card.highlight_ranges,
            theme,
            card.is_selected,
        );
    }

    let title_len = card.title.chars().count();
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));

    print!(" {}", card.author);

    let line_len = TITLE_COLUMN_WIDTH + 1 + card.author.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
