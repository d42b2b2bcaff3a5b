//! Shared bordered-box drawing for overlay components.
//!
//! The search, settings, and detail overlays all render as a bordered box
//! layered over the card list. These helpers draw the box line by line so
//! each overlay only supplies its content rows.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Renders the top border `┌───┐` at the given row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_box_top(row: usize, left: usize, inner_width: usize, color: &str) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(left));
    print!("{}", Theme::fg(color));
    print!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a side-bordered content line `│ text │` at the given row.
///
/// Text longer than the inner width is truncated; shorter text is padded so
/// the box edge stays aligned.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_box_text(
    row: usize,
    left: usize,
    inner_width: usize,
    color: &str,
    theme: &Theme,
    text: &str,
) -> usize {
    let shown: String = text.chars().take(inner_width).collect();
    let padding = inner_width.saturating_sub(shown.chars().count());

    position_cursor(row, 1);
    print!("{}", " ".repeat(left));
    print!("{}", Theme::fg(color));
    print!("\u{2502}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(color));
    print!("\u{2502}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the bottom border `└───┘` at the given row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_box_bottom(row: usize, left: usize, inner_width: usize, color: &str) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(left));
    print!("{}", Theme::fg(color));
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());
    row + 1
}
