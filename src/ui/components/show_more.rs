//! "Show more" pagination control renderer.
//!
//! This module renders the control that reveals the next page of results,
//! including the remaining-count label. The control is drawn dimmed while
//! disabled; enablement itself is decided by the controller.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ShowMoreInfo;

/// Renders the "show more" control at the specified row.
///
/// Displays `Show more (N)` where N is the number of unrevealed matches,
/// centered horizontally. While enabled the label uses the theme's control
/// color; once the match set is exhausted it is drawn dimmed to signal that
/// activation is ignored.
///
/// # Parameters
///
/// * `row` - Row position to render the control (1-indexed)
/// * `show_more` - Control state (remaining count, enabled flag)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_show_more(row: usize, show_more: &ShowMoreInfo, theme: &Theme, cols: usize) -> usize {
    let label = format!("Show more ({})", show_more.remaining);
    let label_len = label.chars().count();
    let padding = (cols.saturating_sub(label_len)) / 2;

    position_cursor(row, 1);
    if show_more.enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.show_more_fg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.show_more_disabled_fg));
    }

    print!("{}", " ".repeat(padding));
    print!("{label}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + label_len)));
    print!("{}", Theme::reset());
    row + 1
}
