//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different UI
//! elements, following a component-based architecture. Each component is
//! responsible for one part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with match count
//! - [`footer`]: Keybinding hints
//! - [`cards`]: Preview card list with TITLE and AUTHOR columns
//! - [`show_more`]: Pagination control with remaining count
//! - [`empty`]: "No results" message
//! - [`search`]: Search form overlay (title, author, genre fields)
//! - [`settings`]: Theme form overlay
//! - [`detail`]: Book detail overlay
//! - [`boxes`]: Shared bordered-box drawing for the overlays
//!
//! # Layout
//!
//! [`render_base`] draws the browse layout (header, card list or empty state,
//! "show more" control, footer); the renderer then layers whichever overlay
//! is open on top.

mod boxes;
mod cards;
mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod settings;
mod show_more;

pub use detail::render_detail_overlay;
pub use empty::render_empty_state;
pub use search::render_search_overlay;
pub use settings::render_settings_overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use cards::{render_card_headers, render_cards};
use footer::render_footer;
use header::render_header;
use show_more::render_show_more;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/list, list/footer).
///
/// # Parameters
///
/// * `row` - Row position to render the border (1-indexed)
/// * `color` - Hex color for the border
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the base browse layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Column Headers]
/// [Cards | No-results message]
/// [Show more control]
/// [Border]
/// [Footer]
/// ```
///
/// # Parameters
///
/// * `vm` - View model with cards and chrome data
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
///
/// # Line Accounting
///
/// Reserves 8 lines for chrome; the card window computed by the controller
/// fits the remaining space.
pub fn render_base(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, cols);
    } else {
        current_row = render_card_headers(current_row, theme);
        let _current_row = render_cards(current_row, &vm.cards, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let show_more_row = border_row.saturating_sub(1);

    render_show_more(show_more_row, &vm.show_more, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
