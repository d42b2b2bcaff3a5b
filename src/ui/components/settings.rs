//! Settings form overlay renderer.
//!
//! This module renders the single-field theme form (day/night choice) inside
//! a bordered box layered over the card list.

use crate::ui::components::boxes::{render_box_bottom, render_box_text, render_box_top};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SettingsOverlayInfo;

/// Horizontal margin around the settings box.
const SETTINGS_BOX_MARGIN: usize = 12;

/// First row of the settings box (1-indexed).
const SETTINGS_BOX_TOP: usize = 6;

/// Renders the settings form overlay.
///
/// Displays the drafted theme choice with cycle hints:
///
/// ```text
/// [margin] ┌───────────────────────┐ [margin]
/// [margin] │ ▸ Theme:  Night (j/k) │ [margin]
/// [margin] └───────────────────────┘ [margin]
/// ```
///
/// # Parameters
///
/// * `settings` - Settings overlay display information
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
pub fn render_settings_overlay(settings: &SettingsOverlayInfo, theme: &Theme, cols: usize) {
    let inner_width = cols.saturating_sub(SETTINGS_BOX_MARGIN * 2 + 2);
    let border = &theme.colors.overlay_border;

    let choice_row = format!(" \u{25b8} Theme:  {} (j/k)", settings.theme_label);

    let mut row = render_box_top(SETTINGS_BOX_TOP, SETTINGS_BOX_MARGIN, inner_width, border);
    row = render_box_text(row, SETTINGS_BOX_MARGIN, inner_width, border, theme, &choice_row);
    render_box_bottom(row, SETTINGS_BOX_MARGIN, inner_width, border);
}
