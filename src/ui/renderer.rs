//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It draws the base
//! browse layout first and layers the open overlay, if any, on top.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! All state decisions happen in step 1; the renderer only projects the view
//! model onto the terminal.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the browser UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// component renderers. Prints ANSI-styled output via `print!`; the terminal
/// host owns screen clearing and flushing.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model: base layout, then the open overlay.
///
/// At most one of the overlay models is present; drawing it after the base
/// layout overwrites the card region underneath, which is how the overlay
/// appears on top.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_base(vm, theme, cols, rows);

    if let Some(search) = &vm.search_overlay {
        components::render_search_overlay(search, theme, cols);
    } else if let Some(settings) = &vm.settings_overlay {
        components::render_settings_overlay(settings, theme, cols);
    } else if let Some(detail) = &vm.detail_overlay {
        components::render_detail_overlay(detail, theme, cols, rows);
    }
}
