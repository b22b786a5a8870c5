//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output positioned with absolute cursor moves. Does not
/// clear the screen; Zellij hands the plugin a fresh frame on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();

    let _span = tracing::trace_span!("render", rows, cols, row_count = viewmodel.rows.len()).entered();
    components::render_table_screen(&viewmodel, &state.theme, cols, rows);
}
