//! Use-Case: Kurvenauswahl und Edit-Modus.

use crate::app::AppState;

/// Selektiert eine Kurve. Indizes außerhalb der Liste werden verworfen.
pub fn select_curve(state: &mut AppState, index: Option<usize>) {
    match index {
        Some(i) if i >= state.curves.len() => {
            log::warn!("Kurve {} existiert nicht ({} Kurven)", i, state.curves.len());
        }
        _ => state.selected_curve = index,
    }
}

/// Setzt den Edit-Modus; ohne gültige Selektion bleibt er aus.
pub fn set_edit_mode(state: &mut AppState, enabled: bool) {
    state.edit_mode = enabled && state.selected().is_some();
    log::debug!("Edit-Modus: {}", state.edit_mode);
}
