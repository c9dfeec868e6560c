//! Handler für Anker-Editing, Kurvenauswahl und Kurven-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveSettings;
use glam::Vec2;

/// Fügt einen Anker an der lokalen Position ein.
pub fn add_anchor(state: &mut AppState, curve: usize, position: Vec2) {
    use_cases::editing::add_anchor(state, curve, position);
}

/// Entfernt einen Anker.
pub fn delete_anchor(state: &mut AppState, curve: usize, index: usize) {
    use_cases::editing::delete_anchor(state, curve, index);
}

pub fn select_curve(state: &mut AppState, index: Option<usize>) {
    use_cases::editing::select_curve(state, index);
}

pub fn set_edit_mode(state: &mut AppState, enabled: bool) {
    use_cases::editing::set_edit_mode(state, enabled);
}

/// Übernimmt kurvenweite Einstellungen.
pub fn apply_curve_settings(state: &mut AppState, curve: usize, settings: CurveSettings) {
    use_cases::editing::apply_curve_settings(state, curve, settings);
}

/// Leert eine Kurve.
pub fn clear_curve(state: &mut AppState, curve: usize) {
    use_cases::editing::clear_curve(state, curve);
}
