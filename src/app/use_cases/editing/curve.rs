//! Use-Case: Kurvenweite Einstellungen und Leeren.

use crate::app::AppState;
use crate::core::CurveSettings;

/// Übernimmt die Einstellungen; die Linienstärke wird auf den Slider-Bereich geklemmt.
pub fn apply_curve_settings(state: &mut AppState, curve_index: usize, settings: CurveSettings) {
    let bounds = state.options.thickness_bounds();
    let Some(curve) = state.curves.get_mut(curve_index) else {
        log::warn!("Einstellungen verworfen: Kurve {} existiert nicht", curve_index);
        return;
    };

    let thickness = if settings.thickness.is_finite() {
        settings.thickness.clamp(*bounds.start(), *bounds.end())
    } else {
        curve.thickness()
    };

    curve.apply_settings(CurveSettings {
        thickness,
        ..settings
    });
}

/// Entfernt alle Anker der Kurve.
pub fn clear_curve(state: &mut AppState, curve_index: usize) {
    if let Some(curve) = state.curves.get_mut(curve_index) {
        let removed = curve.len();
        curve.clear();
        log::info!("Kurve {} geleert ({} Anker entfernt)", curve_index, removed);
    }
}
