//! Use-Case: Anker einfügen und löschen.

use crate::app::AppState;
use glam::Vec2;

/// Fügt einen Anker an der lokalen Position in Kurve `curve_index` ein.
///
/// Radius, Farbe und Einfüge-Schwelle kommen aus den Editor-Optionen.
pub fn add_anchor(state: &mut AppState, curve_index: usize, position: Vec2) {
    let threshold = state.options.insert_threshold;
    let radius = state.options.anchor_radius;
    let color = state.options.anchor_color;

    let Some(curve) = state.curves.get_mut(curve_index) else {
        log::warn!("Kein Anker hinzufügbar: Kurve {} existiert nicht", curve_index);
        return;
    };

    let index = curve.add_point(position, threshold, radius, color);
    log::info!(
        "Kurve {}: Anker {} bei ({:.1}, {:.1}) hinzugefügt",
        curve_index,
        index,
        position.x,
        position.y
    );
}

/// Entfernt Anker `index` aus Kurve `curve_index`. Ungültige Indizes sind ein No-op.
pub fn delete_anchor(state: &mut AppState, curve_index: usize, index: usize) {
    let Some(curve) = state.curves.get_mut(curve_index) else {
        log::warn!("Kein Anker löschbar: Kurve {} existiert nicht", curve_index);
        return;
    };

    match curve.delete_point(index) {
        Some(anchor) => log::info!(
            "Kurve {}: Anker {} bei ({:.1}, {:.1}) gelöscht",
            curve_index,
            index,
            anchor.position().x,
            anchor.position().y
        ),
        None => log::debug!("Kurve {}: kein Anker {} zum Löschen", curve_index, index),
    }
}
