//! Zeichen-Vertrag zwischen Kurven-Kern und Render-Backend.
//!
//! Der Kern erzeugt nur Zeichenaufträge in Screen-Koordinaten; Rasterisierung
//! und Eingabe-Handling übernimmt die Implementierung (z.B. egui im `ui`-Modul).

use super::geometry::CubicSegment;
use crate::core::PackedColor;
use glam::Vec2;

/// Zustand eines Drag-Handles im aktuellen Frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleResponse {
    /// Handle ist aktiv und wird gezogen
    pub dragging: bool,
    /// Zeiger-Delta seit dem letzten Frame (Screen-Pixel)
    pub delta: Vec2,
}

/// Render-Backend für Kurven und Anker.
pub trait CurvePainter {
    /// Zeichnet ein kubisches Segment (Screen-Koordinaten).
    fn stroke_cubic(&mut self, segment: CubicSegment, color: PackedColor, thickness: f32);

    /// Zeichnet einen gefüllten Kreis (Screen-Koordinaten).
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: PackedColor);

    /// Legt ein interaktives Drag-Handle über das Rechteck `min..max` an.
    ///
    /// `index` identifiziert den Anker innerhalb der Kurve über mehrere Frames.
    fn drag_handle(&mut self, index: usize, min: Vec2, max: Vec2) -> HandleResponse;
}
