//! Verschiebbarer Kontrollpunkt einer Kurve.

use super::{positive_or, PackedColor};
use crate::shared::options::ANCHOR_RADIUS;
use glam::Vec2;

/// Ein Anker: Position im lokalen Frame der Kurve, Radius, Farbe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    position: Vec2,
    radius: f32,
    color: PackedColor,
}

impl Anchor {
    /// Erstellt einen neuen Anker. Ein nicht positiver Radius wird durch
    /// den Standard-Radius ersetzt.
    pub fn new(position: Vec2, radius: f32, color: PackedColor) -> Self {
        Self {
            position,
            radius: positive_or(radius, ANCHOR_RADIUS),
            color,
        }
    }

    /// Position im lokalen Frame
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Darstellungs- und Hitbox-Radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Füllfarbe
    pub fn color(&self) -> PackedColor {
        self.color
    }

    pub fn set_color(&mut self, color: PackedColor) {
        self.color = color;
    }

    /// Verschiebt den Anker um `delta` und klemmt das Ergebnis auf `[0, frame_size]`.
    ///
    /// Deltas werden nie abgelehnt, nur begrenzt. Eine negative Frame-Größe
    /// zählt als Null.
    pub fn drag(&mut self, delta: Vec2, frame_size: Vec2) {
        let max = frame_size.max(Vec2::ZERO);
        self.position = (self.position + delta).clamp(Vec2::ZERO, max);
    }

    /// Prüft ob `point` innerhalb von `pick_radius` um den Anker liegt (strikt).
    pub fn contains(&self, point: Vec2, pick_radius: f32) -> bool {
        self.position.distance(point) < pick_radius
    }
}
