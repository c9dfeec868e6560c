//! Glatte Kurve aus verschiebbaren Ankern.
//!
//! Die Reihenfolge der Anker ist die einzige Topologie-Information: Segment `i`
//! verbindet Anker `i` mit Anker `i + 1` (bei geschlossenen Kurven modulo Anzahl).
//! Jedes Segment ist ein kubisches Bézier, dessen Kontrollpunkte aus den
//! Nachbar-Ankern abgeleitet werden (Cardinal-Spline-Tangenten).

use super::{positive_or, Anchor, LocalFrame, PackedColor};
use crate::shared::geometry::{polyline_self_intersects, CubicSegment};
use crate::shared::options::{CURVE_COLOR, CURVE_THICKNESS};
use crate::shared::CurvePainter;
use glam::Vec2;

/// Kurvenweite Einstellungen, die gemeinsam gesetzt werden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSettings {
    /// Kurve schließt vom letzten zum ersten Anker
    pub is_closed: bool,
    /// Linienstärke
    pub thickness: f32,
    /// Linien- und Ankerfarbe
    pub color: PackedColor,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            is_closed: false,
            thickness: CURVE_THICKNESS,
            color: CURVE_COLOR,
        }
    }
}

/// Geordnete Anker plus Darstellungs-Einstellungen.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    anchors: Vec<Anchor>,
    is_closed: bool,
    thickness: f32,
    color: PackedColor,
}

impl Default for Curve {
    fn default() -> Self {
        Self::from_settings(CurveSettings::default())
    }
}

impl Curve {
    /// Erstellt eine leere Kurve. Eine nicht positive Linienstärke wird
    /// durch die Standard-Stärke ersetzt.
    pub fn new(is_closed: bool, thickness: f32, color: PackedColor) -> Self {
        Self {
            anchors: Vec::new(),
            is_closed,
            thickness: positive_or(thickness, CURVE_THICKNESS),
            color,
        }
    }

    /// Erstellt eine leere Kurve mit den gegebenen Einstellungen
    pub fn from_settings(settings: CurveSettings) -> Self {
        Self::new(settings.is_closed, settings.thickness, settings.color)
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> PackedColor {
        self.color
    }

    /// Aktuelle kurvenweite Einstellungen
    pub fn settings(&self) -> CurveSettings {
        CurveSettings {
            is_closed: self.is_closed,
            thickness: self.thickness,
            color: self.color,
        }
    }

    pub fn set_closed(&mut self, is_closed: bool) {
        self.is_closed = is_closed;
    }

    /// Nicht positive oder nicht endliche Werte lassen die Stärke unverändert.
    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = positive_or(thickness, self.thickness);
    }

    pub fn set_color(&mut self, color: PackedColor) {
        self.color = color;
    }

    /// Übernimmt alle kurvenweiten Einstellungen auf einmal.
    pub fn apply_settings(&mut self, settings: CurveSettings) {
        self.is_closed = settings.is_closed;
        self.set_thickness(settings.thickness);
        self.color = settings.color;
    }

    /// Hängt einen Anker ohne Einfüge-Logik an (Deserialisierung).
    pub fn push_anchor(&mut self, anchor: Anchor) {
        self.anchors.push(anchor);
    }

    /// Fügt einen neuen Anker so ein, dass die Kurve zusammenhängend bleibt.
    ///
    /// Liegt `point` höchstens `threshold` von einem abgetasteten Kurvenpunkt
    /// entfernt, landet der Anker hinter dem Segment mit dem nächsten Punkt.
    /// Sonst wird er vorne oder hinten angefügt, je nachdem welcher Endanker
    /// näher liegt. Gibt den Einfüge-Index zurück.
    pub fn add_point(&mut self, point: Vec2, threshold: f32, radius: f32, color: PackedColor) -> usize {
        let count = self.anchors.len();
        if count < 2 {
            self.anchors.push(Anchor::new(point, radius, color));
            return count;
        }

        let mut insert_index = count;
        let mut min_distance = f32::MAX;

        for (i, segment) in self.segments().enumerate() {
            for sample in segment.samples() {
                let distance = point.distance(sample);
                if distance < min_distance {
                    min_distance = distance;
                    if min_distance <= threshold {
                        insert_index = i + 1;
                    }
                }
            }
        }

        // Kein Segment nah genug: am näheren Ende verlängern
        if min_distance > threshold {
            let to_first = point.distance(self.anchors[0].position());
            let to_last = point.distance(self.anchors[count - 1].position());
            insert_index = if to_first < to_last { 0 } else { count };
        }

        self.anchors
            .insert(insert_index, Anchor::new(point, radius, color));
        log::debug!(
            "Anker bei ({:.1}, {:.1}) an Index {} eingefügt (Abstand {:.1})",
            point.x,
            point.y,
            insert_index,
            min_distance
        );
        insert_index
    }

    /// Entfernt den Anker an `index`. Ungültige Indizes werden ignoriert.
    pub fn delete_point(&mut self, index: usize) -> Option<Anchor> {
        if index < self.anchors.len() {
            Some(self.anchors.remove(index))
        } else {
            None
        }
    }

    /// Entfernt alle Anker.
    pub fn clear(&mut self) {
        self.anchors.clear();
    }

    /// Index des ersten Ankers, der strikt näher als `pick_radius` an `point` liegt.
    pub fn anchor_at(&self, point: Vec2, pick_radius: f32) -> Option<usize> {
        self.anchors
            .iter()
            .position(|anchor| anchor.contains(point, pick_radius))
    }

    /// Anzahl der Segmente: offen `n - 1`, geschlossen `n`, unter zwei Ankern `0`.
    pub fn segment_count(&self) -> usize {
        match self.anchors.len() {
            0 | 1 => 0,
            n if self.is_closed => n,
            n => n - 1,
        }
    }

    /// Kontrollpunkte `(cp1, cp2)` für Segment `index`.
    ///
    /// Tangenten aus den Nachbar-Ankern `p0..p3`; die Kontrollpunkte liegen
    /// ein Viertel der jeweiligen Sehnenlänge entlang der Tangente. An den
    /// Enden einer offenen Kurve wird der fehlende Nachbar durch den
    /// Endanker ersetzt.
    pub fn control_points(&self, index: usize) -> Option<(Vec2, Vec2)> {
        if index >= self.segment_count() {
            return None;
        }
        let n = self.anchors.len();
        let pos = |i: usize| self.anchors[i % n].position();

        let mut p0 = pos(n + index - 1);
        let p1 = pos(index);
        let p2 = pos(index + 1);
        let mut p3 = pos(index + 2);

        if !self.is_closed {
            if index == 0 {
                p0 = p1;
            }
            if index == n - 2 {
                p3 = p2;
            }
        }

        // normalize_or_zero: zusammenfallende Anker ergeben Null statt NaN
        let tangent1 = ((p2 - p0) * 0.5).normalize_or_zero();
        let tangent2 = ((p3 - p1) * 0.5).normalize_or_zero();

        let cp1 = p1 + tangent1 * (p1.distance(p0) / 4.0);
        let cp2 = p2 - tangent2 * (p2.distance(p1) / 4.0);
        Some((cp1, cp2))
    }

    /// Segment `index` als kubisches Bézier (lokale Koordinaten).
    pub fn segment(&self, index: usize) -> Option<CubicSegment> {
        let (cp1, cp2) = self.control_points(index)?;
        let n = self.anchors.len();
        Some(CubicSegment::new(
            self.anchors[index].position(),
            cp1,
            cp2,
            self.anchors[(index + 1) % n].position(),
        ))
    }

    /// Alle Segmente in Zeichenreihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        (0..self.segment_count()).filter_map(move |i| self.segment(i))
    }

    /// Abgetastete Kurve als zusammenhängende Polyline.
    ///
    /// Aufeinanderfolgende identische Punkte (Segment-Übergänge) werden
    /// zusammengefasst. Eine geschlossene Kurve endet wieder im Startpunkt.
    pub fn sampled_polyline(&self) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = self.segments().flat_map(CubicSegment::samples).collect();
        points.dedup();
        points
    }

    /// Prüft ob die gezeichnete Kurve sich selbst schneidet oder berührt.
    ///
    /// Aufwand quadratisch in der Anzahl der Abtastpunkte.
    pub fn is_self_intersecting(&self) -> bool {
        if self.anchors.len() < 3 {
            return false;
        }
        let polyline = self.sampled_polyline();
        let wraps = self.is_closed && polyline.len() > 2 && polyline.first() == polyline.last();
        polyline_self_intersects(&polyline, wraps)
    }

    /// Zeichnet Kurve und (im Edit-Modus) die Anker inkl. Drag-Handling.
    ///
    /// Im Edit-Modus übernehmen alle Anker die Kurvenfarbe. Ein aktives Handle
    /// verschiebt seinen Anker, begrenzt auf die Frame-Größe.
    /// Gibt `true` zurück, wenn sich ein Anker bewegt hat.
    pub fn draw(&mut self, painter: &mut dyn CurvePainter, frame: &LocalFrame, editable: bool) -> bool {
        let mut moved = false;

        if editable {
            let color = self.color;
            for (index, anchor) in self.anchors.iter_mut().enumerate() {
                anchor.set_color(color);
                let center = frame.to_screen(anchor.position());
                let extent = Vec2::splat(anchor.radius());

                let handle = painter.drag_handle(index, center - extent, center + extent);
                painter.fill_circle(center, anchor.radius(), anchor.color());

                if handle.dragging && handle.delta != Vec2::ZERO {
                    anchor.drag(handle.delta, frame.size);
                    moved = true;
                }
            }
        }

        if self.anchors.len() < 2 {
            return moved;
        }

        for segment in self.segments() {
            painter.stroke_cubic(segment.translated(frame.origin), self.color, self.thickness);
        }
        moved
    }

    /// Kodiert die Kurve als eine Textzeile (siehe `codec`).
    pub fn serialize(&self) -> String {
        crate::codec::write_curve_line(self)
    }

    /// Dekodiert eine Kurve aus einer Textzeile (siehe `codec`).
    pub fn deserialize(line: &str) -> anyhow::Result<Self> {
        crate::codec::parse_curve_line(line)
    }
}

#[cfg(test)]
mod tests;
