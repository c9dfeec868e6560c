//! Reine Geometrie-Funktionen: kubische Bézier-Segmente, Abtastung, Segment-Schnitt.
//!
//! Layer-neutral: wird von `core` (Einfügen, Selbstschnitt), `ui` (Zeichnen)
//! und den Benchmarks gleichermaßen genutzt.

use super::options::CURVE_SAMPLE_STEP;
use glam::Vec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Parameterwerte für eine Abtastung mit Schrittweite `step`.
///
/// Ganzzahlige Schritte (`t = k / n`), damit `t = 1` immer enthalten ist.
/// Bei 0.05 ergibt das 21 Werte.
pub fn sample_parameters(step: f32) -> impl Iterator<Item = f32> {
    let steps = if step > 0.0 && step.is_finite() {
        (1.0 / step).round().max(1.0) as usize
    } else {
        1
    };
    (0..=steps).map(move |k| k as f32 / steps as f32)
}

/// Ein kubisches Bézier-Segment zwischen zwei Ankern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Startanker
    pub start: Vec2,
    /// Erster Kontrollpunkt (Startseite)
    pub cp1: Vec2,
    /// Zweiter Kontrollpunkt (Endseite)
    pub cp2: Vec2,
    /// Endanker
    pub end: Vec2,
}

impl CubicSegment {
    pub fn new(start: Vec2, cp1: Vec2, cp2: Vec2, end: Vec2) -> Self {
        Self {
            start,
            cp1,
            cp2,
            end,
        }
    }

    /// Punkt auf dem Segment bei `t ∈ [0, 1]`.
    pub fn eval(&self, t: f32) -> Vec2 {
        cubic_bezier(self.start, self.cp1, self.cp2, self.end, t)
    }

    /// Abtastpunkte mit der gemeinsamen Schrittweite `CURVE_SAMPLE_STEP`.
    pub fn samples(self) -> impl Iterator<Item = Vec2> {
        sample_parameters(CURVE_SAMPLE_STEP).map(move |t| self.eval(t))
    }

    /// Verschiebt alle vier Punkte (z.B. lokal → Screen).
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(
            self.start + offset,
            self.cp1 + offset,
            self.cp2 + offset,
            self.end + offset,
        )
    }
}

/// Sinus des Winkels, unter dem drei Punkte als kollinear gelten.
const COLLINEAR_SIN: f32 = 1e-5;
/// Toleranz (Pixel) für den Bounding-Box-Test kollinearer Endpunkte.
const BOUNDS_SLACK: f32 = 1e-4;

/// Prüft ob sich zwei Liniensegmente schneiden oder berühren.
///
/// Allgemeiner Fall: die Endpunkte jedes Segments liegen auf verschiedenen
/// Seiten des anderen. Sonderfall: ein Endpunkt ist (bis auf Rundung)
/// kollinear und liegt in der Bounding-Box des anderen Segments.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let side_b1 = cross(a1, a2, b1);
    let side_b2 = cross(a1, a2, b2);
    let side_a1 = cross(b1, b2, a1);
    let side_a2 = cross(b1, b2, a2);

    if side_b1 * side_b2 < 0.0 && side_a1 * side_a2 < 0.0 {
        return true;
    }

    let touches = |side: f32, point: Vec2, start: Vec2, end: Vec2| {
        is_collinear(side, start, end, point) && within_bounds(point, start, end)
    };
    touches(side_b1, b1, a1, a2)
        || touches(side_b2, b2, a1, a2)
        || touches(side_a1, a1, b1, b2)
        || touches(side_a2, a2, b1, b2)
}

/// Kreuzprodukt `(b - a) × (c - a)`; das Vorzeichen gibt die Seite von `c` an.
fn cross(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// Das Kreuzprodukt skaliert mit beiden Kantenlängen, die Schwelle deshalb auch.
fn is_collinear(cross: f32, a: Vec2, b: Vec2, c: Vec2) -> bool {
    cross.abs() <= COLLINEAR_SIN * a.distance(b) * a.distance(c)
}

fn within_bounds(point: Vec2, start: Vec2, end: Vec2) -> bool {
    let min = start.min(end) - Vec2::splat(BOUNDS_SLACK);
    let max = start.max(end) + Vec2::splat(BOUNDS_SLACK);
    point.cmpge(min).all() && point.cmple(max).all()
}

/// Prüft ob sich eine Polyline selbst schneidet.
///
/// Nachbar-Kanten (`j == i + 1`) werden übersprungen. Mit `wraps = true`
/// gilt die Polyline als geschlossen und erste/letzte Kante sind ebenfalls Nachbarn.
pub fn polyline_self_intersects(points: &[Vec2], wraps: bool) -> bool {
    if points.len() < 4 {
        return false;
    }
    let edge_count = points.len() - 1;

    for i in 0..edge_count {
        for j in (i + 2)..edge_count {
            if wraps && i == 0 && j == edge_count - 1 {
                continue;
            }
            if segments_intersect(points[i], points[i + 1], points[j], points[j + 1]) {
                return true;
            }
        }
    }
    false
}
