//! Core-Domänentypen: Anker, Kurven, Farben und lokale Frames.

pub mod anchor;
pub mod color;
/// Kurven-Modell
///
/// Dieses Modul enthält die eigentliche Kurven-Logik:
/// - Einfügen neuer Anker am nächsten Segment
/// - Kontrollpunkt-Berechnung aus Nachbar-Ankern
/// - Selbstschnitt-Test und Zeichnen
pub mod curve;
pub mod frame;

pub use anchor::Anchor;
pub use color::PackedColor;
pub use curve::{Curve, CurveSettings};
pub use frame::{FrameStack, LocalFrame};

/// `value`, falls endlich und positiv, sonst `fallback`.
///
/// Radien und Linienstärken sind im Dateiformat strikt positiv; nur solche
/// Werte dürfen im Modell landen.
pub(crate) fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
