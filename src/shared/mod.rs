//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Geometrie, Optionen und den Zeichen-Vertrag, die zwischen
//! `core`, `app` und `ui` geteilt werden.

pub mod geometry;
pub mod options;
pub mod painter;

pub use geometry::{cubic_bezier, segments_intersect, CubicSegment};
pub use options::EditorOptions;
pub use options::{CURVE_SAMPLE_STEP, INSERT_THRESHOLD};
pub use painter::{CurvePainter, HandleResponse};
