//! Draggable Curve Editor Library.
//! Kurven-Kern, Textformat und Editor-Layer als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod codec;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, FileState};
pub use codec::{parse_curve_file, parse_curve_line, write_curve_file, write_curve_line};
pub use core::{Anchor, Curve, CurveSettings, FrameStack, LocalFrame, PackedColor};
pub use shared::{CubicSegment, CurvePainter, EditorOptions, HandleResponse};
