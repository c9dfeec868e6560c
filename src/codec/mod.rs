//! Textformat für Kurven-Dateien.
//!
//! Eine Kurve pro Zeile, Felder durch `,` getrennt:
//! `closed,thickness,color[,x,y,radius,color]*`.

pub mod parser;
pub mod writer;

/// Feldtrenner innerhalb einer Zeile
pub const SEPARATOR: char = ',';

pub use parser::{parse_curve_file, parse_curve_line, CurveFileLoad, RejectedLine};
pub use writer::{write_curve_file, write_curve_line};
