//! Writer für das Kurven-Textformat.

use super::SEPARATOR;
use crate::core::Curve;

/// Schreibt eine Kurve als einzelne Zeile (ohne Zeilenumbruch).
///
/// `closed,thickness,color` gefolgt von `,x,y,radius,color` pro Anker.
/// `closed` wird als `0`/`1` geschrieben, Floats in kürzester verlustfreier Form.
pub fn write_curve_line(curve: &Curve) -> String {
    let mut output = format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}",
        u8::from(curve.is_closed()),
        curve.thickness(),
        curve.color()
    );

    for anchor in curve.anchors() {
        let position = anchor.position();
        output.push_str(&format!(
            "{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            position.x,
            position.y,
            anchor.radius(),
            anchor.color()
        ));
    }

    output
}

/// Schreibt alle Kurven, eine pro Zeile, jede mit `\n` abgeschlossen.
pub fn write_curve_file(curves: &[Curve]) -> String {
    let mut output = String::new();
    for curve in curves {
        output.push_str(&write_curve_line(curve));
        output.push('\n');
    }
    output
}
