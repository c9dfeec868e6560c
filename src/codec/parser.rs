//! Parser für das Kurven-Textformat.

use super::SEPARATOR;
use crate::core::{Anchor, Curve, PackedColor};
use anyhow::{bail, Context, Result};
use glam::Vec2;

/// Felder im Kopf einer Zeile: closed, thickness, color
const HEADER_FIELDS: usize = 3;
/// Felder pro Anker: x, y, radius, color
const ANCHOR_FIELDS: usize = 4;

/// Ergebnis beim Einlesen einer ganzen Datei.
#[derive(Debug, Default)]
pub struct CurveFileLoad {
    /// Erfolgreich gelesene Kurven in Dateireihenfolge
    pub curves: Vec<Curve>,
    /// Verworfene Zeilen mit Begründung
    pub rejected: Vec<RejectedLine>,
}

/// Eine Zeile, die nicht als Kurve gelesen werden konnte.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    /// 1-basierte Zeilennummer
    pub line_number: usize,
    pub reason: String,
}

/// Liest eine Kurve aus einer einzelnen Zeile.
pub fn parse_curve_line(line: &str) -> Result<Curve> {
    let fields: Vec<&str> = line.trim().split(SEPARATOR).map(str::trim).collect();
    if fields.len() < HEADER_FIELDS {
        bail!(
            "Zu wenige Felder: {} statt mindestens {}",
            fields.len(),
            HEADER_FIELDS
        );
    }

    let is_closed = parse_flag(fields[0])?;
    let thickness = parse_positive(fields[1], "thickness")?;
    let color = parse_color(fields[2])?;

    let anchor_fields = &fields[HEADER_FIELDS..];
    if anchor_fields.len() % ANCHOR_FIELDS != 0 {
        bail!(
            "Unvollständiger Anker: {} Felder übrig, Vielfaches von {} erwartet",
            anchor_fields.len(),
            ANCHOR_FIELDS
        );
    }

    let mut curve = Curve::new(is_closed, thickness, color);
    for (index, group) in anchor_fields.chunks_exact(ANCHOR_FIELDS).enumerate() {
        let anchor = parse_anchor(group).with_context(|| format!("Anker {}", index))?;
        curve.push_anchor(anchor);
    }

    Ok(curve)
}

/// Liest alle nicht-leeren Zeilen. Fehlerhafte Zeilen landen in `rejected`.
pub fn parse_curve_file(content: &str) -> CurveFileLoad {
    let mut load = CurveFileLoad::default();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_curve_line(line) {
            Ok(curve) => load.curves.push(curve),
            Err(e) => load.rejected.push(RejectedLine {
                line_number: index + 1,
                reason: format!("{:#}", e),
            }),
        }
    }

    load
}

fn parse_anchor(fields: &[&str]) -> Result<Anchor> {
    let x = parse_finite(fields[0], "x")?;
    let y = parse_finite(fields[1], "y")?;
    let radius = parse_positive(fields[2], "radius")?;
    let color = parse_color(fields[3])?;
    Ok(Anchor::new(Vec2::new(x, y), radius, color))
}

/// `true`/`false` oder Ganzzahl (ungleich 0 = geschlossen).
fn parse_flag(field: &str) -> Result<bool> {
    match field {
        "true" => Ok(true),
        "false" => Ok(false),
        other => {
            let value: i64 = other
                .parse()
                .with_context(|| format!("Ungültiges closed-Flag '{}'", other))?;
            Ok(value != 0)
        }
    }
}

fn parse_finite(field: &str, name: &str) -> Result<f32> {
    let value: f32 = field
        .parse()
        .with_context(|| format!("Ungültiger Wert für {}: '{}'", name, field))?;
    if !value.is_finite() {
        bail!("{} ist nicht endlich: '{}'", name, field);
    }
    Ok(value)
}

fn parse_positive(field: &str, name: &str) -> Result<f32> {
    let value = parse_finite(field, name)?;
    if value <= 0.0 {
        bail!("{} muss positiv sein, war {}", name, value);
    }
    Ok(value)
}

fn parse_color(field: &str) -> Result<PackedColor> {
    field
        .parse::<PackedColor>()
        .with_context(|| format!("Ungültige Farbe '{}'", field))
}
