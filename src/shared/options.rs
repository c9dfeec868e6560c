//! Zentrale Konfiguration für den Curve Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::PackedColor;
use serde::{Deserialize, Serialize};

// ── Abtastung ───────────────────────────────────────────────────────

/// Parametrische Schrittweite beim Abtasten eines Segments.
///
/// Gilt gemeinsam für Zeichnen, Einfüge-Suche und Selbstschnitt-Test
/// und ist deshalb bewusst keine Laufzeit-Option.
pub const CURVE_SAMPLE_STEP: f32 = 0.05;

// ── Anker ───────────────────────────────────────────────────────────

/// Abstand (Pixel), bis zu dem ein neuer Punkt auf die Kurve eingefügt wird.
pub const INSERT_THRESHOLD: f32 = 15.0;
/// Radius neuer Anker in Pixeln.
pub const ANCHOR_RADIUS: f32 = 5.0;
/// Pick-Radius (Pixel) für Klick-Treffer auf Anker.
pub const ANCHOR_PICK_RADIUS: f32 = 12.0;
/// Farbe neuer Anker.
pub const ANCHOR_COLOR: PackedColor = PackedColor::RED;

// ── Kurven ──────────────────────────────────────────────────────────

/// Standard-Linienstärke neuer Kurven.
pub const CURVE_THICKNESS: f32 = 2.0;
/// Minimale Linienstärke im Slider.
pub const CURVE_THICKNESS_MIN: f32 = 1.0;
/// Maximale Linienstärke im Slider.
pub const CURVE_THICKNESS_MAX: f32 = 10.0;
/// Standard-Farbe neuer Kurven.
pub const CURVE_COLOR: PackedColor = PackedColor::RED;

// ── Canvas & Dateien ────────────────────────────────────────────────

/// Größe der Zeichenfläche in Pixeln.
pub const CANVAS_SIZE: [f32; 2] = [950.0, 450.0];
/// Standard-Datei für Speichern/Laden.
pub const DEFAULT_CURVE_FILE: &str = "curves.txt";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `draggable_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Anker ───────────────────────────────────────────────────
    /// Einfüge-Schwelle für neue Punkte (Pixel)
    pub insert_threshold: f32,
    /// Radius neuer Anker
    pub anchor_radius: f32,
    /// Pick-Radius für Klick auf Anker
    pub anchor_pick_radius: f32,
    /// Farbe neuer Anker (gepacktes RGBA)
    pub anchor_color: PackedColor,

    // ── Kurven ──────────────────────────────────────────────────
    /// Linienstärke neuer Kurven
    pub curve_thickness: f32,
    /// Farbe neuer Kurven (gepacktes RGBA)
    pub curve_color: PackedColor,
    /// Slider-Bereich für die Linienstärke
    #[serde(default = "default_thickness_range")]
    pub thickness_range: [f32; 2],

    // ── Canvas & Dateien ────────────────────────────────────────
    /// Größe der Zeichenfläche
    pub canvas_size: [f32; 2],
    /// Datei für Speichern/Laden ohne Dialog
    #[serde(default = "default_curve_file")]
    pub default_curve_file: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            insert_threshold: INSERT_THRESHOLD,
            anchor_radius: ANCHOR_RADIUS,
            anchor_pick_radius: ANCHOR_PICK_RADIUS,
            anchor_color: ANCHOR_COLOR,

            curve_thickness: CURVE_THICKNESS,
            curve_color: CURVE_COLOR,
            thickness_range: default_thickness_range(),

            canvas_size: CANVAS_SIZE,
            default_curve_file: default_curve_file(),
        }
    }
}

/// Serde-Default für `thickness_range` (Abwärtskompatibilität).
fn default_thickness_range() -> [f32; 2] {
    [CURVE_THICKNESS_MIN, CURVE_THICKNESS_MAX]
}

/// Serde-Default für `default_curve_file`.
fn default_curve_file() -> String {
    DEFAULT_CURVE_FILE.to_string()
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("draggable_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("draggable_curve_editor.toml")
    }

    /// Slider-Bereich der Linienstärke (min ≤ max garantiert).
    pub fn thickness_bounds(&self) -> std::ops::RangeInclusive<f32> {
        let [a, b] = self.thickness_range;
        a.min(b)..=a.max(b)
    }
}
