use crate::core::{CurveSettings, LocalFrame};
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Linksklick auf die Zeichenfläche (Screen-Koordinaten)
    CanvasPrimaryClicked { screen_pos: Vec2, frame: LocalFrame },
    /// Rechtsklick auf die Zeichenfläche (Screen-Koordinaten)
    CanvasSecondaryClicked { screen_pos: Vec2, frame: LocalFrame },
    /// Kurve in der Auswahlliste gewählt
    CurveSelected { index: Option<usize> },
    /// Edit-Modus umschalten
    EditModeToggled,
    /// Kurven-Einstellungen im Panel geändert
    CurveSettingsChanged { settings: CurveSettings },
    /// Alle Anker der selektierten Kurve entfernen
    ClearCurveRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Aktuelle bzw. Standard-Datei ohne Dialog laden
    LoadRequested,
    /// Datei speichern (aktueller Pfad oder Standard-Datei)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },
    /// Versionsinfo anzeigen
    AboutRequested,
    /// Anwendung beenden
    ExitRequested,
}
