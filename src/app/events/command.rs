use crate::core::CurveSettings;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Anker in Kurve `curve` an lokaler Position einfügen
    AddAnchor { curve: usize, position: Vec2 },
    /// Anker `index` aus Kurve `curve` entfernen
    DeleteAnchor { curve: usize, index: usize },
    /// Kurve selektieren (`None` hebt die Selektion auf)
    SelectCurve { index: Option<usize> },
    /// Edit-Modus setzen
    SetEditMode { enabled: bool },
    /// Kurvenweite Einstellungen übernehmen
    ApplyCurveSettings {
        curve: usize,
        settings: CurveSettings,
    },
    /// Alle Anker einer Kurve entfernen
    ClearCurve { curve: usize },
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Kurven aus Datei laden
    LoadCurves { path: String },
    /// Kurven speichern (`None` = aktueller Pfad oder Standard-Datei)
    SaveCurves { path: Option<String> },
    /// Versionsinfo in der Statusleiste anzeigen
    ShowAbout,
    /// Anwendung beenden
    RequestExit,
}
