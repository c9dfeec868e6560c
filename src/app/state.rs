//! Application State: zentrale Datenhaltung.

use crate::core::{Curve, CurveSettings};
use crate::shared::EditorOptions;

/// Datei-bezogener UI-Zustand (Pfad und ausstehende Dialoge).
#[derive(Debug, Default)]
pub struct FileState {
    /// Zuletzt geladene oder gespeicherte Datei
    pub current_path: Option<String>,
    /// Ob der Öffnen-Dialog im nächsten Frame angezeigt werden soll
    pub show_open_dialog: bool,
    /// Ob der Speichern-Dialog im nächsten Frame angezeigt werden soll
    pub show_save_dialog: bool,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Kurven des Dokuments (Zeichenreihenfolge)
    pub curves: Vec<Curve>,
    /// Index der bearbeiteten Kurve
    pub selected_curve: Option<usize>,
    /// Edit-Modus: Anker setzen, löschen und ziehen
    pub edit_mode: bool,
    /// Laufzeit-Optionen (Radien, Farben, Schwellen)
    pub options: EditorOptions,
    /// Datei-Zustand
    pub file: FileState,
    /// Letzte Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit einer leeren, selektierten Kurve.
    pub fn with_options(options: EditorOptions) -> Self {
        let first_curve = Curve::from_settings(default_curve_settings(&options));
        Self {
            curves: vec![first_curve],
            selected_curve: Some(0),
            edit_mode: false,
            options,
            file: FileState::default(),
            status_message: None,
            should_exit: false,
        }
    }

    /// Die selektierte Kurve, falls vorhanden
    pub fn selected(&self) -> Option<&Curve> {
        self.selected_curve.and_then(|i| self.curves.get(i))
    }

    pub fn selected_mut(&mut self) -> Option<&mut Curve> {
        self.selected_curve.and_then(|i| self.curves.get_mut(i))
    }

    /// Pfad für Laden/Speichern ohne Dialog.
    pub fn current_or_default_path(&self) -> String {
        self.file
            .current_path
            .clone()
            .unwrap_or_else(|| self.options.default_curve_file.clone())
    }

    /// Gesamtzahl der Anker über alle Kurven (für die Statusleiste)
    pub fn anchor_count(&self) -> usize {
        self.curves.iter().map(Curve::len).sum()
    }
}

/// Einstellungen neuer Kurven aus den Optionen.
pub fn default_curve_settings(options: &EditorOptions) -> CurveSettings {
    CurveSettings {
        is_closed: false,
        thickness: options.curve_thickness,
        color: options.curve_color,
    }
}
