//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::codec;
use anyhow::{bail, Context};

/// Öffnet den Open-Datei-Dialog über den Datei-State.
pub fn request_open_file(state: &mut AppState) {
    state.file.show_open_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über den Datei-State.
pub fn request_save_file(state: &mut AppState) {
    state.file.show_save_dialog = true;
}

/// Lädt alle Kurven aus `path`.
///
/// Die Kurvenliste wird nur ersetzt, wenn mindestens eine Zeile gelesen wurde.
/// Sonst bleibt der bisherige Zustand erhalten und ein Fehler wird gemeldet.
/// Verworfene Zeilen werden protokolliert, brechen das Laden aber nicht ab.
pub fn load_curves(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei '{}' konnte nicht gelesen werden", path))?;
    let load = codec::parse_curve_file(&content);

    for rejected in &load.rejected {
        log::warn!(
            "{}:{}: Zeile verworfen: {}",
            path,
            rejected.line_number,
            rejected.reason
        );
    }

    if load.curves.is_empty() {
        bail!(
            "Keine gültige Kurve in '{}' ({} Zeilen verworfen)",
            path,
            load.rejected.len()
        );
    }

    let curve_count = load.curves.len();
    state.curves = load.curves;
    state.selected_curve = state.selected_curve.map(|i| i.min(curve_count - 1));
    if state.selected().is_none() {
        state.edit_mode = false;
    }
    state.file.current_path = Some(path.clone());

    let msg = if load.rejected.is_empty() {
        format!("{} Kurven geladen aus {}", curve_count, path)
    } else {
        format!(
            "{} Kurven geladen aus {}, {} Zeilen verworfen",
            curve_count,
            path,
            load.rejected.len()
        )
    };
    log::info!("{}", msg);
    state.status_message = Some(msg);
    Ok(())
}

/// Speichert alle Kurven.
///
/// `None` speichert unter dem aktuellen Pfad bzw. der Standard-Datei,
/// `Some(p)` unter dem neuen Pfad `p`, der danach als aktueller Pfad gilt.
pub fn save_curves(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| state.current_or_default_path());
    let content = codec::write_curve_file(&state.curves);
    std::fs::write(&path, content)
        .with_context(|| format!("Datei '{}' konnte nicht geschrieben werden", path))?;

    let msg = format!("{} Kurven gespeichert nach {}", state.curves.len(), path);
    log::info!("{}", msg);
    state.status_message = Some(msg);
    state.file.current_path = Some(path);
    Ok(())
}
