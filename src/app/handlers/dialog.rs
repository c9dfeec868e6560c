//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Zeigt Name und Version in der Statusleiste.
pub fn show_about(state: &mut AppState) {
    let msg = format!("Draggable Curve Editor v{}", env!("CARGO_PKG_VERSION"));
    log::info!("{}", msg);
    state.status_message = Some(msg);
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
