//! Use-Case-Funktionen für das Bearbeiten von Kurven.
//!
//! Aufgeteilt nach Operation:
//! - `anchors`: Anker einfügen und löschen
//! - `curve`: Kurven-Einstellungen übernehmen, Kurve leeren
//! - `selection`: Kurve selektieren, Edit-Modus

mod anchors;
mod curve;
mod selection;

pub use anchors::{add_anchor, delete_anchor};
pub use curve::{apply_curve_settings, clear_curve};
pub use selection::{select_curve, set_edit_mode};
