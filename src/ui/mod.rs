//! UI-Komponenten: Menü, Properties, Zeichenfläche, Statusleiste, Dialoge.

pub mod canvas;
pub mod dialogs;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menü, Panels, Dialoge)
/// und das egui-Backend für das Zeichnen der Kurven.
pub mod menu;
pub mod properties;
pub mod status;

pub use canvas::{render_canvas, EguiCurvePainter};
pub use dialogs::handle_file_dialogs;
pub use keyboard::collect_keyboard_intents;
pub use menu::render_menu;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
