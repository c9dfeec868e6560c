use crate::app::{AppIntent, FileState};

const CURVE_FILE_FILTER: (&str, &[&str]) = ("Curve Text", &["txt"]);

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(file_state: &mut FileState, default_file: &str) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let (filter_name, extensions) = CURVE_FILE_FILTER;

    // Open-Datei-Dialog
    if file_state.show_open_dialog {
        file_state.show_open_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter(filter_name, extensions)
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Save-Datei-Dialog
    if file_state.show_save_dialog {
        file_state.show_save_dialog = false;

        let default_name = file_state
            .current_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(default_file);

        if let Some(path) = rfd::FileDialog::new()
            .add_filter(filter_name, extensions)
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
