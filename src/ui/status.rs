//! Statusleiste am unteren Fensterrand.

use crate::app::AppState;

/// Rendert die Statusleiste
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Curves: {} | Anchors: {}",
                state.curves.len(),
                state.anchor_count()
            ));

            ui.separator();

            match state.selected_curve {
                Some(index) => ui.label(format!("Selected: Curve {}", index)),
                None => ui.label("Selected: none"),
            };

            ui.separator();

            ui.label(if state.edit_mode { "Edit Mode" } else { "View Mode" });

            ui.separator();

            let filename = state
                .file
                .current_path
                .as_deref()
                .and_then(|p| std::path::Path::new(p).file_name())
                .and_then(|n| n.to_str())
                .unwrap_or("unsaved");
            ui.label(format!("File: {}", filename));

            if let Some(msg) = &state.status_message {
                ui.separator();
                ui.label(msg);
            }
        });
    });
}
