//! Properties-Panel (rechte Seitenleiste) für Kurvenauswahl und Kurven-Einstellungen.

use crate::app::{AppIntent, AppState};
use crate::core::{Curve, PackedColor};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Kurven");
            ui.separator();

            render_curve_selector(ui, state, &mut events);

            if ui.radio(state.edit_mode, "Edit Mode").clicked() {
                events.push(AppIntent::EditModeToggled);
            }

            ui.separator();

            match state.selected() {
                Some(curve) => render_curve_settings(ui, curve, state, &mut events),
                None => {
                    ui.label("Keine Kurve ausgewählt");
                }
            }
        });

    events
}

fn curve_label(index: Option<usize>) -> String {
    match index {
        Some(i) => format!("Curve {}", i),
        None => "Select a Curve".to_string(),
    }
}

fn render_curve_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut selected = state.selected_curve;

    egui::ComboBox::from_id_salt("curve_selector")
        .selected_text(curve_label(selected))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, curve_label(None));
            for index in 0..state.curves.len() {
                ui.selectable_value(&mut selected, Some(index), curve_label(Some(index)));
            }
        });

    if selected != state.selected_curve {
        events.push(AppIntent::CurveSelected { index: selected });
    }
}

fn render_curve_settings(
    ui: &mut egui::Ui,
    curve: &Curve,
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    let mut settings = curve.settings();
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Color");
        let mut rgba = settings.color.to_rgba_f32();
        if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
            settings.color = PackedColor::from_rgba_f32(rgba);
            changed = true;
        }
    });

    changed |= ui
        .add(egui::Slider::new(&mut settings.thickness, state.options.thickness_bounds()).text("Thickness"))
        .changed();

    changed |= ui.checkbox(&mut settings.is_closed, "Closed Curve").changed();

    if changed {
        events.push(AppIntent::CurveSettingsChanged { settings });
    }

    ui.separator();

    ui.label(format!("Anchors: {}", curve.len()));
    ui.label(format!("Intersects: {}", curve.is_self_intersecting()));

    if ui
        .add_enabled(!curve.is_empty(), egui::Button::new("Clear"))
        .clicked()
    {
        events.push(AppIntent::ClearCurveRequested);
    }
}
