//! Zeichenfläche: egui-Backend für `CurvePainter` und Canvas-Eingaben.

use crate::app::{AppIntent, AppState};
use crate::core::{FrameStack, LocalFrame, PackedColor};
use crate::shared::{CubicSegment, CurvePainter, HandleResponse};
use glam::Vec2;

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn to_vec2(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn to_color32(color: PackedColor) -> egui::Color32 {
    let [r, g, b, a] = color.to_rgba8();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// egui-Implementierung des Zeichen-Vertrags für eine Kurve.
pub struct EguiCurvePainter<'a> {
    ui: &'a egui::Ui,
    painter: egui::Painter,
    id: egui::Id,
}

impl<'a> EguiCurvePainter<'a> {
    /// `id` muss pro Kurve eindeutig und über Frames stabil sein.
    pub fn new(ui: &'a egui::Ui, painter: egui::Painter, id: egui::Id) -> Self {
        Self { ui, painter, id }
    }
}

impl CurvePainter for EguiCurvePainter<'_> {
    fn stroke_cubic(&mut self, segment: CubicSegment, color: PackedColor, thickness: f32) {
        let points: Vec<egui::Pos2> = segment.samples().map(to_pos2).collect();
        self.painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(thickness, to_color32(color)),
        ));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: PackedColor) {
        self.painter
            .circle_filled(to_pos2(center), radius, to_color32(color));
    }

    fn drag_handle(&mut self, index: usize, min: Vec2, max: Vec2) -> HandleResponse {
        let rect = egui::Rect::from_min_max(to_pos2(min), to_pos2(max));
        let response = self
            .ui
            .interact(rect, self.id.with(index), egui::Sense::drag());
        HandleResponse {
            dragging: response.dragged(),
            delta: to_vec2(response.drag_delta()),
        }
    }
}

/// Rendert die Zeichenfläche mit allen Kurven und gibt Klick-Intents zurück.
///
/// Die Fläche wird für die Dauer des Zeichnens als Frame auf `frames` gelegt.
/// Nur die selektierte Kurve ist im Edit-Modus interaktiv.
pub fn render_canvas(ui: &mut egui::Ui, state: &mut AppState, frames: &mut FrameStack) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let [width, height] = state.options.canvas_size;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
        let canvas = LocalFrame::new(
            Vec2::new(rect.min.x, rect.min.y),
            Vec2::new(rect.width(), rect.height()),
        );

        let ui: &egui::Ui = ui;
        frames.with_frame(canvas, |frames, _| {
            let frame = frames.current();

            if let Some(pos) = response.interact_pointer_pos().or(response.hover_pos()) {
                let screen_pos = Vec2::new(pos.x, pos.y);
                if response.clicked() {
                    events.push(AppIntent::CanvasPrimaryClicked { screen_pos, frame });
                } else if response.secondary_clicked() {
                    events.push(AppIntent::CanvasSecondaryClicked { screen_pos, frame });
                }
            }

            let edit_mode = state.edit_mode;
            let selected = state.selected_curve;
            let base_id = ui.id().with("curve_canvas");

            for (index, curve) in state.curves.iter_mut().enumerate() {
                let editable = edit_mode && selected == Some(index);
                let mut painter =
                    EguiCurvePainter::new(ui, ui.painter_at(rect), base_id.with(index));
                if curve.draw(&mut painter, &frame, editable) {
                    ui.ctx().request_repaint();
                }
            }
        });
    });

    events
}
