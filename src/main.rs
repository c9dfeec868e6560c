//! Draggable Curve Editor.
//!
//! Editor für glatte, offene oder geschlossene Kurven aus verschiebbaren Ankern
//! mit Selbstschnitt-Anzeige und Speichern/Laden als Textdatei.

use draggable_curve_editor::{ui, AppController, AppIntent, AppState, EditorOptions, FrameStack};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Draggable Curve Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Draggable Curve Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Draggable Curve Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    frames: FrameStack,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Vorlage zum Anpassen neben der Binary ablegen
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Optionen-Datei konnte nicht angelegt werden: {:#}", e);
            }
        }

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            frames: FrameStack::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::collect_keyboard_intents(ctx));
        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(
            &mut self.state.file,
            &self.state.options.default_curve_file,
        ));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Bezier Curve Editor");
            events.extend(ui::render_canvas(ui, &mut self.state, &mut self.frames));
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.status_message = Some(format!("Fehler: {:#}", e));
            }
        }
    }
}
