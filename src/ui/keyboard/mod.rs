//! Keyboard-Shortcuts.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Ctrl+O (Öffnen), Ctrl+L (Laden), Ctrl+S (Speichern), Ctrl+Shift+S (Speichern unter)
    let (modifiers, key_o_pressed, key_l_pressed, key_s_pressed) = ctx.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::L),
            i.key_pressed(egui::Key::S),
        )
    });

    if !modifiers.command {
        return events;
    }

    if key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if key_l_pressed {
        events.push(AppIntent::LoadRequested);
    }

    if key_s_pressed {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }

    events
}

#[cfg(test)]
mod tests;
