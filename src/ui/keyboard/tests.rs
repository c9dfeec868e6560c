use super::*;

fn collect_with_key_event(key: egui::Key, modifiers: egui::Modifiers) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = modifiers;
    raw_input.events.push(egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    });

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        events = collect_keyboard_intents(ctx);
    });

    events
}

#[test]
fn test_ctrl_s_emits_save_intent() {
    let events = collect_with_key_event(egui::Key::S, egui::Modifiers::COMMAND);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::SaveRequested)));
}

#[test]
fn test_ctrl_shift_s_emits_save_as_intent() {
    let events = collect_with_key_event(
        egui::Key::S,
        egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::SaveAsRequested)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::SaveRequested)));
}

#[test]
fn test_ctrl_l_emits_load_intent() {
    let events = collect_with_key_event(egui::Key::L, egui::Modifiers::COMMAND);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::LoadRequested)));
}

#[test]
fn test_plain_s_emits_nothing() {
    let events = collect_with_key_event(egui::Key::S, egui::Modifiers::default());

    assert!(events.is_empty());
}
