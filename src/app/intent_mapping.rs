//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasPrimaryClicked { screen_pos, frame } => {
            let Some(curve_index) = editable_curve(state) else {
                return Vec::new();
            };
            if !frame.contains_screen(screen_pos) {
                return Vec::new();
            }

            let position = frame.to_local(screen_pos);
            let pick_radius = state.options.anchor_pick_radius;
            // Klick auf bestehenden Anker startet einen Drag, kein neuer Punkt
            let hits_anchor = state
                .selected()
                .and_then(|curve| curve.anchor_at(position, pick_radius))
                .is_some();
            if hits_anchor {
                return Vec::new();
            }

            vec![AppCommand::AddAnchor {
                curve: curve_index,
                position,
            }]
        }
        AppIntent::CanvasSecondaryClicked { screen_pos, frame } => {
            let Some(curve_index) = editable_curve(state) else {
                return Vec::new();
            };
            let position = frame.to_local(screen_pos);
            state
                .selected()
                .and_then(|curve| curve.anchor_at(position, state.options.anchor_pick_radius))
                .map(|index| AppCommand::DeleteAnchor {
                    curve: curve_index,
                    index,
                })
                .into_iter()
                .collect()
        }
        AppIntent::CurveSelected { index } => {
            let mut commands = vec![AppCommand::SelectCurve { index }];
            if index.is_none() && state.edit_mode {
                commands.push(AppCommand::SetEditMode { enabled: false });
            }
            commands
        }
        AppIntent::EditModeToggled => {
            let enabled = state.selected().is_some() && !state.edit_mode;
            vec![AppCommand::SetEditMode { enabled }]
        }
        AppIntent::CurveSettingsChanged { settings } => state
            .selected_curve
            .map(|curve| AppCommand::ApplyCurveSettings { curve, settings })
            .into_iter()
            .collect(),
        AppIntent::ClearCurveRequested => state
            .selected_curve
            .map(|curve| AppCommand::ClearCurve { curve })
            .into_iter()
            .collect(),
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::LoadRequested => vec![AppCommand::LoadCurves {
            path: state.current_or_default_path(),
        }],
        AppIntent::SaveRequested => vec![AppCommand::SaveCurves { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadCurves { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveCurves { path: Some(path) }]
        }
        AppIntent::AboutRequested => vec![AppCommand::ShowAbout],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Index der selektierten Kurve, wenn sie im Edit-Modus bearbeitet werden darf.
fn editable_curve(state: &AppState) -> Option<usize> {
    if !state.edit_mode {
        return None;
    }
    state.selected_curve.filter(|&i| i < state.curves.len())
}
