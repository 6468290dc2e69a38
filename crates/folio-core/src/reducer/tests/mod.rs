use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use super::FolioEffect;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::TerminalAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::config::ErrorFlagging;
pub(super) use crate::config::SessionConfig;
pub(super) use crate::state::EntryOrigin;
pub(super) use crate::state::InteractionMode;
pub(super) use crate::state::TerminalState;

mod completion;
mod scrollback;
mod submit;

fn state() -> TerminalState {
    TerminalState::new(SessionConfig::default())
}

fn user(state: &mut TerminalState, action: UserAction) -> Vec<FolioEffect> {
    reduce(state, TerminalAction::User(action))
}

fn type_text(state: &mut TerminalState, text: &str) {
    for c in text.chars() {
        user(state, UserAction::Input(c));
    }
}

fn submit_line(state: &mut TerminalState, line: &str) -> Vec<FolioEffect> {
    type_text(state, line);
    user(state, UserAction::Submit)
}

fn history(state: &TerminalState) -> Vec<String> {
    state.history.iter().map(str::to_string).collect()
}

fn last_text(state: &TerminalState) -> String {
    state
        .scrollback
        .last()
        .map(|entry| entry.text.clone())
        .unwrap_or_default()
}

#[test]
fn initial_state_is_idle_with_welcome() {
    let state = state();
    assert_eq!(state.mode(), InteractionMode::Idle);
    assert_eq!(state.input, "");
    assert_eq!(state.scrollback.len(), 2);
    assert!(history(&state).is_empty());
}

#[test]
fn terminal_state_round_trips_through_json() {
    let mut state = state();
    submit_line(&mut state, "echo hi");
    let json = serde_json::to_string(&state).expect("serialize");
    let restored: TerminalState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, state);
}
