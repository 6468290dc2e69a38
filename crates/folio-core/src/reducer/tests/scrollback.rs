use super::*;
use pretty_assertions::assert_eq;

use crate::profile::welcome_banner;

#[test]
fn clear_leaves_only_the_welcome_banner() {
    let mut state = state();
    submit_line(&mut state, "help");
    submit_line(&mut state, "skills");
    let effects = submit_line(&mut state, "clear");

    assert_eq!(state.scrollback.len(), 1);
    assert_eq!(last_text(&state), welcome_banner());
    assert!(effects.contains(&FolioEffect::ScrollToBottom));
    assert_eq!(history(&state), vec!["clear", "skills", "help"]);
}

#[test]
fn runtime_reset_keeps_input_and_history() {
    let mut state = state();
    submit_line(&mut state, "skills");
    type_text(&mut state, "proj");

    let effects = reduce(&mut state, TerminalAction::Runtime(RuntimeAction::ResetScrollback));

    assert_eq!(state.scrollback.len(), 1);
    assert_eq!(last_text(&state), welcome_banner());
    assert_eq!(state.input, "proj");
    assert_eq!(history(&state), vec!["skills"]);
    assert_eq!(effects, vec![FolioEffect::ScrollToBottom, FolioEffect::RequestFrame]);
}

#[test]
fn focus_requests_input_focus() {
    let mut state = state();
    let effects = user(&mut state, UserAction::Focus);
    assert_eq!(effects, vec![FolioEffect::FocusInput, FolioEffect::RequestFrame]);
}

#[test]
fn editing_keys_shape_the_input() {
    let mut state = state();
    type_text(&mut state, "abc");
    let effects = user(&mut state, UserAction::Backspace);
    assert_eq!(state.input, "ab");
    assert_eq!(effects, vec![FolioEffect::ScrollToBottom, FolioEffect::RequestFrame]);

    user(&mut state, UserAction::Paste("cd\nef\t".to_string()));
    assert_eq!(state.input, "abcd ef ");

    assert!(user(&mut state, UserAction::Input('\u{7}')).is_empty());
    user(&mut state, UserAction::ClearInput);
    assert_eq!(state.input, "");
}
