use super::*;
use pretty_assertions::assert_eq;

#[test]
fn single_match_completes_input() {
    let mut state = state();
    type_text(&mut state, "pro");
    let effects = user(&mut state, UserAction::Complete);
    assert_eq!(state.input, "projects");
    assert_eq!(effects, vec![FolioEffect::RequestFrame]);
}

#[test]
fn exact_unique_name_stays_itself() {
    let mut state = state();
    type_text(&mut state, "ls");
    user(&mut state, UserAction::Complete);
    assert_eq!(state.input, "ls");
}

#[test]
fn completion_ignores_case() {
    let mut state = state();
    type_text(&mut state, "SKI");
    user(&mut state, UserAction::Complete);
    assert_eq!(state.input, "skills");
}

#[test]
fn zero_matches_leave_input_untouched() {
    let mut state = state();
    type_text(&mut state, "xyz");
    let before = state.scrollback.len();
    assert!(user(&mut state, UserAction::Complete).is_empty());
    assert_eq!(state.input, "xyz");
    assert_eq!(state.scrollback.len(), before);
}

#[test]
fn several_matches_list_completions_and_clear_input() {
    let mut state = state();
    type_text(&mut state, "c");
    let before = state.scrollback.len();
    user(&mut state, UserAction::Complete);

    assert_eq!(state.input, "");
    assert_eq!(state.scrollback.len(), before + 2);
    let entries: Vec<_> = state.scrollback.iter().skip(before).collect();
    assert_eq!(entries[0].origin, EntryOrigin::Command);
    assert_eq!(entries[0].text, "c");
    assert_eq!(entries[1].origin, EntryOrigin::Output);
    assert_eq!(
        entries[1].text,
        "Available completions: contact, clear, cat"
    );
    assert!(history(&state).is_empty());
}
