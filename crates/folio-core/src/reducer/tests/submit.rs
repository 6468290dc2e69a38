use super::*;
use pretty_assertions::assert_eq;

#[test]
fn blank_submit_is_a_noop() {
    let mut state = state();
    type_text(&mut state, "   ");
    let before = state.scrollback.clone();
    assert!(user(&mut state, UserAction::Submit).is_empty());
    assert_eq!(state.scrollback, before);
    assert_eq!(state.input, "   ");
    assert!(history(&state).is_empty());
}

#[test]
fn submit_echoes_trimmed_command_then_output() {
    let mut state = state();
    let before = state.scrollback.len();
    submit_line(&mut state, "  echo hello world  ");

    let entries: Vec<_> = state.scrollback.iter().skip(before).collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].origin, EntryOrigin::Command);
    assert_eq!(entries[0].text, "echo hello world");
    assert_eq!(entries[1].origin, EntryOrigin::Output);
    assert!(entries[1].text.ends_with("hello world"));
    assert_eq!(state.input, "");
    assert_eq!(history(&state), vec!["echo hello world"]);
}

#[test]
fn resume_emits_deferred_open() {
    let mut state = state();
    let effects = submit_line(&mut state, "resume");
    assert!(effects.iter().any(|effect| matches!(
        effect,
        FolioEffect::OpenExternal { url, delay_ms: 500 } if url.contains("drive.google.com")
    )));
}

#[test]
fn input_prefix_policy_flags_error_words() {
    let mut state = state();
    submit_line(&mut state, "error-report");
    assert!(state.scrollback.last().expect("entry").is_error);

    submit_line(&mut state, "foo");
    assert!(!state.scrollback.last().expect("entry").is_error);
}

#[test]
fn dispatcher_policy_flags_real_failures() {
    let mut state = TerminalState::new(SessionConfig {
        error_flagging: ErrorFlagging::Dispatcher,
        ..SessionConfig::default()
    });

    submit_line(&mut state, "foo");
    assert!(state.scrollback.last().expect("entry").is_error);

    submit_line(&mut state, "echo error");
    assert!(!state.scrollback.last().expect("entry").is_error);

    submit_line(&mut state, "projects view nope");
    assert!(state.scrollback.last().expect("entry").is_error);
}
