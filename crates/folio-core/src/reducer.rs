use tracing::debug;

use super::actions::completion_matches;
use super::actions::RuntimeAction;
use super::actions::TerminalAction;
use super::actions::UserAction;
use super::config::ErrorFlagging;
use super::dispatcher::dispatch;
use super::dispatcher::Dispatch;
use super::dispatcher::DispatchEffect;
use super::state::ScrollbackEntry;
use super::state::TerminalState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolioEffect {
    RequestFrame,
    /// The scrollback or the input line changed; the view should follow the prompt.
    ScrollToBottom,
    FocusInput,
    OpenExternal {
        url: String,
        delay_ms: u64,
    },
}

pub fn reduce(state: &mut TerminalState, action: TerminalAction) -> Vec<FolioEffect> {
    match action {
        TerminalAction::User(user) => reduce_user(state, user),
        TerminalAction::Runtime(runtime) => reduce_runtime(state, runtime),
    }
}

fn reduce_user(state: &mut TerminalState, action: UserAction) -> Vec<FolioEffect> {
    match action {
        UserAction::Input(c) => {
            if c.is_control() {
                return Vec::new();
            }
            state.input.push(c);
            edited()
        }
        UserAction::Paste(text) => {
            let cleaned: String = text
                .chars()
                .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
                .filter(|c| !c.is_control())
                .collect();
            if cleaned.is_empty() {
                return Vec::new();
            }
            state.input.push_str(&cleaned);
            edited()
        }
        UserAction::Backspace => {
            state.input.pop();
            edited()
        }
        UserAction::ClearInput => {
            state.input.clear();
            edited()
        }
        UserAction::HistoryUp => {
            if state.history.is_empty() {
                return Vec::new();
            }
            let oldest = state.history.len() - 1;
            let idx = match state.history_cursor {
                Some(idx) => (idx + 1).min(oldest),
                None => 0,
            };
            state.history_cursor = Some(idx);
            state.input = state.history.get(idx).unwrap_or_default().to_string();
            vec![FolioEffect::RequestFrame]
        }
        UserAction::HistoryDown => {
            if state.history.is_empty() {
                return Vec::new();
            }
            match state.history_cursor {
                Some(idx) if idx > 0 => {
                    state.history_cursor = Some(idx - 1);
                    state.input = state.history.get(idx - 1).unwrap_or_default().to_string();
                }
                _ => {
                    state.history_cursor = None;
                    state.input.clear();
                }
            }
            vec![FolioEffect::RequestFrame]
        }
        UserAction::Complete => complete(state),
        UserAction::Submit => submit(state),
        UserAction::Focus => vec![FolioEffect::FocusInput, FolioEffect::RequestFrame],
    }
}

fn reduce_runtime(state: &mut TerminalState, action: RuntimeAction) -> Vec<FolioEffect> {
    match action {
        RuntimeAction::ResetScrollback => {
            debug!("resetting scrollback");
            state.scrollback.reset();
        }
    }
    vec![FolioEffect::ScrollToBottom, FolioEffect::RequestFrame]
}

fn edited() -> Vec<FolioEffect> {
    vec![FolioEffect::ScrollToBottom, FolioEffect::RequestFrame]
}

fn complete(state: &mut TerminalState) -> Vec<FolioEffect> {
    let matches = completion_matches(&state.input);
    match matches.as_slice() {
        [] => Vec::new(),
        [only] => {
            state.input = only.to_string();
            vec![FolioEffect::RequestFrame]
        }
        _ => {
            let listing = dispatch("help", &matches, None);
            let attempted = std::mem::take(&mut state.input);
            state.scrollback.append(ScrollbackEntry::command(attempted));
            state
                .scrollback
                .append(ScrollbackEntry::output(listing.output, false));
            vec![FolioEffect::ScrollToBottom, FolioEffect::RequestFrame]
        }
    }
}

fn submit(state: &mut TerminalState) -> Vec<FolioEffect> {
    let line = state.input.trim().to_string();
    if line.is_empty() {
        return Vec::new();
    }

    state.scrollback.append(ScrollbackEntry::command(line.clone()));
    state.history.push(line.clone());
    state.history_cursor = None;

    let scrollback = &mut state.scrollback;
    let mut reset = || scrollback.reset();
    let dispatched = dispatch(&line, &[], Some(&mut reset));

    let mut effects = vec![FolioEffect::ScrollToBottom, FolioEffect::RequestFrame];
    if !dispatched.output.is_empty() {
        let is_error = is_error_output(state.error_flagging, &line, &dispatched);
        debug!(is_error, "appending command output");
        state
            .scrollback
            .append(ScrollbackEntry::output(dispatched.output, is_error));
    }
    if let Some(DispatchEffect::OpenExternal { url, delay_ms }) = dispatched.effect {
        effects.push(FolioEffect::OpenExternal { url, delay_ms });
    }
    state.input.clear();
    effects
}

pub fn is_error_output(policy: ErrorFlagging, line: &str, dispatched: &Dispatch) -> bool {
    match policy {
        ErrorFlagging::InputPrefix => line.to_lowercase().starts_with("error"),
        ErrorFlagging::Dispatcher => dispatched.is_error(),
    }
}

#[cfg(test)]
mod tests;
