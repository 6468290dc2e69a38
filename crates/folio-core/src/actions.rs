use super::dispatcher::Command;

#[derive(Debug, Clone)]
pub enum TerminalAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone)]
pub enum UserAction {
    Input(char),
    Paste(String),
    Backspace,
    ClearInput,
    HistoryUp,
    HistoryDown,
    Complete,
    Submit,
    Focus,
}

#[derive(Debug, Clone)]
pub enum RuntimeAction {
    /// Drops everything but the welcome banner, leaving input and history alone.
    ResetScrollback,
}

/// Every command name offered by tab-completion, in help order.
pub fn completable_commands() -> impl Iterator<Item = &'static str> {
    Command::ALL.into_iter().map(Command::name)
}

/// Commands whose name starts with `input`, compared case-insensitively.
pub fn completion_matches(input: &str) -> Vec<&'static str> {
    let prefix = input.to_lowercase();
    completable_commands()
        .filter(|name| name.starts_with(&prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prefix_matching_is_case_insensitive() {
        assert_eq!(completion_matches("pro"), vec!["projects"]);
        assert_eq!(completion_matches("PRO"), vec!["projects"]);
        assert_eq!(completion_matches("ls"), vec!["ls"]);
    }

    #[test]
    fn ambiguous_and_empty_prefixes() {
        assert_eq!(completion_matches("c"), vec!["contact", "clear", "cat"]);
        assert_eq!(completion_matches("e"), vec!["exit", "echo"]);
        assert_eq!(completion_matches("").len(), Command::ALL.len());
        assert!(completion_matches("zzz").is_empty());
    }
}
