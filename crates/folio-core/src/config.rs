use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub resume: ResumeConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorFlagging {
    /// Flag output whose submitted input starts with the word "error".
    /// Known issue: misclassifies legitimate commands such as `error-free` or
    /// any project literally named "error".
    #[default]
    InputPrefix,
    /// Flag output the dispatcher itself classified as an error.
    Dispatcher,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub history_limit: usize,
    pub error_flagging: ErrorFlagging,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            error_flagging: ErrorFlagging::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ResumeConfig {
    pub open_in_browser: bool,
    /// Overrides the delay the `resume` command asks for.
    pub delay_ms: Option<u64>,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            open_in_browser: true,
            delay_ms: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub show_timestamps: bool,
}
