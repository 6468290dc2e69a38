use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;
use unicode_width::UnicodeWidthChar;

use folio_core::actions::{RuntimeAction, TerminalAction, UserAction};
use folio_core::config::Config;
use folio_core::markup::{parse_markup, Segment};
use folio_core::profile;
use folio_core::reducer::{reduce, FolioEffect};
use folio_core::state::{ScrollbackEntry, TerminalState};
use folio_exec::{schedule_open, BrowserOpener, DisabledOpener, LinkOpener, OpenRequest};

const SCROLL_STEP: usize = 5;
const CURSOR: &str = "█";

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste,
            crossterm::cursor::Show
        );
    }
}

#[derive(Debug, Clone, Copy)]
struct UiPalette {
    prompt: Color,
    text: Color,
    error: Color,
    link: Color,
    muted: Color,
}

const PALETTE: UiPalette = UiPalette {
    prompt: Color::Green,
    text: Color::Gray,
    error: Color::Red,
    link: Color::Cyan,
    muted: Color::DarkGray,
};

/// Rendering-only state; everything the session owns lives in `TerminalState`.
#[derive(Debug, Default)]
struct ViewState {
    /// Rows scrolled back from the newest line; 0 follows the bottom.
    scroll_back: usize,
    /// Furthest `scroll_back` the last drawn frame could show.
    max_back: usize,
    show_timestamps: bool,
}

impl ViewState {
    fn scroll_up(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_add(rows).min(self.max_back);
    }

    fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }
}

pub fn run(mut state: TerminalState, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        crossterm::cursor::Hide
    )?;
    let _guard = TuiGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let opener: Arc<dyn LinkOpener> = if config.resume.open_in_browser {
        Arc::new(BrowserOpener)
    } else {
        Arc::new(DisabledOpener)
    };
    let mut view = ViewState {
        show_timestamps: config.ui.show_timestamps,
        ..ViewState::default()
    };

    run_app(&mut terminal, &mut state, &mut view, config, opener).map_err(|e| e.into())
}

enum KeyHandlerResult {
    Continue(Vec<FolioEffect>),
    Exit,
}

fn user(state: &mut TerminalState, action: UserAction) -> Vec<FolioEffect> {
    reduce(state, TerminalAction::User(action))
}

fn handle_key_event(
    key: event::KeyEvent,
    state: &mut TerminalState,
    view: &mut ViewState,
) -> KeyHandlerResult {
    if key.kind == KeyEventKind::Release {
        return KeyHandlerResult::Continue(Vec::new());
    }

    // AltGr arrives as Ctrl+Alt on Windows and produces ordinary characters.
    let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    if shortcut {
        let effects = match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => return KeyHandlerResult::Exit,
            KeyCode::Char('u') => user(state, UserAction::ClearInput),
            KeyCode::Char('l') => {
                reduce(state, TerminalAction::Runtime(RuntimeAction::ResetScrollback))
            }
            KeyCode::Char('v') => match arboard::Clipboard::new().and_then(|mut c| c.get_text()) {
                Ok(text) => user(state, UserAction::Paste(text)),
                Err(err) => {
                    tracing::debug!(error = %err, "clipboard unavailable");
                    Vec::new()
                }
            },
            _ => Vec::new(),
        };
        return KeyHandlerResult::Continue(effects);
    }

    let effects = match key.code {
        KeyCode::Enter => user(state, UserAction::Submit),
        KeyCode::Tab => user(state, UserAction::Complete),
        KeyCode::Up => user(state, UserAction::HistoryUp),
        KeyCode::Down => user(state, UserAction::HistoryDown),
        KeyCode::Backspace => user(state, UserAction::Backspace),
        KeyCode::PageUp => {
            view.scroll_up(SCROLL_STEP);
            Vec::new()
        }
        KeyCode::PageDown => {
            view.scroll_down(SCROLL_STEP);
            Vec::new()
        }
        KeyCode::Char(c) => user(state, UserAction::Input(c)),
        _ => Vec::new(),
    };
    KeyHandlerResult::Continue(effects)
}

fn handle_mouse_event(
    mouse: event::MouseEvent,
    state: &mut TerminalState,
    view: &mut ViewState,
) -> Vec<FolioEffect> {
    match mouse.kind {
        MouseEventKind::Down(_) => user(state, UserAction::Focus),
        MouseEventKind::ScrollUp => {
            view.scroll_up(1);
            Vec::new()
        }
        MouseEventKind::ScrollDown => {
            view.scroll_down(1);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn apply_effects(
    effects: Vec<FolioEffect>,
    view: &mut ViewState,
    config: &Config,
    opener: &Arc<dyn LinkOpener>,
) {
    for effect in effects {
        match effect {
            FolioEffect::ScrollToBottom => view.scroll_back = 0,
            FolioEffect::OpenExternal { url, delay_ms } => {
                let delay_ms = config.resume.delay_ms.unwrap_or(delay_ms);
                tracing::info!(%url, delay_ms, "opening external link");
                schedule_open(Arc::clone(opener), OpenRequest::new(url, delay_ms));
            }
            // The input line is the only focus target and is always drawn with a cursor.
            FolioEffect::FocusInput | FolioEffect::RequestFrame => {}
        }
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut TerminalState,
    view: &mut ViewState,
    config: &Config,
    opener: Arc<dyn LinkOpener>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, state, &mut *view))?;

        if event::poll(Duration::from_millis(16))? {
            let mut effects = Vec::new();
            match event::read()? {
                Event::Key(key) => match handle_key_event(key, state, view) {
                    KeyHandlerResult::Continue(e) => effects.extend(e),
                    KeyHandlerResult::Exit => return Ok(()),
                },
                Event::Mouse(mouse) => effects.extend(handle_mouse_event(mouse, state, view)),
                Event::Paste(text) => effects.extend(user(state, UserAction::Paste(text))),
                Event::FocusGained => effects.extend(user(state, UserAction::Focus)),
                _ => {}
            }
            apply_effects(effects, view, config, &opener);
        }
    }
}

fn prompt_spans(palette: UiPalette) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{}@{}:~$", profile::PROMPT_USER, profile::PROMPT_HOST),
            Style::default()
                .fg(palette.prompt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]
}

fn timestamp_span(entry: &ScrollbackEntry, palette: UiPalette) -> Option<Span<'static>> {
    entry
        .timestamp
        .as_ref()
        .map(|ts| Span::styled(format!("[{ts}] "), Style::default().fg(palette.muted)))
}

fn entry_lines(entry: &ScrollbackEntry, view: &ViewState, palette: UiPalette) -> Vec<Line<'static>> {
    let stamp = if view.show_timestamps {
        timestamp_span(entry, palette)
    } else {
        None
    };

    if entry.is_command() {
        let mut spans: Vec<Span<'static>> = stamp.into_iter().collect();
        spans.extend(prompt_spans(palette));
        spans.push(Span::styled(
            entry.text.clone(),
            Style::default().fg(palette.prompt),
        ));
        return vec![Line::from(spans)];
    }

    let text_style = if entry.is_error {
        Style::default().fg(palette.error)
    } else {
        Style::default().fg(palette.text)
    };

    let mut lines = Vec::new();
    let mut stamp = stamp;
    for raw in entry.text.split('\n') {
        let mut spans: Vec<Span<'static>> = stamp.take().into_iter().collect();
        for segment in parse_markup(raw) {
            match segment {
                Segment::Text(text) => spans.push(Span::styled(text, text_style)),
                Segment::Link { href, label } => {
                    spans.push(Span::styled(
                        label,
                        Style::default()
                            .fg(palette.link)
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                    spans.push(Span::styled(
                        format!(" ({href})"),
                        Style::default().fg(palette.muted),
                    ));
                }
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn build_lines(state: &TerminalState, view: &ViewState, palette: UiPalette) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = state
        .scrollback
        .iter()
        .flat_map(|entry| entry_lines(entry, view, palette))
        .collect();

    let mut input_line = prompt_spans(palette);
    input_line.push(Span::styled(
        state.input.clone(),
        Style::default().fg(palette.text),
    ));
    input_line.push(Span::styled(
        CURSOR,
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::SLOW_BLINK),
    ));
    lines.push(Line::from(input_line));
    lines
}

/// Hard-wraps `line` into rows no wider than `width` columns, keeping span styles.
fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line];
    }
    let mut rows = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;
    for span in line.spans {
        let style = span.style;
        let mut chunk = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > width && current_width > 0 {
                if !chunk.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut chunk), style));
                }
                rows.push(Line::from(std::mem::take(&mut current)));
                current_width = 0;
            }
            chunk.push(ch);
            current_width += w;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, style));
        }
    }
    rows.push(Line::from(current));
    rows
}

/// Returns the rows that fit `area` after scrolling back, plus the furthest
/// scroll-back these lines allow.
fn visible_rows(
    lines: Vec<Line<'static>>,
    area: Rect,
    scroll_back: usize,
) -> (Vec<Line<'static>>, usize) {
    let rows: Vec<Line<'static>> = lines
        .into_iter()
        .flat_map(|line| wrap_line(line, area.width as usize))
        .collect();
    let height = area.height as usize;
    let max_back = rows.len().saturating_sub(height);
    let back = scroll_back.min(max_back);
    let end = rows.len() - back;
    let start = end.saturating_sub(height);
    (rows[start..end].to_vec(), max_back)
}

fn ui(f: &mut ratatui::Frame, state: &TerminalState, view: &mut ViewState) {
    let palette = PALETTE;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(f.area());

    let body = chunks[0].inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 0,
    });
    let lines = build_lines(state, view, palette);
    let (rows, max_back) = visible_rows(lines, body, view.scroll_back);
    view.max_back = max_back;
    view.scroll_back = view.scroll_back.min(max_back);
    f.render_widget(Paragraph::new(rows), body);

    let tip = if view.scroll_back > 0 {
        "Scrolled back. PageDown or type to return to the prompt."
    } else {
        "Tip: Use Tab for auto-completion, ↑↓ for command history"
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        tip,
        Style::default().fg(palette.muted),
    )))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.muted)),
    );
    f.render_widget(footer, chunks[1]);
}
