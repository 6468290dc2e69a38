use std::env;
use std::path::PathBuf;

use folio_core::config::Config;
use folio_core::dispatcher::dispatch;
use folio_core::dispatcher::DispatchEffect;
use folio_core::markup::to_plain_text;
use folio_core::state::TerminalState;
use folio_exec::{open_after_delay, BrowserOpener, DisabledOpener, LinkOpener, OpenRequest};

mod config;
mod logging;
mod ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    mode: Mode,
    config_path: Option<PathBuf>,
    json: bool,
}

#[derive(Debug, Default, PartialEq)]
enum Mode {
    #[default]
    Interactive,
    Exec(Vec<String>),
    DumpState,
    Help,
    Version,
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args(env::args().skip(1).collect())?;

    match args.mode {
        Mode::Help => {
            print_help();
            Ok(())
        }
        Mode::Version => {
            println!("folio {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Mode::DumpState => {
            logging::init_stderr();
            let config = config::resolve_config(args.config_path.as_deref())?;
            let state = TerminalState::new(config.session);
            println!("{}", serde_json::to_string_pretty(&state)?);
            Ok(())
        }
        Mode::Exec(words) => {
            logging::init_stderr();
            let config = config::resolve_config(args.config_path.as_deref())?;
            let opener: Box<dyn LinkOpener> = if config.resume.open_in_browser {
                Box::new(BrowserOpener)
            } else {
                Box::new(DisabledOpener)
            };
            run_exec(&words.join(" "), args.json, &config, opener.as_ref())
        }
        Mode::Interactive => {
            let _log_guard = match config::default_log_dir() {
                Some(dir) => Some(logging::init_file(&dir)?),
                None => None,
            };
            let config = config::resolve_config(args.config_path.as_deref())?;
            run_interactive(config)
        }
    }
}

fn run_interactive(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        history_limit = config.session.history_limit,
        error_flagging = ?config.session.error_flagging,
        "starting folio session"
    );
    let state = TerminalState::new(config.session);
    let result = ui::run(state, &config);
    tracing::info!("folio session ended");
    result
}

/// One-shot mode. The process would exit before a detached open fires, so a
/// requested open runs on this thread once the output is printed.
fn run_exec(
    line: &str,
    json: bool,
    config: &Config,
    opener: &dyn LinkOpener,
) -> Result<(), Box<dyn std::error::Error>> {
    let dispatched = dispatch(line, &[], None);
    if json {
        println!("{}", serde_json::to_string_pretty(&dispatched)?);
    } else if !dispatched.output.is_empty() {
        println!("{}", to_plain_text(&dispatched.output));
    }

    if let Some(DispatchEffect::OpenExternal { url, delay_ms }) = dispatched.effect {
        let delay_ms = config.resume.delay_ms.unwrap_or(delay_ms);
        tracing::info!(%url, delay_ms, "opening external link");
        if let Err(err) = open_after_delay(opener, &OpenRequest::new(url, delay_ms)) {
            tracing::warn!(error = %err, "external open failed");
        }
    }
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut parsed = CliArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => {
                parsed.mode = Mode::Help;
                return Ok(parsed);
            }
            "--version" | "-V" => {
                parsed.mode = Mode::Version;
                return Ok(parsed);
            }
            "--config" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--config requires a path".into());
                };
                parsed.config_path = Some(PathBuf::from(value));
                i += 2;
            }
            "--json" => {
                parsed.json = true;
                i += 1;
            }
            "--dump-state" => {
                parsed.mode = Mode::DumpState;
                i += 1;
            }
            "run" => {
                parsed.mode = Mode::Interactive;
                i += 1;
            }
            "exec" => {
                let words: Vec<String> = args[i + 1..].to_vec();
                if words.is_empty() {
                    return Err("exec requires a command line".into());
                }
                parsed.mode = Mode::Exec(words);
                return Ok(parsed);
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(parsed)
}

fn print_help() {
    println!(
        "folio - a portfolio you browse from a terminal prompt

Usage:
  folio [run] [--config <path>]          Start the interactive terminal
  folio [--json] exec <command line...>  Run one command and print its output
  folio --dump-state [--config <path>]   Print the initial session state as JSON
  folio --help | --version

Environment:
  FOLIO_LOG    log filter (for example: debug, folio_core=trace)

Keys:
  Enter submit, Tab complete, Up/Down history, PageUp/PageDown scroll,
  Ctrl+U clear line, Ctrl+L clear screen, Ctrl+V paste, Ctrl+C or Ctrl+D quit"
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn no_arguments_start_interactive() {
        assert_eq!(parse_args(Vec::new()).expect("parse"), CliArgs::default());
        assert_eq!(
            parse_args(args(&["run"])).expect("parse").mode,
            Mode::Interactive
        );
    }

    #[test]
    fn exec_takes_the_rest_of_the_line() {
        let parsed = parse_args(args(&["--json", "exec", "projects", "view", "--config"]))
            .expect("parse");
        assert!(parsed.json);
        assert_eq!(
            parsed.mode,
            Mode::Exec(args(&["projects", "view", "--config"]))
        );
        assert!(parse_args(args(&["exec"])).is_err());
    }

    #[test]
    fn config_flag_needs_a_value() {
        let parsed = parse_args(args(&["--config", "/tmp/folio.toml"])).expect("parse");
        assert_eq!(parsed.config_path, Some(PathBuf::from("/tmp/folio.toml")));
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), folio_exec::OpenError> {
            self.opened.lock().expect("lock").push(url.to_string());
            Ok(())
        }
    }

    fn instant_config() -> Config {
        let mut config = Config::default();
        config.resume.delay_ms = Some(0);
        config
    }

    #[test]
    fn exec_renders_without_errors() {
        let config = instant_config();
        assert!(run_exec("projects view api-nexus", false, &config, &DisabledOpener).is_ok());
        assert!(run_exec("resume", true, &config, &DisabledOpener).is_ok());
    }

    #[test]
    fn exec_resume_opens_the_resume_link() {
        let config = instant_config();
        let opener = RecordingOpener {
            opened: Mutex::new(Vec::new()),
        };

        run_exec("resume", false, &config, &opener).expect("exec");
        run_exec("skills", false, &config, &opener).expect("exec");

        let opened = opener.opened.lock().expect("lock").clone();
        assert_eq!(opened, vec![folio_core::profile::RESUME_URL.to_string()]);
    }
}
