use std::time::Duration;

use chrono::Local;
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use super::markup::create_link;
use super::profile;
use super::profile::find_project;
use super::profile::PROJECTS;

pub const RESUME_OPEN_DELAY: Duration = Duration::from_millis(500);

const HELP_TYPOS: &[&str] = &["hep", "hlep", "hepl"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Normal,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispatchEffect {
    /// Open `url` in a new browsing context once `delay_ms` has elapsed.
    /// Fire-and-forget: nothing reports back whether the open worked.
    OpenExternal { url: String, delay_ms: u64 },
}

impl DispatchEffect {
    pub fn delay(&self) -> Duration {
        match self {
            Self::OpenExternal { delay_ms, .. } => Duration::from_millis(*delay_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub output: String,
    pub kind: OutputKind,
    pub effect: Option<DispatchEffect>,
}

impl Dispatch {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            kind: OutputKind::Normal,
            effect: None,
        }
    }

    fn error(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            kind: OutputKind::Error,
            effect: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == OutputKind::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Whoami,
    Skills,
    Projects,
    Contact,
    Resume,
    Clear,
    Date,
    Ls,
    Pwd,
    Cat,
    Sudo,
    Exit,
    Logout,
    History,
    Echo,
    Version,
}

impl Command {
    pub const ALL: [Command; 18] = [
        Command::Help,
        Command::About,
        Command::Whoami,
        Command::Skills,
        Command::Projects,
        Command::Contact,
        Command::Resume,
        Command::Clear,
        Command::Date,
        Command::Ls,
        Command::Pwd,
        Command::Cat,
        Command::Sudo,
        Command::Exit,
        Command::Logout,
        Command::History,
        Command::Echo,
        Command::Version,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "help" => Some(Self::Help),
            "about" => Some(Self::About),
            "whoami" => Some(Self::Whoami),
            "skills" => Some(Self::Skills),
            "projects" => Some(Self::Projects),
            "contact" => Some(Self::Contact),
            "resume" => Some(Self::Resume),
            "clear" => Some(Self::Clear),
            "date" => Some(Self::Date),
            "ls" => Some(Self::Ls),
            "pwd" => Some(Self::Pwd),
            "cat" => Some(Self::Cat),
            "sudo" => Some(Self::Sudo),
            "exit" => Some(Self::Exit),
            "logout" => Some(Self::Logout),
            "history" => Some(Self::History),
            "echo" => Some(Self::Echo),
            "version" | "--version" => Some(Self::Version),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Whoami => "whoami",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Resume => "resume",
            Self::Clear => "clear",
            Self::Date => "date",
            Self::Ls => "ls",
            Self::Pwd => "pwd",
            Self::Cat => "cat",
            Self::Sudo => "sudo",
            Self::Exit => "exit",
            Self::Logout => "logout",
            Self::History => "history",
            Self::Echo => "echo",
            Self::Version => "version",
        }
    }
}

/// Maps one command line to its output.
///
/// The line is lowercased and split on whitespace. `completions` switches `help`
/// into completion-listing mode. `reset` is invoked by `clear`, which returns an
/// empty output. Every input yields a `Dispatch`; there is no failure path.
pub fn dispatch(
    raw_line: &str,
    completions: &[&str],
    reset: Option<&mut dyn FnMut()>,
) -> Dispatch {
    let line = raw_line.trim().to_lowercase();
    let mut tokens = line.split_whitespace();
    let cmd = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();
    debug!(command = cmd, args = args.len(), "dispatching command");

    let Some(command) = Command::from_token(cmd) else {
        return not_found(cmd);
    };

    match command {
        Command::Help => help(completions),
        Command::About | Command::Whoami => about(command.name()),
        Command::Skills => skills(),
        Command::Projects => projects(&args),
        Command::Contact => contact(),
        Command::Resume => resume(),
        Command::Clear => {
            if let Some(reset) = reset {
                reset();
            }
            Dispatch::text(String::new())
        }
        Command::Date => date(),
        Command::Ls => ls(),
        Command::Pwd => pwd(),
        Command::Cat => cat(args.first().copied()),
        Command::Sudo => sudo(&args),
        Command::Exit | Command::Logout => exit(command.name()),
        Command::History => history(),
        Command::Echo => echo(&args),
        Command::Version => version(),
    }
}

fn help(completions: &[&str]) -> Dispatch {
    if !completions.is_empty() {
        return Dispatch::text(format!("Available completions: {}", completions.join(", ")));
    }
    Dispatch::text(
        "Available commands:
help          - Shows this list of commands
about         - Displays a short bio
whoami        - Alias for 'about'
skills        - Lists my technical skills
projects      - Shows my recent work
  projects view <name> - View details of a specific project
contact       - Displays my contact information
resume        - Provides a link to my resume
clear         - Clears the terminal screen
date          - Shows current date and time
echo <text>   - Prints the given text
history       - Shows recent commands
version       - Shows the portfolio version

Easter eggs: Try 'sudo', 'ls', 'pwd', 'cat', or any invalid command!",
    )
}

fn about(alias: &str) -> Dispatch {
    Dispatch::text(format!("> {alias}\n\n{}", profile::BIO))
}

fn skills() -> Dispatch {
    let width = profile::SKILLS
        .iter()
        .map(|(category, _)| category.len() + 1)
        .max()
        .unwrap_or(0);
    let rows: Vec<String> = profile::SKILLS
        .iter()
        .map(|(category, items)| format!("{:<width$} {}", format!("{category}:"), items))
        .collect();
    Dispatch::text(format!("> skills\n\n{}", rows.join("\n")))
}

fn projects(args: &[&str]) -> Dispatch {
    match args {
        [] => {
            let listing: Vec<String> = PROJECTS
                .iter()
                .map(|project| format!("- {} ({})", project.name, project.status.label()))
                .collect();
            Dispatch::text(format!(
                "> projects

Here are my featured projects.
To see details, type 'projects view <project-name>'.

Featured Projects:
{}

Example: projects view api-nexus",
                listing.join("\n")
            ))
        }
        ["view", name, ..] => match find_project(name) {
            Some(project) => {
                let links: Vec<String> = [
                    project.demo_url.map(|url| create_link(url, "[Live Demo]")),
                    project.source_url.map(|url| create_link(url, "[GitHub]")),
                ]
                .into_iter()
                .flatten()
                .collect();
                Dispatch::text(format!(
                    "> projects view {}

Title:       {}
Description: {}
Stack:       {}
Status:      {}
Links:       {}",
                    project.name,
                    project.title,
                    project.description,
                    project.stack,
                    project.status.label(),
                    links.join("  ")
                ))
            }
            None => Dispatch::error(format!(
                "Project '{name}' not found. Use 'projects' to see available projects."
            )),
        },
        _ => Dispatch::error(
            "Usage: projects [view <project-name>]\nUse 'projects' to list all projects.",
        ),
    }
}

fn contact() -> Dispatch {
    let rows: Vec<String> = profile::CONTACTS
        .iter()
        .map(|contact| {
            format!(
                "{:<11} {}",
                format!("{}:", contact.label),
                create_link(contact.url, contact.text)
            )
        })
        .collect();
    Dispatch::text(format!(
        "> contact

You can reach me via:

{}

Feel free to reach out for collaboration opportunities,
technical discussions, or just to say hello!",
        rows.join("\n")
    ))
}

fn resume() -> Dispatch {
    Dispatch {
        output: format!(
            "> resume

Opening my resume... 📄

You can also view my full portfolio: {}
GitHub Profile: {}",
            create_link(profile::PORTFOLIO_URL, "Shantanu_Tiwari_Portfolio"),
            create_link(profile::GITHUB_URL, "github.com/Shantanu-Tiwari")
        ),
        kind: OutputKind::Normal,
        effect: Some(DispatchEffect::OpenExternal {
            url: profile::RESUME_URL.to_string(),
            delay_ms: RESUME_OPEN_DELAY.as_millis() as u64,
        }),
    }
}

fn date() -> Dispatch {
    let local = Local::now();
    Dispatch::text(format!(
        "> date\n\n{}\n{}",
        local.format("%a %b %d %Y %H:%M:%S"),
        Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    ))
}

fn ls() -> Dispatch {
    let user = profile::PROMPT_USER;
    Dispatch::text(format!(
        "> ls

total 8
drwxr-xr-x  2 {user} {user} 4096 Jul 19 10:30 projects/
drwxr-xr-x  2 {user} {user} 4096 Jul 19 10:30 skills/
-rw-r--r--  1 {user} {user} 1024 Jul 19 10:30 about.txt
-rw-r--r--  1 {user} {user} 2048 Jul 19 10:30 resume.pdf
-rw-r--r--  1 {user} {user}  512 Jul 19 10:30 contact.txt

Hint: Try using the available commands instead! Type 'help' for options."
    ))
}

fn pwd() -> Dispatch {
    Dispatch::text(format!(
        "> pwd\n\n{}\n~\nYou are currently browsing {}'s portfolio terminal.",
        profile::HOME_DIR,
        profile::OWNER_NAME
    ))
}

fn cat(target: Option<&str>) -> Dispatch {
    match target {
        Some("about.txt") => dispatch("about", &[], None),
        Some("contact.txt") => dispatch("contact", &[], None),
        other => Dispatch::error(format!(
            "cat: {}: No such file or directory\nTry 'cat about.txt' or 'cat contact.txt'",
            other.unwrap_or("filename")
        )),
    }
}

fn sudo(args: &[&str]) -> Dispatch {
    let command = if args.is_empty() {
        "command".to_string()
    } else {
        args.join(" ")
    };
    let user = profile::PROMPT_USER;
    Dispatch::text(format!(
        "[sudo] password for {user}:
sudo: {command}: command not found
{user} is not in the sudoers file. This incident will be reported.

(Just kidding! But you don't need sudo privileges here 😄)"
    ))
}

fn exit(alias: &str) -> Dispatch {
    Dispatch::text(format!(
        "> {alias}

Thanks for visiting my portfolio! 👋
To continue exploring, try other commands or press Ctrl+C to leave.

Connection to portfolio maintained... (this is a terminal portfolio!)"
    ))
}

fn history() -> Dispatch {
    let mut rows: Vec<String> = (1..=5).map(|n| format!("  {n}  help")).collect();
    rows.extend(
        ["about", "skills", "projects"]
            .iter()
            .enumerate()
            .map(|(idx, cmd)| format!("  {}  {cmd}", idx + 6)),
    );
    Dispatch::text(format!(
        "> history\n\nRecent commands:\n{}\n\nUse ↑↓ arrow keys to navigate command history.",
        rows.join("\n")
    ))
}

fn echo(args: &[&str]) -> Dispatch {
    let text = args.join(" ");
    Dispatch::text(format!("> echo {text}\n\n{text}"))
}

fn version() -> Dispatch {
    Dispatch::text(format!(
        "> version

Portfolio Terminal v{}
Built with: {}
Runtime: Terminal ({}/{})
Author: {}",
        profile::PORTFOLIO_VERSION,
        profile::BUILT_WITH,
        std::env::consts::OS,
        std::env::consts::ARCH,
        profile::OWNER_NAME
    ))
}

fn not_found(cmd: &str) -> Dispatch {
    if HELP_TYPOS.contains(&cmd) {
        return Dispatch::error(format!(
            "Did you mean 'help'?\n\nbash: {cmd}: command not found"
        ));
    }
    Dispatch::error(format!(
        "bash: {cmd}: command not found\nType 'help' for a list of available commands."
    ))
}
