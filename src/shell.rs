//! Line-oriented command interpreter over an append-only scrollback transcript.
//!
//! Not a real process shell: the command vocabulary is fixed, `ls`/`pwd`
//! output describes a fixed notional working directory, and nothing here
//! executes host commands or touches a real filesystem.

use serde::{Deserialize, Serialize};

/// Lines every session starts from, restored in full by `clear`.
pub const BANNER: [&str; 3] = [
    "WebContainer Terminal v1.0.0",
    "Note: Limited to browser-compatible commands",
    "",
];

/// Prefix echoed in front of every submitted line.
pub const PROMPT: &str = "$ ";

/// How a dispatch table entry recognizes a line.
enum Matcher {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Matcher {
    fn matches(&self, line: &str) -> bool {
        match self {
            Matcher::Exact(word) => line == *word,
            Matcher::Prefix(prefix) => line.starts_with(prefix),
        }
    }
}

/// What a handler asks the shell to do with the transcript.
enum Outcome {
    Append(Vec<String>),
    Reset,
}

struct Command {
    name: &'static str,
    summary: &'static str,
    matcher: Matcher,
    run: fn(&str) -> Outcome,
}

/// Ordered dispatch table, evaluated top to bottom. Exact matches sit above
/// the `echo ` prefix entry, so a bare `echo` falls through to unknown.
const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        summary: "Show this help message",
        matcher: Matcher::Exact("help"),
        run: run_help,
    },
    Command {
        name: "clear",
        summary: "Clear terminal",
        matcher: Matcher::Exact("clear"),
        run: run_clear,
    },
    Command {
        name: "pwd",
        summary: "Print working directory",
        matcher: Matcher::Exact("pwd"),
        run: run_pwd,
    },
    Command {
        name: "ls",
        summary: "List directory contents",
        matcher: Matcher::Exact("ls"),
        run: run_ls,
    },
    Command {
        name: "echo",
        summary: "Display message",
        matcher: Matcher::Prefix("echo "),
        run: run_echo,
    },
];

fn run_help(_line: &str) -> Outcome {
    let mut lines = vec!["Available commands:".to_string()];
    for cmd in COMMANDS {
        lines.push(format!("  {:<8} - {}", cmd.name, cmd.summary));
    }
    lines.push(String::new());
    Outcome::Append(lines)
}

fn run_clear(_line: &str) -> Outcome {
    Outcome::Reset
}

fn run_pwd(_line: &str) -> Outcome {
    Outcome::Append(vec!["/home/project".to_string(), String::new()])
}

// Deliberately decoupled from any live VirtualFileTree contents.
fn run_ls(_line: &str) -> Outcome {
    Outcome::Append(vec![
        "src  public  package.json  README.md".to_string(),
        String::new(),
    ])
}

fn run_echo(line: &str) -> Outcome {
    Outcome::Append(vec![line["echo ".len()..].to_string(), String::new()])
}

fn dispatch(line: &str) -> Outcome {
    for cmd in COMMANDS {
        if cmd.matcher.matches(line) {
            return (cmd.run)(line);
        }
    }
    Outcome::Append(vec![format!("Command not found: {line}"), String::new()])
}

/// Immutable shell session state: the scrollback transcript plus the
/// not-yet-submitted input line.
///
/// [`ShellState::submit`] is the sole transition and is a pure function;
/// the transcript is append-only except for the full reset performed by
/// `clear`. Each session owns its own state — nothing is shared or
/// persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    transcript: Vec<String>,
    pending_input: String,
}

impl ShellState {
    /// Fresh session starting from the fixed banner.
    pub fn new() -> Self {
        Self {
            transcript: banner(),
            pending_input: String::new(),
        }
    }

    /// Transcript lines, oldest first.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Replace the pending input line; the host calls this per keystroke.
    pub fn set_pending_input(&mut self, line: impl Into<String>) {
        self.pending_input = line.into();
    }

    /// Interpret one submitted line and produce the next state.
    ///
    /// A line that is blank after trimming leaves the transcript unchanged.
    /// Otherwise the trimmed line is echoed as `"$ " + line` and dispatched,
    /// case-sensitively, against the command table; unrecognized lines emit
    /// a `Command not found` diagnostic, which is a normal outcome rather
    /// than an error. The produced state always has an empty pending input.
    pub fn submit(&self, line: &str) -> ShellState {
        let line = line.trim();
        if line.is_empty() {
            return ShellState {
                transcript: self.transcript.clone(),
                pending_input: String::new(),
            };
        }

        let mut transcript = self.transcript.clone();
        transcript.push(format!("{PROMPT}{line}"));
        match dispatch(line) {
            Outcome::Append(lines) => transcript.extend(lines),
            Outcome::Reset => transcript = banner(),
        }

        ShellState {
            transcript,
            pending_input: String::new(),
        }
    }

    /// Submit the current pending input, the host's Enter-key path.
    pub fn submit_pending(&self) -> ShellState {
        self.submit(&self.pending_input)
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

fn banner() -> Vec<String> {
    BANNER.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matcher_does_not_match_prefixes() {
        assert!(Matcher::Exact("pwd").matches("pwd"));
        assert!(!Matcher::Exact("pwd").matches("pwd "));
        assert!(!Matcher::Exact("pwd").matches("pwdx"));
    }

    #[test]
    fn echo_prefix_requires_the_trailing_space() {
        assert!(Matcher::Prefix("echo ").matches("echo hi"));
        assert!(Matcher::Prefix("echo ").matches("echo "));
        assert!(!Matcher::Prefix("echo ").matches("echo"));
    }

    #[test]
    fn help_block_is_generated_from_the_table() {
        let Outcome::Append(lines) = run_help("help") else {
            panic!("help must append");
        };
        assert_eq!(lines[0], "Available commands:");
        // one row per command, plus header and trailing blank
        assert_eq!(lines.len(), COMMANDS.len() + 2);
        assert_eq!(lines[1], "  help     - Show this help message");
        assert_eq!(lines.last().map(String::as_str), Some(""));
    }

    #[test]
    fn exact_commands_sit_above_the_echo_prefix() {
        let exact_count = COMMANDS
            .iter()
            .take_while(|c| matches!(c.matcher, Matcher::Exact(_)))
            .count();
        assert_eq!(exact_count, COMMANDS.len() - 1);
    }
}
