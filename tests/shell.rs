use sandbench::{BANNER, ShellState};

fn lines(state: &ShellState) -> Vec<&str> {
    state.transcript().iter().map(String::as_str).collect()
}

#[test]
fn fresh_session_starts_from_the_banner() {
    let shell = ShellState::new();
    assert_eq!(lines(&shell), BANNER);
    assert_eq!(shell.pending_input(), "");
}

#[test]
fn blank_submissions_leave_the_transcript_unchanged() {
    let shell = ShellState::new();
    assert_eq!(shell.submit("").transcript(), shell.transcript());
    assert_eq!(shell.submit("   ").transcript(), shell.transcript());
    assert_eq!(shell.submit("\t").transcript(), shell.transcript());
}

#[test]
fn pwd_prints_the_fixed_working_directory() {
    let shell = ShellState::new().submit("pwd");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(appended, ["$ pwd", "/home/project", ""]);
}

#[test]
fn ls_prints_the_fixed_listing() {
    let shell = ShellState::new().submit("ls");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(appended, ["$ ls", "src  public  package.json  README.md", ""]);
}

#[test]
fn echo_prints_the_remainder_verbatim() {
    let shell = ShellState::new().submit("echo hello world");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(appended, ["$ echo hello world", "hello world", ""]);
}

#[test]
fn echo_preserves_internal_whitespace() {
    let shell = ShellState::new().submit("echo a   b");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(appended, ["$ echo a   b", "a   b", ""]);
}

#[test]
fn bare_echo_is_not_a_command() {
    let shell = ShellState::new().submit("echo");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(appended, ["$ echo", "Command not found: echo", ""]);
}

#[test]
fn unknown_commands_emit_a_diagnostic_line() {
    let shell = ShellState::new().submit("foobar");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(appended, ["$ foobar", "Command not found: foobar", ""]);
}

#[test]
fn dispatch_is_case_sensitive() {
    let shell = ShellState::new().submit("PWD");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(appended, ["$ PWD", "Command not found: PWD", ""]);
}

#[test]
fn help_lists_every_command() {
    let shell = ShellState::new().submit("help");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(
        appended,
        [
            "$ help",
            "Available commands:",
            "  help     - Show this help message",
            "  clear    - Clear terminal",
            "  pwd      - Print working directory",
            "  ls       - List directory contents",
            "  echo     - Display message",
            "",
        ]
    );
}

#[test]
fn clear_discards_everything_including_its_own_echo() {
    let shell = ShellState::new()
        .submit("ls")
        .submit("echo scratch")
        .submit("clear");
    assert_eq!(lines(&shell), BANNER);
}

#[test]
fn clear_round_trips_to_a_fresh_session() {
    let shell = ShellState::new().submit("help").submit("pwd").submit("clear");
    assert_eq!(shell, ShellState::new());
}

#[test]
fn transcript_accumulates_in_submission_order() {
    let shell = ShellState::new().submit("pwd").submit("ls");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(
        appended,
        [
            "$ pwd",
            "/home/project",
            "",
            "$ ls",
            "src  public  package.json  README.md",
            "",
        ]
    );
}

#[test]
fn submit_clears_the_pending_input() {
    let mut shell = ShellState::new();
    shell.set_pending_input("pwd");
    assert_eq!(shell.pending_input(), "pwd");

    let next = shell.submit_pending();
    assert_eq!(next.pending_input(), "");
    assert_eq!(next.transcript().last().map(String::as_str), Some(""));
    assert!(next.transcript().contains(&"/home/project".to_string()));
}

#[test]
fn blank_submit_still_clears_the_pending_input() {
    let mut shell = ShellState::new();
    shell.set_pending_input("   ");
    let next = shell.submit_pending();
    assert_eq!(next.pending_input(), "");
    assert_eq!(next.transcript(), shell.transcript());
}

#[test]
fn leading_and_trailing_whitespace_is_trimmed_before_dispatch() {
    let shell = ShellState::new().submit("  pwd  ");
    let appended = &shell.transcript()[BANNER.len()..];
    assert_eq!(appended, ["$ pwd", "/home/project", ""]);
}
