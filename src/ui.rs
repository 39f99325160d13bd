//! Terminal UI — spinners, stage output, and captured command execution.
//!
//! # Design goals
//!
//! - **Clean by default.** While a tool runs the user sees the attempted command line and a
//!   spinner.  Raw pg_dump/pg_restore output is captured and hidden.
//! - **Informative on failure.** If a tool exits non-zero its captured stdout *and* stderr are
//!   printed in full so the operator can diagnose the problem without re-running manually.
//! - **Credential hygiene.** The password travels via `PGPASSWORD` in the child's environment
//!   only; it is never placed in argv, never printed, and never exported into this process.
//!
//! # Typical usage
//!
//! ```no_run
//! use pgbackup_rs::ui::run_stage;
//!
//! let outcome = run_stage("Dump", &["pg_dump".into(), "--version".into()], "");
//! outcome.print();
//! if outcome.failed() { /* map outcome.code into the error taxonomy */ }
//! ```

use std::{
    process::{Command, Output, Stdio},
    time::Duration,
};

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

// ─── Icons ───────────────────────────────────────────────────────────────────

/// Braille spinner frames — same style as indicatif's default.
static SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Green ✓  — printed when a stage succeeds.
fn icon_ok() -> console::StyledObject<&'static str> {
    style("✓").green().bold()
}
/// Red ✗    — printed when a stage fails.
fn icon_err() -> console::StyledObject<&'static str> {
    style("✗").red().bold()
}

// ─── Stage result ─────────────────────────────────────────────────────────────

/// The outcome of a single external tool invocation.
///
/// Carries the stage label, the tool's exit code, and whatever the command
/// wrote to stdout/stderr so it can be replayed to the terminal when
/// something goes wrong.
#[derive(Debug)]
pub struct StageOutcome {
    /// Human-readable stage label, e.g. `"Dump"`.
    pub label: String,
    /// Whether the tool exited zero.
    pub success: bool,
    /// The tool's exit code; `None` when it could not be spawned at all or
    /// was killed by a signal.
    pub code: Option<i32>,
    /// Everything the command wrote to stdout.
    pub stdout: String,
    /// Everything the command wrote to stderr.
    pub stderr: String,
    /// The anyhow error message, if any.
    pub error: Option<String>,
}

impl StageOutcome {
    /// Print the one-line summary (✓/✗ + label) to stdout.
    ///
    /// On failure, also prints the captured stdout/stderr and the error
    /// message so the operator has everything they need without re-running.
    pub fn print(&self) {
        if self.success {
            println!("  {}  {}", icon_ok(), style(&self.label).bold());
        } else {
            println!("  {}  {}", icon_err(), style(&self.label).bold());

            // Print the error message first (most useful thing).
            if let Some(ref msg) = self.error {
                eprintln!();
                eprintln!("  {} {}", style("Error:").red().bold(), msg);
            }

            // Replay captured output so the operator can see what the tool said.
            if !self.stdout.is_empty() {
                eprintln!();
                eprintln!("  {} stdout:", style("►").dim());
                for line in self.stdout.lines() {
                    eprintln!("    {line}");
                }
            }
            if !self.stderr.is_empty() {
                eprintln!();
                eprintln!("  {} stderr:", style("►").dim());
                for line in self.stderr.lines() {
                    eprintln!("    {line}");
                }
            }
        }
    }

    /// Returns `true` if the stage did not succeed.
    pub const fn failed(&self) -> bool {
        !self.success
    }

    /// Exit code for the error taxonomy: the tool's own code, or -1 when it
    /// died without one (spawn failure, signal).
    pub fn failure_code(&self) -> i32 {
        self.code.unwrap_or(-1)
    }
}

// ─── Spinner ──────────────────────────────────────────────────────────────────

/// Create and start an indeterminate spinner for `label`.
///
/// The spinner ticks at ~80 ms and is automatically cleared when
/// [`ProgressBar::finish_and_clear`] is called.
fn make_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan}  {msg}")
            .unwrap()
            .tick_chars(SPINNER_CHARS),
    );
    pb.set_message(format!("{}", style(label).dim()));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

// ─── Captured execution ───────────────────────────────────────────────────────

/// Run a command, capturing both stdout and stderr.
///
/// `password`, when non-empty, is set as `PGPASSWORD` on the child process
/// environment only — the parent environment is never modified, and an
/// operator running with an empty password keeps whatever `PGPASSWORD` the
/// surrounding environment already carries.
///
/// Returns `(exit_code, success, stdout_text, stderr_text)`.
pub fn run_captured(
    args: &[String],
    password: &str,
) -> Result<(Option<i32>, bool, String, String)> {
    let (prog, rest) = args.split_first().context("cannot run an empty command")?;

    let mut command = Command::new(prog);
    command.args(rest).stdout(Stdio::piped()).stderr(Stdio::piped());
    if !password.is_empty() {
        command.env("PGPASSWORD", password);
    }

    let output: Output = command
        .output()
        .with_context(|| format!("failed to spawn: {}", args.join(" ")))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    Ok((
        output.status.code(),
        output.status.success(),
        stdout,
        stderr,
    ))
}

// ─── High-level stage runner ──────────────────────────────────────────────────

/// Run one external tool behind a spinner, returning a [`StageOutcome`].
///
/// The full argument vector is echoed before execution so the operator log
/// always records exactly what was attempted.  The password is **not** part
/// of that vector (see [`run_captured`]), so the echo is safe.
///
/// The spinner is cleared before the outcome line is printed, so the terminal
/// always shows a clean, static summary when the stage finishes.
pub fn run_stage(label: &str, args: &[String], password: &str) -> StageOutcome {
    println!("  {} {}", style("$").dim(), style(args.join(" ")).dim());

    let spinner = make_spinner(label);
    let result = run_captured(args, password);
    spinner.finish_and_clear();

    match result {
        Ok((code, true, stdout, stderr)) => StageOutcome {
            label: label.to_string(),
            success: true,
            code,
            stdout,
            stderr,
            error: None,
        },
        Ok((code, false, stdout, stderr)) => StageOutcome {
            label: label.to_string(),
            success: false,
            code,
            stdout,
            stderr,
            error: Some(format!("command exited non-zero: {}", args.join(" "))),
        },
        Err(e) => StageOutcome {
            label: label.to_string(),
            success: false,
            code: None,
            stdout: String::new(),
            stderr: String::new(),
            error: Some(e.to_string()),
        },
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
