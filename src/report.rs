//! Start/end banners and the final run result.
//!
//! Every run — success, validation failure, tool failure, even a failed
//! argument parse — ends with the same fixed-format banner.  Downstream job
//! schedulers grep its `ExitCode:` and `ExitMessage:` lines, so those two
//! stay plain `key:value` text with no styling applied to the key.

use chrono::Local;
use console::style;

use crate::error::OrchestratorError;

/// Horizontal rule matching the banner width used by the operator logs.
const RULE: &str =
    "───────────────────────────────────────────────────────────────────────────────";

/// The final result of a run: exit code plus human-readable message.
///
/// Constructed exactly once per process, consumed exactly once by
/// [`print_end_banner`] and the process exit.
#[derive(Debug)]
pub struct RunResult {
    pub code: i32,
    pub message: String,
}

impl RunResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
        }
    }

    pub fn failure(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Collapse a pipeline outcome into the reportable result.
    pub fn from_outcome(outcome: Result<String, OrchestratorError>) -> Self {
        match outcome {
            Ok(message) => Self::success(message),
            Err(e) => Self::failure(e.exit_code(), e.to_string()),
        }
    }

    pub const fn succeeded(&self) -> bool {
        self.code == 0
    }
}

/// Print the opening banner: title, start time, platform.
pub fn print_start_banner(title: &str) {
    println!("{}", style(RULE).dim());
    println!("{}", style(title).bold());
    println!(
        "Start of Main Processing - {}",
        Local::now().format("%H:%M:%S")
    );
    println!("OS: {}", std::env::consts::OS);
}

/// Print the closing banner and return nothing — the caller exits with
/// `result.code` immediately afterwards.
pub fn print_end_banner(result: &RunResult) {
    let status = if result.succeeded() {
        style(result.code).green().bold()
    } else {
        style(result.code).red().bold()
    };

    println!();
    println!("{}", style(RULE).dim());
    println!("ExitCode:{status}");
    println!("ExitMessage:{}", result.message);
    println!(
        "End of Main Processing - {}",
        Local::now().format("%H:%M:%S")
    );
    println!("{}", style(RULE).dim());
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_result_has_code_zero() {
        let r = RunResult::success("all done");
        assert_eq!(r.code, 0);
        assert!(r.succeeded());
    }

    #[test]
    fn failure_result_keeps_code_and_message() {
        let r = RunResult::failure(99, "it broke");
        assert_eq!(r.code, 99);
        assert!(!r.succeeded());
        assert_eq!(r.message, "it broke");
    }

    #[test]
    fn outcome_ok_becomes_success() {
        let r = RunResult::from_outcome(Ok("backup finished".into()));
        assert_eq!(r.code, 0);
        assert_eq!(r.message, "backup finished");
    }

    #[test]
    fn outcome_err_carries_the_taxonomy_exit_code() {
        let r = RunResult::from_outcome(Err(OrchestratorError::DumpFailed(1)));
        assert_eq!(r.code, crate::error::FAILURE_EXIT_CODE);
        assert!(r.message.contains("pg_dump"));
    }

    #[test]
    fn banners_do_not_panic() {
        // Smoke tests; the banner text itself is asserted in the integration
        // suite where styling is disabled by the pipe.
        print_start_banner("PostgreSQL Database Backup");
        print_end_banner(&RunResult::success("ok"));
        print_end_banner(&RunResult::failure(99, "bad"));
    }
}
