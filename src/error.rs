//! Failure taxonomy shared by both orchestrators.
//!
//! Every way a run can go wrong is named here.  Validation problems and tool
//! failures are distinct variants so pipelines can return them with `?`
//! instead of threading exit-code variables through every branch; anything
//! outside the taxonomy (I/O trouble, a tool missing from `PATH`) arrives as
//! [`OrchestratorError::Unexpected`] via `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code reported for any caught failure, regardless of variant.
///
/// Argument-parsing failures never reach this: clap exits with its own code
/// before orchestration starts.
pub const FAILURE_EXIT_CODE: i32 = 99;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("output file {} already exists and replace not selected, process cancelled", .0.display())]
    OutputExists(PathBuf),

    #[error("backup file {} does not exist, restore cancelled", .0.display())]
    InputMissing(PathBuf),

    #[error("error {0} occurred while running pg_dump")]
    DumpFailed(i32),

    #[error("error {0} occurred while verifying backup tar file")]
    VerifyFailed(i32),

    #[error("error {0} occurred while running createdb")]
    CreateDbFailed(i32),

    #[error("error {0} occurred while running pg_restore")]
    RestoreFailed(i32),

    #[error("unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl OrchestratorError {
    /// Process exit code to report for this failure.
    pub const fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;

// ─── Tests ────────────────────────────────────────────────────────────────────
