//! Restore pipeline — everything between a resolved [`RestoreRequest`] and
//! the final status banner.
//!
//! # Pipeline stages (in order)
//!
//! | # | Stage    | Runs for                  | Description                    |
//! |---|----------|---------------------------|--------------------------------|
//! | 1 | Check    | all actions               | Input archive must exist       |
//! | 2 | Create   | `newdb`, `restoreasdb`    | `createdb … <dbname>`          |
//! | 3 | Restore  | all actions               | `pg_restore … [--clean] <file>`|
//!
//! The action was validated during request resolution, so this pipeline only
//! ever sees the three recognized values.  A failed createdb ends the run —
//! pg_restore is never attempted against a database that was not created.

use crate::{
    error::{OrchestratorError, Result},
    preflight,
    request::RestoreRequest,
    runner,
    ui::run_stage,
};

/// Execute the full restore pipeline, returning the success message for the
/// final banner.
pub fn run(req: &RestoreRequest) -> Result<String> {
    println!();

    // 1. Check — fails before any tool runs.
    preflight::require_input(&req.input_file)?;

    // 2. Create (newdb / restoreasdb only)
    if req.action.creates_database() {
        let create = run_stage("Create", &runner::createdb_args(req), &req.password);
        create.print();
        if create.failed() {
            return Err(OrchestratorError::CreateDbFailed(create.failure_code()));
        }
    }

    // 3. Restore
    let restore = run_stage("Restore", &runner::pg_restore_args(req), &req.password);
    restore.print();
    if restore.failed() {
        return Err(OrchestratorError::RestoreFailed(restore.failure_code()));
    }

    Ok(format!(
        "Restore completed successfully to database {} from file {}",
        req.dbname,
        req.input_file.display()
    ))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
