//! Backup pipeline — everything between a resolved [`BackupRequest`] and the
//! final status banner.
//!
//! # Pipeline stages (in order)
//!
//! | # | Stage    | Description                                         |
//! |---|----------|-----------------------------------------------------|
//! | 1 | Prepare  | Existing-file check, optional delete (`--replace`)  |
//! | 2 | Dump     | `pg_dump -F t … -f <outputfile>`                    |
//! | 3 | Verify   | `tar -tvf <outputfile>` archive listing             |
//!
//! Each tool stage runs behind a spinner with its command line echoed first.
//! A failed dump cleans up a zero-byte output file (nothing useful was
//! written); a failed verify leaves the archive on disk — a listing error
//! does not prove the data is worthless, so the operator decides.

use crate::{
    error::{OrchestratorError, Result},
    preflight,
    request::BackupRequest,
    runner,
    ui::run_stage,
};

/// Execute the full backup pipeline, returning the success message for the
/// final banner.
///
/// Stages run sequentially; the first failure maps to its taxonomy variant
/// and returns early.  No external tool is invoked once a stage has failed.
pub fn run(req: &BackupRequest) -> Result<String> {
    println!();

    // 1. Prepare — fails before any tool runs.
    preflight::prepare_output(&req.output_file, req.replace)?;

    // 2. Dump
    let dump = run_stage("Dump", &runner::pg_dump_args(req), &req.password);
    dump.print();
    if dump.failed() {
        // pg_dump may have created the file before dying; a zero-byte
        // leftover is deleted, anything larger stays.
        preflight::discard_empty_output(&req.output_file);
        return Err(OrchestratorError::DumpFailed(dump.failure_code()));
    }

    // 3. Verify — the archive is left in place even when this fails.
    let verify = run_stage(
        "Verify",
        &runner::tar_verify_args(&req.output_file),
        &req.password,
    );
    verify.print();
    if verify.failed() {
        return Err(OrchestratorError::VerifyFailed(verify.failure_code()));
    }

    Ok(format!(
        "Backup of database {} completed successfully to output tar file {}",
        req.dbname,
        req.output_file.display()
    ))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
