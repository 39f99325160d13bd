//! Filesystem checks that run before — and cleanup that runs after — the
//! external tools.
//!
//! # Non-atomicity
//!
//! [`prepare_output`] is check-then-act: a file created at the output path
//! between the existence check and pg_dump opening it will be overwritten.
//! The tool assumes a single operator and takes no lock; concurrent writers
//! to the same archive path are outside its contract.

use std::{fs, path::Path};

use anyhow::Context;
use console::style;

use crate::error::{OrchestratorError, Result};

/// Make room for the backup archive at `path`.
///
/// If a file already exists there: with `replace` set, delete it (announcing
/// the deletion) and proceed; otherwise fail with `OutputExists` before any
/// external tool is invoked.
pub fn prepare_output(path: &Path, replace: bool) -> Result<()> {
    if !path.is_file() {
        return Ok(());
    }

    if !replace {
        return Err(OrchestratorError::OutputExists(path.to_path_buf()));
    }

    fs::remove_file(path)
        .with_context(|| format!("removing existing output file {}", path.display()))?;
    println!(
        "  {} existing backup file {} deleted before processing",
        style("i").cyan(),
        path.display()
    );
    Ok(())
}

/// Fail with `InputMissing` unless a restorable file exists at `path`.
pub fn require_input(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(OrchestratorError::InputMissing(path.to_path_buf()))
    }
}

/// After a failed dump, remove the output file if it is exactly zero bytes.
///
/// A zero-byte file is a known artifact of pg_dump failing before writing
/// anything; a non-empty file is left in place since it may still hold
/// restorable data.  Best-effort: the dump failure stays the primary error,
/// so cleanup trouble is only warned about.
pub fn discard_empty_output(path: &Path) {
    let Ok(meta) = fs::metadata(path) else {
        return;
    };
    if meta.len() != 0 {
        return;
    }

    match fs::remove_file(path) {
        Ok(()) => println!(
            "  {} removed 0 byte backup file {} after processing",
            style("i").cyan(),
            path.display()
        ),
        Err(e) => eprintln!(
            "  {} could not remove 0 byte backup file {}: {e}",
            style("!").yellow(),
            path.display()
        ),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_output_passes_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mydb.tar");
        assert!(prepare_output(&path, false).is_ok());
        assert!(prepare_output(&path, true).is_ok());
    }

    #[test]
    fn prepare_output_without_replace_fails_and_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mydb.tar");
        fs::write(&path, b"old archive").unwrap();

        let err = prepare_output(&path, false).unwrap_err();
        assert!(matches!(err, OrchestratorError::OutputExists(_)));
        assert_eq!(fs::read(&path).unwrap(), b"old archive");
    }

    #[test]
    fn prepare_output_with_replace_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mydb.tar");
        fs::write(&path, b"old archive").unwrap();

        prepare_output(&path, true).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn require_input_passes_for_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mydb.tar");
        fs::write(&path, b"archive").unwrap();
        assert!(require_input(&path).is_ok());
    }

    #[test]
    fn require_input_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.tar");
        let err = require_input(&path).unwrap_err();
        assert!(matches!(err, OrchestratorError::InputMissing(_)));
    }

    #[test]
    fn require_input_fails_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = require_input(dir.path()).unwrap_err();
        assert!(matches!(err, OrchestratorError::InputMissing(_)));
    }

    #[test]
    fn discard_empty_output_removes_zero_byte_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mydb.tar");
        fs::write(&path, b"").unwrap();

        discard_empty_output(&path);
        assert!(!path.exists());
    }

    #[test]
    fn discard_empty_output_keeps_non_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mydb.tar");
        fs::write(&path, b"partial data").unwrap();

        discard_empty_output(&path);
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), b"partial data");
    }

    #[test]
    fn discard_empty_output_ignores_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        // Must not panic or create anything.
        discard_empty_output(&dir.path().join("never-written.tar"));
    }
}
