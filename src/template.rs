//! Output-filename templating for the backup orchestrator.
//!
//! Operators schedule backups with paths like `/tmp/@@dbdatetime.tar` and
//! expect the token to expand to `mydb-20260806-153000.tar` at run time.
//! Expansion is literal substring substitution — no regex, no partial-case
//! matching — and the timestamp is captured once per run so every occurrence
//! of a token resolves to the same value.
//!
//! Recognized tokens:
//!
//! | Token           | Expands to                |
//! |-----------------|---------------------------|
//! | `@@datetime`    | `YYYYMMDD-HHMMSS`         |
//! | `@@DATETIME`    | `YYYYMMDD-HHMMSS`         |
//! | `@@dbdatetime`  | `<dbname>-YYYYMMDD-HHMMSS`|
//! | `@@DBDATETIME`  | `<dbname>_YYYYMMDD-HHMMSS`|
//!
//! The uppercase db variant separates with an underscore where the lowercase
//! one uses a hyphen.  Existing job schedulers depend on both spellings, so
//! the two forms are kept distinct rather than unified.

use chrono::Local;

/// Local-time format behind every token: `YYYYMMDD-HHMMSS`, 15 characters.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// A timestamp captured once at the start of a run.
///
/// Constructed a single time in `main` and passed down, so a path containing
/// several tokens cannot straddle a second boundary.
#[derive(Debug, Clone)]
pub struct RunStamp(String);

impl RunStamp {
    /// Capture the current local time.
    pub fn now() -> Self {
        Self(Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Expand every template token in `raw` using `dbname` and `stamp`.
///
/// Replacement order matters only in that all four tokens must be handled;
/// `@@datetime` never matches inside `@@dbdatetime`, so the plain variants
/// are safe to replace first.
pub fn expand(raw: &str, dbname: &str, stamp: &RunStamp) -> String {
    let ts = stamp.as_str();
    raw.replace("@@datetime", ts)
        .replace("@@DATETIME", ts)
        .replace("@@dbdatetime", &format!("{dbname}-{ts}"))
        .replace("@@DBDATETIME", &format!("{dbname}_{ts}"))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
