//! Request resolution — from parsed flags to a fully-resolved run request.
//!
//! Everything that has to happen between `clap` and the first subprocess
//! lives here: whitespace trimming, password un-escaping, defaults layering
//! (CLI → defaults file → built-in), filename templating, and absolutizing
//! the archive path.  After `resolve` returns, the request is final — no
//! field is re-derived later in the run.

use std::path::{Path, PathBuf};

use anyhow::Context;
use console::style;

use crate::{
    cli,
    config::ConnectionDefaults,
    error::{OrchestratorError, Result},
    template::{self, RunStamp},
};

/// Built-in port when neither the CLI nor the defaults file gives one.
pub const DEFAULT_PORT: u16 = 5432;

/// Built-in user when neither the CLI nor the defaults file gives one.
pub const DEFAULT_USER: &str = "postgres";

// ─── Restore action ───────────────────────────────────────────────────────────

/// The three recognized restore actions.
///
/// Selected once from the validated `--action` value; the pipeline never
/// re-evaluates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreAction {
    /// Create the database, then restore into it.  The database must not
    /// exist yet or createdb fails the run.
    NewDb,
    /// Restore with `--clean` into an existing database, dropping its
    /// objects first.  No createdb.
    OverwriteDb,
    /// Create a database under a caller-chosen new name and restore into it.
    RestoreAsDb,
}

impl RestoreAction {
    /// Parse a raw `--action` value, case-insensitively.
    ///
    /// Anything outside the three recognized values is `InvalidArguments`,
    /// so it reports with the orchestrator's exit code rather than the
    /// parser's.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "newdb" => Ok(Self::NewDb),
            "overwritedb" => Ok(Self::OverwriteDb),
            "restoreasdb" => Ok(Self::RestoreAsDb),
            other => Err(OrchestratorError::InvalidArguments(format!(
                "action must be newdb, overwritedb or restoreasdb, got '{other}'"
            ))),
        }
    }

    /// Whether `createdb` runs before `pg_restore`.
    pub const fn creates_database(self) -> bool {
        matches!(self, Self::NewDb | Self::RestoreAsDb)
    }

    /// Whether `pg_restore` gets `--clean` to drop existing objects first.
    pub const fn cleans_existing(self) -> bool {
        matches!(self, Self::OverwriteDb)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewDb => "newdb",
            Self::OverwriteDb => "overwritedb",
            Self::RestoreAsDb => "restoreasdb",
        }
    }
}

// ─── Requests ─────────────────────────────────────────────────────────────────

/// A fully-resolved backup run.
#[derive(Debug)]
pub struct BackupRequest {
    pub dbname: String,
    /// Empty = connect over the local domain socket, no `-h` switch.
    pub host: String,
    pub port: u16,
    pub user: String,
    /// Empty = no PGPASSWORD handed to child processes.
    pub password: String,
    /// Absolute, template-expanded archive path.
    pub output_file: PathBuf,
    pub replace: bool,
}

impl BackupRequest {
    /// Resolve CLI flags and file defaults into a final request.
    ///
    /// `stamp` is the run's single timestamp; every template token in the
    /// output path expands to the same value.
    pub fn resolve(
        cli: &cli::BackupCli,
        defaults: &ConnectionDefaults,
        stamp: &RunStamp,
    ) -> Result<Self> {
        let dbname = require(&cli.dbname, "dbname")?;

        let raw_output = require(&cli.outputfile, "outputfile")?;
        let expanded = template::expand(&raw_output, &dbname, stamp);
        let output_file = absolute(&expanded)?;

        Ok(Self {
            dbname,
            host: resolve_host(cli.dbhost.as_deref(), defaults),
            port: resolve_port(cli.dbport, defaults),
            user: resolve_user(cli.dbuser.as_deref(), defaults),
            password: clean_password(&cli.dbpass),
            output_file,
            replace: str2bool(&cli.replace),
        })
    }

    /// Echo the resolved parameters for the operator log, password excluded.
    pub fn echo(&self) {
        echo_line("Database host", &self.host);
        echo_line("Database port", &self.port.to_string());
        echo_line("Database name", &self.dbname);
        echo_line("Database user", &self.user);
        echo_line("Output file", &self.output_file.display().to_string());
        echo_line("Replace", &self.replace.to_string());
    }
}

/// A fully-resolved restore run.
#[derive(Debug)]
pub struct RestoreRequest {
    pub action: RestoreAction,
    pub dbname: String,
    /// Empty = connect over the local domain socket, no `-h` switch.
    pub host: String,
    pub port: u16,
    pub user: String,
    /// Empty = no PGPASSWORD handed to child processes.
    pub password: String,
    /// Absolute input archive path.
    pub input_file: PathBuf,
}

impl RestoreRequest {
    pub fn resolve(cli: &cli::RestoreCli, defaults: &ConnectionDefaults) -> Result<Self> {
        let action = RestoreAction::parse(&cli.action)?;
        let dbname = require(&cli.dbname, "dbname")?;
        let raw_input = require(&cli.inputfile, "inputfile")?;
        let input_file = absolute(&raw_input)?;

        Ok(Self {
            action,
            dbname,
            host: resolve_host(cli.dbhost.as_deref(), defaults),
            port: resolve_port(cli.dbport, defaults),
            user: resolve_user(cli.dbuser.as_deref(), defaults),
            password: clean_password(&cli.dbpass),
            input_file,
        })
    }

    /// Echo the resolved parameters for the operator log, password excluded.
    pub fn echo(&self) {
        echo_line("Database action", self.action.as_str());
        echo_line("Database host", &self.host);
        echo_line("Database port", &self.port.to_string());
        echo_line("Database name", &self.dbname);
        echo_line("Database user", &self.user);
        echo_line("Input file", &self.input_file.display().to_string());
    }
}

// ─── Field resolution helpers ─────────────────────────────────────────────────

/// Interpret a boolean-like flag value: yes/true/t/1 (any case) are true.
pub fn str2bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "yes" | "true" | "t" | "1"
    )
}

/// Trim `raw`, rejecting an empty result.
fn require(raw: &str, name: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(OrchestratorError::InvalidArguments(format!(
            "{name} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim the password and undo the `\!` escape some shells force on `!`.
fn clean_password(raw: &str) -> String {
    raw.trim().replace("\\!", "!")
}

fn resolve_host(cli: Option<&str>, defaults: &ConnectionDefaults) -> String {
    cli.map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .or_else(|| defaults.host.clone())
        .unwrap_or_default()
}

fn resolve_port(cli: Option<u16>, defaults: &ConnectionDefaults) -> u16 {
    cli.or(defaults.port).unwrap_or(DEFAULT_PORT)
}

fn resolve_user(cli: Option<&str>, defaults: &ConnectionDefaults) -> String {
    cli.map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .or_else(|| defaults.user.clone())
        .unwrap_or_else(|| DEFAULT_USER.to_string())
}

/// Absolutize `path` against the current directory without touching the
/// filesystem (the output file usually does not exist yet).
fn absolute(path: &str) -> Result<PathBuf> {
    std::path::absolute(Path::new(path))
        .with_context(|| format!("resolving absolute path for '{path}'"))
        .map_err(OrchestratorError::from)
}

fn echo_line(label: &str, value: &str) {
    println!("{} {value}", style(format!("{label}:")).dim());
}

// ─── Tests ────────────────────────────────────────────────────────────────────
