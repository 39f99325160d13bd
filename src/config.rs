//! Connection-defaults file — optional, per-operator.
//!
//! Flags like `--dbhost` and `--dbport` are tedious to repeat in every cron
//! entry, so both binaries read an optional defaults file before resolving
//! their request.  Precedence per field: explicit CLI value → file value →
//! built-in default.  The password intentionally has no file field; it only
//! travels via `--dbpass` and the child's `PGPASSWORD`.
//!
//! # File format
//!
//! `<config_dir>/pgbackup-rs/config.toml`:
//!
//! ```toml
//! [connection]
//! host = "db.example.lan"
//! port = 5432
//! user = "backup_operator"
//! ```
//!
//! All fields are optional; an absent file silently yields empty defaults.
//! A file that exists but is not valid TOML is an error — a half-applied
//! defaults file is worse than none.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Root of the defaults file; `[connection]` is its only section.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub connection: ConnectionDefaults,
}

/// Fallback connection parameters applied where the CLI omitted a value.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ConnectionDefaults {
    /// Default database host.  Empty/absent means local domain socket.
    #[serde(default)]
    pub host: Option<String>,

    /// Default database TCP port.
    #[serde(default)]
    pub port: Option<u16>,

    /// Default database user.
    #[serde(default)]
    pub user: Option<String>,
}

/// Location of the defaults file, `<config_dir>/pgbackup-rs/config.toml`.
///
/// `None` when the platform has no config directory at all.
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|d| d.join("pgbackup-rs").join("config.toml"))
}

/// Load connection defaults from the standard location.
pub fn load_defaults() -> Result<ConnectionDefaults> {
    match default_config_path() {
        Some(path) => load_from(&path),
        None => Ok(ConnectionDefaults::default()),
    }
}

/// Load connection defaults from `path`.
///
/// A missing file yields `ConnectionDefaults::default()`; a file that exists
/// but cannot be read or parsed is an error.
pub fn load_from(path: &Path) -> Result<ConnectionDefaults> {
    if !path.exists() {
        return Ok(ConnectionDefaults::default());
    }

    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let cfg: FileConfig =
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;

    Ok(cfg.connection)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
