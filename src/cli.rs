//! Command-line interface definitions.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  Each binary parses its own struct once in `main` and
//! passes it (by reference) into request resolution.
//!
//! Connection flags deliberately stay `Option` rather than carrying clap
//! defaults: request resolution needs to distinguish "omitted" from "given"
//! so values from the defaults file (see [`crate::config`]) only fill the
//! gaps the operator left open.

use clap::Parser;

/// Arguments for the `pgbackup` binary.
#[derive(Parser, Debug)]
#[command(
    name    = "pgbackup",
    about   = "Back up a PostgreSQL database with pg_dump (tar archive format)",
    version,
    // Show a compact two-column help layout.
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct BackupCli {
    /// Database name to back up.
    #[arg(short = 'd', long)]
    pub dbname: String,

    /// Database host to connect to.
    ///
    /// Omit (or pass an empty value) to connect over the local domain
    /// socket without a host switch.
    #[arg(short = 'H', long)]
    pub dbhost: Option<String>,

    /// Database TCP port.  Defaults to 5432.
    #[arg(short = 'p', long)]
    pub dbport: Option<u16>,

    /// Database user to connect as.  Defaults to "postgres".
    #[arg(short = 'U', long)]
    pub dbuser: Option<String>,

    /// Database password.
    ///
    /// Omit (or pass an empty value) together with a blank host to use a
    /// local socket connection.  The password is handed to the PostgreSQL
    /// tools via the PGPASSWORD environment variable of the child process;
    /// it never appears on a printed command line.
    #[arg(short = 'P', long, default_value = "")]
    pub dbpass: String,

    /// Output file for the pg_dump tar backup, e.g. /tmp/mybackup.tar.
    ///
    /// Supports the templating tokens @@datetime, @@DATETIME (current
    /// date/time as YYYYMMDD-HHMMSS), @@dbdatetime (dbname-datetime) and
    /// @@DBDATETIME (dbname_datetime).  Example for --dbname mydb:
    /// /tmp/mydb-@@datetime.tar becomes /tmp/mydb-20260806-153000.tar.
    #[arg(short = 'o', long)]
    pub outputfile: String,

    /// Replace the output file if it already exists.
    ///
    /// Accepts yes/true/t/1 (case-insensitive) for true; anything else is
    /// false.  When false and the output file exists, the run halts before
    /// pg_dump is invoked.
    #[arg(short = 'r', long, default_value = "false")]
    pub replace: String,
}

/// Arguments for the `pgrestore` binary.
#[derive(Parser, Debug)]
#[command(
    name    = "pgrestore",
    about   = "Restore a PostgreSQL database from a pg_dump tar backup",
    version,
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct RestoreCli {
    /// Restore action to run.
    ///
    /// newdb: create the database with createdb, then restore into it (the
    /// database must not exist yet).  overwritedb: restore with --clean into
    /// an existing database, dropping its objects first.  restoreasdb:
    /// create a database under a new name and restore the backup into it.
    ///
    /// Validated during request resolution; an unrecognized value fails the
    /// run rather than the parser.
    #[arg(short = 'a', long)]
    pub action: String,

    /// New, existing, or restore-as database name, depending on the action.
    #[arg(short = 'd', long)]
    pub dbname: String,

    /// Database host to connect to.
    ///
    /// Omit (or pass an empty value) to connect over the local domain
    /// socket without a host switch.
    #[arg(short = 'H', long)]
    pub dbhost: Option<String>,

    /// Database TCP port.  Defaults to 5432.
    #[arg(short = 'p', long)]
    pub dbport: Option<u16>,

    /// Database user to connect as.  Defaults to "postgres".
    #[arg(short = 'U', long)]
    pub dbuser: Option<String>,

    /// Database password.
    ///
    /// Omit (or pass an empty value) together with a blank host to use a
    /// local socket connection.
    #[arg(short = 'P', long, default_value = "")]
    pub dbpass: String,

    /// Input pg_dump tar backup file to restore from, e.g. /tmp/mybackup.tar.
    #[arg(short = 'i', long)]
    pub inputfile: String,
}

// ─── Tests ────────────────────────────────────────────────────────────────────
