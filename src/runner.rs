//! Command argument construction helpers.
//!
//! This module is responsible for *building* the argument lists that will be
//! passed to the PostgreSQL client tools.  It deliberately does **not**
//! execute anything — process execution lives in [`crate::ui`] so that the
//! spinner can own the terminal while commands run.
//!
//! Keeping arg-building separate from execution means every function here is
//! pure and trivially unit-testable without spawning any child processes.
//! It also means no value ever passes through a shell: a database name or
//! path containing spaces or metacharacters is just another argv element.
//!
//! The flag sets mirror the PostgreSQL client tool contracts exactly
//! (`-F t`, `--clean`, `--verbose`, `-f`); the tools are located via `PATH`.

use std::path::Path;

use crate::request::{BackupRequest, RestoreRequest};

// ─── Builders ─────────────────────────────────────────────────────────────────

/// Arguments for `pg_dump -F t -d <db> [-h <host>] -p <port> -U <user>
/// --verbose -f <outputfile>`.
///
/// The archive is written via pg_dump's own `--file` flag rather than a
/// shell redirection, so no shell is involved anywhere in the run.
pub fn pg_dump_args(req: &BackupRequest) -> Vec<String> {
    let mut cmd: Vec<String> = vec![
        "pg_dump".into(),
        "-F".into(),
        "t".into(),
        "-d".into(),
        req.dbname.clone(),
    ];
    cmd.extend(host_switch(&req.host));
    cmd.extend([
        "-p".into(),
        req.port.to_string(),
        "-U".into(),
        req.user.clone(),
        "--verbose".into(),
        "-f".into(),
        path_arg(&req.output_file),
    ]);
    cmd
}

/// Arguments for `tar -tvf <outputfile>` — lists the archive to verify it.
pub fn tar_verify_args(output_file: &Path) -> Vec<String> {
    vec!["tar".into(), "-tvf".into(), path_arg(output_file)]
}

/// Arguments for `createdb [-h <host>] -p <port> -U <user> <db>`.
pub fn createdb_args(req: &RestoreRequest) -> Vec<String> {
    let mut cmd: Vec<String> = vec!["createdb".into()];
    cmd.extend(host_switch(&req.host));
    cmd.extend([
        "-p".into(),
        req.port.to_string(),
        "-U".into(),
        req.user.clone(),
        req.dbname.clone(),
    ]);
    cmd
}

/// Arguments for `pg_restore -d <db> [-h <host>] -p <port> -U <user>
/// [--clean] --verbose <inputfile>`.
///
/// `--clean` is emitted only for the overwrite action.
pub fn pg_restore_args(req: &RestoreRequest) -> Vec<String> {
    let mut cmd: Vec<String> = vec!["pg_restore".into(), "-d".into(), req.dbname.clone()];
    cmd.extend(host_switch(&req.host));
    cmd.extend([
        "-p".into(),
        req.port.to_string(),
        "-U".into(),
        req.user.clone(),
    ]);
    if req.action.cleans_existing() {
        cmd.push("--clean".into());
    }
    cmd.extend(["--verbose".into(), path_arg(&req.input_file)]);
    cmd
}

// ─── Pieces ───────────────────────────────────────────────────────────────────

/// `["-h", host]` when a host is set, empty for local-socket connections.
fn host_switch(host: &str) -> Vec<String> {
    if host.is_empty() {
        vec![]
    } else {
        vec!["-h".into(), host.into()]
    }
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RestoreAction;

    fn backup_req() -> BackupRequest {
        BackupRequest {
            dbname: "mydb".into(),
            host: String::new(),
            port: 5432,
            user: "postgres".into(),
            password: String::new(),
            output_file: "/tmp/mydb.tar".into(),
            replace: false,
        }
    }

    fn restore_req(action: RestoreAction) -> RestoreRequest {
        RestoreRequest {
            action,
            dbname: "mydb".into(),
            host: String::new(),
            port: 5432,
            user: "postgres".into(),
            password: String::new(),
            input_file: "/tmp/mydb.tar".into(),
        }
    }

    // ── pg_dump ───────────────────────────────────────────────────────────────

    #[test]
    fn pg_dump_uses_tar_format_and_file_flag() {
        let args = pg_dump_args(&backup_req());
        let f = args.iter().position(|a| a == "-F").unwrap();
        assert_eq!(args[f + 1], "t");
        let o = args.iter().position(|a| a == "-f").unwrap();
        assert_eq!(args[o + 1], "/tmp/mydb.tar");
    }

    #[test]
    fn pg_dump_omits_host_switch_for_local_socket() {
        let args = pg_dump_args(&backup_req());
        assert!(!args.contains(&"-h".to_string()));
    }

    #[test]
    fn pg_dump_includes_host_switch_when_host_set() {
        let mut req = backup_req();
        req.host = "db.lan".into();
        let args = pg_dump_args(&req);
        let h = args.iter().position(|a| a == "-h").unwrap();
        assert_eq!(args[h + 1], "db.lan");
    }

    #[test]
    fn pg_dump_preserves_awkward_names_as_single_args() {
        let mut req = backup_req();
        req.dbname = "my db;rm -rf /".into();
        req.output_file = "/tmp/my backup.tar".into();
        let args = pg_dump_args(&req);
        assert!(args.contains(&"my db;rm -rf /".to_string()));
        assert!(args.contains(&"/tmp/my backup.tar".to_string()));
    }

    // ── tar verify ────────────────────────────────────────────────────────────

    #[test]
    fn tar_verify_lists_the_archive() {
        let args = tar_verify_args(Path::new("/tmp/mydb.tar"));
        assert_eq!(args, vec!["tar", "-tvf", "/tmp/mydb.tar"]);
    }

    // ── createdb ──────────────────────────────────────────────────────────────

    #[test]
    fn createdb_ends_with_database_name() {
        let args = createdb_args(&restore_req(RestoreAction::NewDb));
        assert_eq!(args.first().unwrap(), "createdb");
        assert_eq!(args.last().unwrap(), "mydb");
    }

    // ── pg_restore ────────────────────────────────────────────────────────────

    #[test]
    fn pg_restore_overwrite_gets_clean_flag() {
        let args = pg_restore_args(&restore_req(RestoreAction::OverwriteDb));
        assert!(args.contains(&"--clean".to_string()));
    }

    #[test]
    fn pg_restore_newdb_and_restoreasdb_have_no_clean_flag() {
        for action in [RestoreAction::NewDb, RestoreAction::RestoreAsDb] {
            let args = pg_restore_args(&restore_req(action));
            assert!(!args.contains(&"--clean".to_string()), "{action:?}");
        }
    }

    #[test]
    fn pg_restore_ends_with_input_file() {
        let args = pg_restore_args(&restore_req(RestoreAction::NewDb));
        assert_eq!(args.last().unwrap(), "/tmp/mydb.tar");
    }

    // ── insta snapshots ───────────────────────────────────────────────────────
    // Lock down the exact argument vectors so any unintended change to the
    // external tool contract is immediately visible in the diff.

    #[test]
    fn snapshot_pg_dump_args_local_socket() {
        insta::assert_debug_snapshot!(pg_dump_args(&backup_req()), @r#"
        [
            "pg_dump",
            "-F",
            "t",
            "-d",
            "mydb",
            "-p",
            "5432",
            "-U",
            "postgres",
            "--verbose",
            "-f",
            "/tmp/mydb.tar",
        ]
        "#);
    }

    #[test]
    fn snapshot_pg_restore_args_overwritedb() {
        insta::assert_debug_snapshot!(pg_restore_args(&restore_req(RestoreAction::OverwriteDb)), @r#"
        [
            "pg_restore",
            "-d",
            "mydb",
            "-p",
            "5432",
            "-U",
            "postgres",
            "--clean",
            "--verbose",
            "/tmp/mydb.tar",
        ]
        "#);
    }

    #[test]
    fn snapshot_createdb_args_with_host() {
        let mut req = restore_req(RestoreAction::NewDb);
        req.host = "db.lan".into();
        insta::assert_debug_snapshot!(createdb_args(&req), @r#"
        [
            "createdb",
            "-h",
            "db.lan",
            "-p",
            "5432",
            "-U",
            "postgres",
            "mydb",
        ]
        "#);
    }
}
