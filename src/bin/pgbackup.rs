//! `pgbackup` — back up one PostgreSQL database to a tar archive.
//!
//! Control skeleton: parse → resolve request → run the pipeline → print the
//! end banner → exit with the result's code.  The banner prints on every
//! exit path, including argument-parse failures.

use clap::Parser;

use pgbackup_rs::{
    cli::BackupCli,
    commands,
    config,
    error::Result,
    report::{self, RunResult},
    request::BackupRequest,
    template::RunStamp,
};

fn main() {
    report::print_start_banner("PostgreSQL Database Backup");

    let cli = match BackupCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = err.exit_code();
            let _ = err.print();
            // --help / --version exit clean without the failure banner.
            if code != 0 {
                report::print_end_banner(&RunResult::failure(
                    code,
                    "invalid command line arguments",
                ));
            }
            std::process::exit(code);
        },
    };

    let result = RunResult::from_outcome(run(&cli));
    report::print_end_banner(&result);
    std::process::exit(result.code);
}

fn run(cli: &BackupCli) -> Result<String> {
    let defaults = config::load_defaults()?;
    let stamp = RunStamp::now();
    let req = BackupRequest::resolve(cli, &defaults, &stamp)?;
    req.echo();
    commands::backup::run(&req)
}
