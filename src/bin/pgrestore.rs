//! `pgrestore` — restore one PostgreSQL database from a pg_dump tar archive.
//!
//! Control skeleton mirrors `pgbackup`: parse → resolve request → run the
//! pipeline → print the end banner → exit with the result's code.

use clap::Parser;

use pgbackup_rs::{
    cli::RestoreCli,
    commands,
    config,
    error::Result,
    report::{self, RunResult},
    request::RestoreRequest,
};

fn main() {
    report::print_start_banner("PostgreSQL Database Restore");

    let cli = match RestoreCli::try_parse() {
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

fn run(cli: &RestoreCli) -> Result<String> {
    let defaults = config::load_defaults()?;
    let req = RestoreRequest::resolve(cli, &defaults)?;
    req.echo();
    commands::restore::run(&req)
}
