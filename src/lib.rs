//! PostgreSQL logical backup and restore orchestration.
//!
//! # Overview
//!
//! This crate builds two thin command-line wrappers around the PostgreSQL
//! client tools: `pgbackup` drives `pg_dump` (tar archive format) and
//! verifies the result with `tar -tvf`; `pgrestore` drives `createdb` and
//! `pg_restore`.  It replaces a pair of hand-maintained operator scripts
//! with typed argument handling, argv-only subprocess invocation (no shell
//! anywhere), and a fixed exit-code contract that job schedulers can rely
//! on: `0` success, `99` any caught failure, the parser's own code on bad
//! arguments.
//!
//! # Usage
//!
//! ```text
//! pgbackup  -d mydb -o /tmp/mydb-@@datetime.tar -r yes
//! pgrestore -a newdb       -d mydb   -i /tmp/mydb-20260806-153000.tar
//! pgrestore -a overwritedb -d mydb   -i /tmp/mydb-20260806-153000.tar
//! pgrestore -a restoreasdb -d mydb2  -i /tmp/mydb-20260806-153000.tar
//! ```
//!
//! # Module layout
//!
//! | Module                  | Responsibility                               |
//! |-------------------------|----------------------------------------------|
//! | [`cli`]                 | Argument types parsed by clap                |
//! | [`config`]              | Optional connection-defaults file            |
//! | [`request`]             | Resolution into final run requests           |
//! | [`template`]            | `@@datetime`-style output path tokens        |
//! | [`preflight`]           | Filesystem checks before/after the tools     |
//! | [`runner`]              | Argument construction helpers                |
//! | [`ui`]                  | Spinner, captured execution, stage output    |
//! | [`report`]              | Start/end banners, final run result          |
//! | [`commands::backup`]    | pg_dump → tar verify pipeline                |
//! | [`commands::restore`]   | createdb → pg_restore pipeline               |

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod preflight;
pub mod report;
pub mod request;
pub mod runner;
pub mod template;
pub mod ui;
