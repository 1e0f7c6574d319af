//! CLI entry point for peerguard.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, stream
//! selection and exit codes. All business logic lives in the `peerguard-app` crate.

use camino::Utf8PathBuf;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use peerguard_app::{CheckInput, render_check, run_check, verdict_exit_code};
use peerguard_domain::report::Verdict;
use peerguard_settings::Overrides;
use peerguard_types::ids::{DEFAULT_ALLOWLIST, DEFAULT_LOCKFILE, DEFAULT_MANIFEST};
use std::io::{IsTerminal, Write};
use tracing_subscriber::EnvFilter;

/// Exit code for usage errors and for unreadable or malformed inputs.
const EXIT_INPUT_ERROR: i32 = 2;

/// Overrides the `-v` derived log filter, e.g. `PEERGUARD_LOG=peerguard_domain=trace`.
const LOG_ENV: &str = "PEERGUARD_LOG";

const EXAMPLES: &str = "\
Examples:
  peerguard --target 17
  peerguard --target=18 --lock frontend/package-lock.json --manifest frontend/package.json
  peerguard --target 18 --allowlist docs/react-peer-allowlist.json -v

Exit codes:
  0  every non-allowlisted peer range supports the target major
  1  one or more package entries exclude the target major
  2  usage error, or an input file is missing or malformed";

#[derive(Parser, Debug)]
#[command(
    name = "peerguard",
    version,
    about = "Check whether all lockfile packages with React peer dependencies support a target React major",
    after_help = EXAMPLES
)]
struct Cli {
    /// Target framework major version (positive integer).
    #[arg(long, value_name = "MAJOR", value_parser = clap::value_parser!(u64).range(1..))]
    target: u64,

    /// Path to the npm lockfile.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOCKFILE)]
    lock: Utf8PathBuf,

    /// Path to the allowlist JSON (a missing file means an empty allowlist).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ALLOWLIST)]
    allowlist: Utf8PathBuf,

    /// Path to the project manifest used to tell direct from transitive dependencies.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST)]
    manifest: Utf8PathBuf,

    /// Peer name to test; repeat to test several. Defaults to `react` and `react-dom`.
    #[arg(long = "peer", value_name = "NAME")]
    peers: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_usage(err),
    };
    init_tracing(cli.verbose);

    let code = match cmd_check(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            EXIT_INPUT_ERROR
        }
    };
    let _ = std::io::stdout().flush();
    std::process::exit(code);
}

fn exit_usage(err: clap::Error) -> ! {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        err.exit();
    }
    eprint!("{}", usage_error_message(&err));
    std::process::exit(EXIT_INPUT_ERROR);
}

/// clap leaves the usage line out of some errors (a flag missing its value); always include it.
fn usage_error_message(err: &clap::Error) -> String {
    let mut message = err.render().to_string();
    if !message.contains("Usage:") {
        if !message.ends_with('\n') {
            message.push('\n');
        }
        message.push_str(&format!("\n{}\n", Cli::command().render_usage()));
    }
    message
}

fn cmd_check(cli: &Cli) -> anyhow::Result<i32> {
    tracing::debug!(
        target_major = cli.target,
        lock = %cli.lock,
        manifest = %cli.manifest,
        allowlist = %cli.allowlist,
        "starting check"
    );
    let output = run_check(CheckInput {
        lockfile_path: &cli.lock,
        manifest_path: &cli.manifest,
        allowlist_path: &cli.allowlist,
        overrides: Overrides {
            target_major: Some(cli.target),
            peer_keys: cli.peers.clone(),
        },
    })?;

    let text = render_check(&output);
    match output.report.verdict {
        Verdict::Pass => print!("{text}"),
        Verdict::Fail => eprint!("{text}"),
    }
    Ok(verdict_exit_code(output.report.verdict))
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (only possible in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
