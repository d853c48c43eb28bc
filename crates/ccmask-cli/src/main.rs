//! # ccmask
//!
//! Masked compiler forwarder. Rewrites a compiler invocation's argument list
//! and hands it to the gcc variant named by `GCC_BINARY_MASK`, so the
//! MacPorts gcc builds accept invocations written for the Apple driver.

use anyhow::{Context, Result};
use clap::Parser;

mod rewrite;

/// Exit status for configuration and launch failures, distinct from anything
/// a successfully started compiler reports.
const EXIT_LAUNCH_FAILURE: i32 = 127;

/// Forward a compiler invocation to the gcc variant selected by GCC_BINARY_MASK
#[derive(Parser)]
#[command(name = "ccmask")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Version suffix substituted for the XXX placeholder in GCC_BINARY_MASK
    #[arg(value_name = "SUFFIX")]
    suffix: String,

    /// Compiler flags forwarded after rewriting
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "FLAGS")]
    flags: Vec<String>,
}

fn main() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    ccmask_config::logging::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("ccmask: {:#}", err);
        std::process::exit(EXIT_LAUNCH_FAILURE);
    }
}

/// Returns only on configuration or launch failure; a successful spawn ends
/// the process with the child's exit status.
fn run(cli: Cli) -> Result<()> {
    let config = ccmask_config::Config::from_env()?;
    let compiler = config.resolve(&cli.suffix);
    let flags = rewrite::rewrite_flags(&cli.flags);

    tracing::debug!(
        compiler = %compiler.display(),
        flags = ?flags,
        "Forwarding rewritten invocation"
    );

    // Standard streams are inherited; the child owns stdout/stderr until it
    // exits.
    let status = std::process::Command::new(&compiler)
        .args(&flags)
        .status()
        .with_context(|| format!("Failed to execute: {}", compiler.display()))?;
    std::process::exit(status.code().unwrap_or(1));
}
