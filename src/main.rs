//! scopebind CLI - declares `a`, prints it

use clap::Parser;
use colored::Colorize;

use scopebind::{program, FixSuggestion};

#[derive(Parser)]
#[command(name = "scopebind")]
#[command(about = "Declare one binding (LHS), then read and print it (RHS)")]
#[command(version)]
struct Cli {}

fn main() {
    // Logs go to stderr; stdout carries only the emitted value
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let Cli {} = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = program::run(&mut out) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}
