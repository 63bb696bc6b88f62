//! pwd-audit command line front-end
//!
//! Reads one password from stdin, validates it and prints the report.
//! Logs go to stderr; set `RUST_LOG` to change the filter.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pwd_audit::{CheckerConfig, ValidationReport, Validator, candidate};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Common password list (one password per line)
    #[arg(long)]
    common_list: Option<PathBuf>,

    /// Range API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Breach lookup timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

fn mark(ok: bool) -> char {
    if ok { '+' } else { '-' }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

fn print_report(out: &mut impl Write, report: &ValidationReport) -> std::io::Result<()> {
    let c = &report.criteria;

    writeln!(out, "Score: {}/100", report.score)?;
    writeln!(out, "Level: {}", report.level)?;
    writeln!(out)?;

    writeln!(
        out,
        "[{}] Length: {} characters ({} points)",
        mark(c.length.meets),
        c.length.value,
        c.length.points
    )?;
    writeln!(
        out,
        "[{}] Complexity: {} character classes ({} points)",
        mark(c.complexity.meets),
        c.complexity.class_count,
        c.complexity.points
    )?;
    writeln!(out, "    uppercase: {}", yes_no(c.complexity.has_upper))?;
    writeln!(out, "    lowercase: {}", yes_no(c.complexity.has_lower))?;
    writeln!(out, "    digits:    {}", yes_no(c.complexity.has_digit))?;
    writeln!(out, "    special:   {}", yes_no(c.complexity.has_special))?;
    writeln!(
        out,
        "[{}] Patterns: {} detected ({} points)",
        mark(c.patterns.meets),
        c.patterns.detected(),
        c.patterns.points
    )?;
    writeln!(out, "[{}] Common password: {}", mark(!c.common), yes_no(c.common))?;
    if c.breach.breached {
        writeln!(out, "[-] Breached: yes, seen {} times", c.breach.times_seen)?;
    } else if c.breach.error.is_some() {
        writeln!(out, "[?] Breached: unknown")?;
    } else {
        writeln!(out, "[+] Breached: no")?;
    }

    writeln!(out)?;
    writeln!(out, "Suggestions:")?;
    for suggestion in &report.suggestions {
        writeln!(out, "  {}", suggestion)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = CheckerConfig::from_env().context("Invalid configuration")?;
    if let Some(path) = args.common_list {
        config.common_list_path = path;
    }
    if let Some(url) = args.api_url {
        config.api_url = url;
    }
    if let Some(secs) = args.timeout {
        config.timeout = Duration::from_secs(secs.max(1));
    }

    let validator = Validator::from_config(&config).context("Failed to create validator")?;
    info!(
        "Validator ready: {} common passwords, breach API {}",
        validator.common_passwords().len(),
        config.api_url
    );

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush()?;
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line).context("Failed to read password")?;
    let raw = line.trim_end_matches(['\r', '\n']).to_string();

    let password = candidate(raw)?;
    let report = validator.validate(&password);

    let stdout = std::io::stdout();
    print_report(&mut stdout.lock(), &report)?;
    Ok(())
}
