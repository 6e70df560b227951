//! Tests for check and normalize subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_check() {
    match parse(&["vrwv", "check", "youtube.com/watch?v=xyz789"]) {
        CliCommand::Check { url } => assert_eq!(url, "youtube.com/watch?v=xyz789"),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_requires_url() {
    assert!(Cli::try_parse_from(["vrwv", "check"]).is_err());
}

#[test]
fn cli_parse_normalize() {
    match parse(&["vrwv", "normalize", "docs.google.com/presentation/d/a/view"]) {
        CliCommand::Normalize { url } => assert_eq!(url, "docs.google.com/presentation/d/a/view"),
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["vrwv", "check", "x", "--config", "/tmp/vrwv.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/vrwv.toml"))
    );
    assert!(matches!(cli.command, CliCommand::Check { .. }));
}

#[test]
fn run_check_accepts_and_rejects() {
    use crate::cli::commands::run_check;
    assert!(run_check("youtube.com/watch?v=ok").is_ok());
    let err = run_check("https://example.com").unwrap_err();
    assert_eq!(
        err.to_string(),
        "rejected: no admission rule matched: https://example.com"
    );
    assert_eq!(run_check("").unwrap_err().to_string(), "rejected: empty URL");
}

#[test]
fn run_normalize_rejects_empty_input() {
    use crate::cli::commands::run_normalize;
    assert!(run_normalize("youtube.com/watch?v=ok").is_ok());
    assert_eq!(run_normalize("").unwrap_err().to_string(), "empty URL");
}
