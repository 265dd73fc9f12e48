//! # pipefmt-cli
//!
//! Command-line interface for the pipefmt table formatter.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use pipefmt_table::FormatOptions;
use tracing_subscriber::EnvFilter;

/// pipefmt - align pipe-delimited Markdown tables
#[derive(Parser)]
#[command(name = "pipefmt")]
#[command(author, version, about = "Align pipe-delimited Markdown tables", long_about = None)]
struct Cli {
    /// Table file to format (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Minimum column width
    #[arg(long = "min-width", default_value_t = 3, value_name = "N")]
    min_width: usize,

    /// Rewrite FILE in place instead of printing to stdout
    #[arg(short = 'w', long = "write")]
    write: bool,

    /// Exit with status 1 when the input is not already formatted
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    if run(&cli)? {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

/// Execute the formatter. Returns `false` when `--check` found unformatted
/// input.
fn run(cli: &Cli) -> Result<bool> {
    if cli.write && cli.file.is_none() {
        bail!("--write requires FILE; cannot rewrite stdin in place");
    }

    let input = read_input(cli.file.as_deref())?;
    tracing::debug!(bytes = input.len(), "read input");

    let options = FormatOptions::default().with_min_width(cli.min_width);
    let formatted = pipefmt_table::format_with_options(&input, options);

    if cli.check {
        // Compare against exactly what --write would store, so a file
        // --write leaves unchanged always passes --check.
        if input == formatted {
            return Ok(true);
        }
        println!(
            "{} {}",
            "would reformat:".yellow().bold(),
            target_name(cli.file.as_deref())
        );
        return Ok(false);
    }

    if cli.write {
        let Some(file) = cli.file.as_ref() else {
            bail!("--write requires FILE; cannot rewrite stdin in place");
        };
        std::fs::write(file, &formatted)
            .with_context(|| format!("Failed to write file: {}", file.display()))?;
        return Ok(true);
    }

    println!("{formatted}");
    Ok(true)
}

/// Read the whole input from FILE or stdin.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn target_name(file: Option<&Path>) -> String {
    file.map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const UNALIGNED: &str = "| a | b |\n| --- | --- |\n| wide cell | 1 |\n";
    const ALIGNED: &str =
        "| a         | b   |\n| --------- | --- |\n| wide cell | 1   |";

    fn write_fixture(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("table.md");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["pipefmt"]);
        assert!(cli.file.is_none());
        assert_eq!(cli.min_width, 3);
        assert!(!cli.write);
        assert!(!cli.check);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_file_and_flags() {
        let cli = Cli::parse_from(["pipefmt", "-w", "--min-width", "5", "table.md"]);
        assert_eq!(cli.file, Some(PathBuf::from("table.md")));
        assert_eq!(cli.min_width, 5);
        assert!(cli.write);
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["pipefmt", "--check", "table.md"]);
        assert!(cli.check);
    }

    #[test]
    fn test_run_write_rewrites_file_in_place() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, UNALIGNED);

        let cli = Cli::parse_from(["pipefmt", "-w", path.to_str().unwrap()]);
        assert!(run(&cli).unwrap());

        assert_eq!(std::fs::read_to_string(&path).unwrap(), ALIGNED);
    }

    #[test]
    fn test_run_write_requires_file() {
        let cli = Cli::parse_from(["pipefmt", "-w"]);
        let result = run(&cli);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("--write"));
    }

    #[test]
    fn test_run_check_passes_on_formatted_input() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, ALIGNED);

        let cli = Cli::parse_from(["pipefmt", "--check", path.to_str().unwrap()]);
        assert!(run(&cli).unwrap());
    }

    #[test]
    fn test_run_check_flags_unformatted_input() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, UNALIGNED);

        let cli = Cli::parse_from(["pipefmt", "--check", path.to_str().unwrap()]);
        assert!(!run(&cli).unwrap());
    }

    #[test]
    fn test_run_check_agrees_with_write_on_non_table_input() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "just some prose\n");

        let write = Cli::parse_from(["pipefmt", "-w", path.to_str().unwrap()]);
        assert!(run(&write).unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "just some prose\n"
        );

        let check = Cli::parse_from(["pipefmt", "--check", path.to_str().unwrap()]);
        assert!(run(&check).unwrap());
    }

    #[test]
    fn test_run_check_flags_trailing_newline_that_write_strips() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, &format!("{ALIGNED}\n"));

        let check = Cli::parse_from(["pipefmt", "--check", path.to_str().unwrap()]);
        assert!(!run(&check).unwrap());

        let write = Cli::parse_from(["pipefmt", "-w", path.to_str().unwrap()]);
        assert!(run(&write).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ALIGNED);

        let check = Cli::parse_from(["pipefmt", "--check", path.to_str().unwrap()]);
        assert!(run(&check).unwrap());
    }

    #[test]
    fn test_run_errors_on_missing_file() {
        let cli = Cli::parse_from(["pipefmt", "/no/such/table.md"]);
        let result = run(&cli);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, UNALIGNED);
        assert_eq!(read_input(Some(&path)).unwrap(), UNALIGNED);
    }

    #[test]
    fn test_target_name() {
        assert_eq!(target_name(None), "<stdin>");
        assert_eq!(target_name(Some(Path::new("t.md"))), "t.md");
    }
}
