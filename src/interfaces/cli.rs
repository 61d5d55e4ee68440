//! Command-line interface for listing trashed files.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::application::dtos::trash_dto::{ListOptions, TrashListReport};
use crate::application::ports::trash_ports::TrashListUseCase;
use crate::common::errors::{ErrorContext, ErrorKind, Result};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `<deletion date> <original path>` line per entry
    #[default]
    Text,
    /// Machine-readable JSON report, warnings included
    Json,
}

/// List trashed files
#[derive(Debug, Parser)]
#[command(name = "oxitrash-list", version, about)]
pub struct Cli {
    /// Use this trash directory instead of scanning (repeatable)
    #[arg(long = "trash-dir", value_name = "DIR")]
    pub trash_dirs: Vec<PathBuf>,

    /// List trash of all users on each volume
    #[arg(long)]
    pub all_users: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            all_users: self.all_users,
            trash_dirs: self.trash_dirs.clone(),
        }
    }

    /// Runs the listing and renders the report.
    ///
    /// Entries go to `out`, warnings to `err` in text mode. JSON mode writes
    /// the whole report, warnings included, to `out`.
    pub fn run(
        &self,
        service: &dyn TrashListUseCase,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<()> {
        let report = service.list_trash(&self.list_options())?;
        match self.format {
            OutputFormat::Text => render_text(&report, out, err),
            OutputFormat::Json => render_json(&report, out),
        }
    }
}

fn render_text(report: &TrashListReport, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    for warning in &report.warnings {
        writeln!(err, "{}", warning).with_error_kind(ErrorKind::Io, "Report")?;
    }
    for entry in &report.entries {
        writeln!(out, "{} {}", entry.deletion_date, entry.original_path.display())
            .with_error_kind(ErrorKind::Io, "Report")?;
    }
    Ok(())
}

fn render_json(report: &TrashListReport, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).with_error_kind(ErrorKind::Io, "Report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use crate::application::dtos::trash_dto::{ListWarning, TrashedEntryDto};

    use super::*;

    struct CannedUseCase(TrashListReport);

    impl TrashListUseCase for CannedUseCase {
        fn list_trash(&self, _options: &ListOptions) -> Result<TrashListReport> {
            Ok(self.0.clone())
        }
    }

    fn sample_report() -> TrashListReport {
        TrashListReport {
            entries: vec![TrashedEntryDto {
                deletion_date: "2024-08-01 10:30:00".to_string(),
                original_path: PathBuf::from("/home/alice/foo.txt"),
            }],
            warnings: vec![ListWarning::ParsePathError {
                path: PathBuf::from("/vol/.Trash-1000/info/bad.trashinfo"),
            }],
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_trash_dir_flag_is_repeatable() {
        let cli = Cli::parse_from(["oxitrash-list", "--trash-dir", "/a", "--trash-dir", "/b"]);
        let options = cli.list_options();

        assert_eq!(options.trash_dirs, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert!(!options.all_users);
    }

    #[test]
    fn test_text_output_splits_entries_and_warnings() {
        let cli = Cli::parse_from(["oxitrash-list"]);
        let mut out = Vec::new();
        let mut err = Vec::new();

        cli.run(&CannedUseCase(sample_report()), &mut out, &mut err)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2024-08-01 10:30:00 /home/alice/foo.txt\n"
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Parse Error: /vol/.Trash-1000/info/bad.trashinfo: Unable to parse Path.\n"
        );
    }

    #[test]
    fn test_json_output_carries_the_whole_report() {
        let cli = Cli::parse_from(["oxitrash-list", "--format", "json"]);
        let mut out = Vec::new();
        let mut err = Vec::new();

        cli.run(&CannedUseCase(sample_report()), &mut out, &mut err)
            .unwrap();

        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["entries"][0]["original_path"], "/home/alice/foo.txt");
        assert_eq!(value["warnings"][0]["kind"], "parse_path_error");
    }
}
