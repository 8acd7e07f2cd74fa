//! Command line arguments and the commands they run.

use crate::error::{ErrorKind, Result};
use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use exn::ResultExt;
use hanzi_config::Overrides;
use hanzi_report::{BookFile, BookSource, assemble, list_books};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Hanzi frequency, dispersion and learning-list reports for Chinese books.
#[derive(Parser, Debug, Clone)]
#[command(name = "hanzi", version, about, long_about = None)]
pub struct Cli {
    /// More logging (-v info, -vv debug, -vvv trace); overrides RUST_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}
impl Cli {
    /// `RUST_LOG` applies unless a verbosity flag is given; warnings by default.
    pub fn log_filter(&self) -> EnvFilter {
        let level = match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => return EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        };
        EnvFilter::new(level)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the books found in a folder
    List(ListArgs),
    /// Analyse books and export CSV reports
    Export(ExportArgs),
}
impl Command {
    pub fn run(&self) -> Result<()> {
        match self {
            Self::List(args) => list(args),
            Self::Export(args) => export(args),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Folder of `.txt` books
    #[arg(short, long, value_name = "DIR")]
    pub books: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Folder of `.txt` books
    #[arg(short, long, value_name = "DIR")]
    pub books: PathBuf,

    /// Folder the CSV files are written to, created when missing
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Title of a book to export (repeatable); every book in the folder when omitted
    #[arg(long = "book", value_name = "TITLE")]
    pub titles: Vec<String>,

    /// Configuration file [default: config.toml in the platform config directory]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_parser = PossibleValuesParser::new(["none", "individual", "shared"]))]
    pub hanzi_mode: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(["unique_only", "learning_only", "both"]))]
    pub individual_export: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(["ascending", "descending"]))]
    pub frequency_sort: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(["ascending", "descending"]))]
    pub distance_sort: Option<String>,

    /// Example sentences per character (0-10)
    #[arg(long, allow_negative_numbers = true)]
    pub usage_examples: Option<i64>,

    /// Percentage of the book the learning list should cover (90-100)
    #[arg(long, allow_negative_numbers = true)]
    pub comprehension_target: Option<i64>,

    /// Occurrences below which a character is never worth learning (10-50)
    #[arg(long, allow_negative_numbers = true)]
    pub frequency_threshold: Option<i64>,

    #[arg(long, value_parser = PossibleValuesParser::new(["none", "individual", "combined"]))]
    pub statistics_mode: Option<String>,

    /// Add top-percentile coverage columns to statistics
    #[arg(long, overrides_with = "no_percentiles")]
    pub percentiles: bool,

    /// Leave out the percentile columns, whatever the configuration says
    #[arg(long, overrides_with = "percentiles")]
    pub no_percentiles: bool,
}
impl ExportArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            hanzi_mode: self.hanzi_mode.clone(),
            individual_export: self.individual_export.clone(),
            frequency_sort: self.frequency_sort.clone(),
            distance_sort: self.distance_sort.clone(),
            usage_examples: self.usage_examples,
            comprehension_target: self.comprehension_target,
            frequency_threshold: self.frequency_threshold,
            statistics_mode: self.statistics_mode.clone(),
            statistics_percentiles: match (self.percentiles, self.no_percentiles) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        }
    }

    /// The named books, or every book of the folder.
    pub fn selection(&self) -> Result<Vec<BookFile>> {
        if self.titles.is_empty() {
            return list_books(&self.books).or_raise(|| ErrorKind::Books);
        }
        Ok(self.titles.iter().map(|title| BookFile::in_folder(&self.books, title)).collect())
    }
}

fn list(args: &ListArgs) -> Result<()> {
    for book in list_books(&args.books).or_raise(|| ErrorKind::Books)? {
        println!("{}", book.id());
    }
    Ok(())
}

fn export(args: &ExportArgs) -> Result<()> {
    let config = hanzi_config::load(args.config.as_deref(), &args.overrides()).or_raise(|| ErrorKind::Configuration)?;
    let books = args.selection()?;
    tracing::info!(books = books.len(), output = %args.output.display(), "Exporting");
    let mut report = assemble(&books, &config).or_raise(|| ErrorKind::Export)?;
    report.write(&args.output);
    print!("{}", report.log());
    if report.log().succeeded() == 0 {
        exn::bail!(ErrorKind::AllBooksFailed);
    }
    if report.log().write_failures() > 0 {
        exn::bail!(ErrorKind::Export);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;

    fn export_argv(args: &[&str]) -> Vec<String> {
        let mut argv: Vec<String> = ["hanzi", "export", "--books", "in", "--output", "out"].map(String::from).to_vec();
        argv.extend(args.iter().map(|arg| arg.to_string()));
        argv
    }

    fn export_args(args: &[&str]) -> ExportArgs {
        let cli = Cli::try_parse_from(export_argv(args)).unwrap();
        match cli.command {
            Command::Export(export) => export,
            Command::List(_) => panic!("expected export"),
        }
    }

    #[test]
    fn test_no_overrides_by_default() {
        let args = export_args(&[]);
        assert_eq!(args.overrides(), Overrides::default());
        assert!(args.titles.is_empty());
    }

    #[test]
    fn test_overrides() {
        let args = export_args(&[
            "--hanzi-mode",
            "shared",
            "--frequency-sort",
            "ascending",
            "--comprehension-target",
            "95",
            "--usage-examples",
            "-1",
            "--statistics-mode",
            "combined",
            "--percentiles",
            "--book",
            "红楼梦",
            "--book",
            "西游记",
        ]);
        let overrides = args.overrides();
        assert_eq!(overrides.hanzi_mode.as_deref(), Some("shared"));
        assert_eq!(overrides.frequency_sort.as_deref(), Some("ascending"));
        assert_eq!(overrides.comprehension_target, Some(95));
        assert_eq!(overrides.usage_examples, Some(-1));
        assert_eq!(overrides.statistics_mode.as_deref(), Some("combined"));
        assert_eq!(overrides.statistics_percentiles, Some(true));
        assert_eq!(overrides.distance_sort, None);
        assert_eq!(args.titles, vec!["红楼梦", "西游记"]);
    }

    #[rstest]
    #[case(&[], None)]
    #[case(&["--percentiles"], Some(true))]
    #[case(&["--no-percentiles"], Some(false))]
    #[case(&["--percentiles", "--no-percentiles"], Some(false))]
    #[case(&["--no-percentiles", "--percentiles"], Some(true))]
    fn test_percentiles_override(#[case] flags: &[&str], #[case] expected: Option<bool>) {
        assert_eq!(export_args(flags).overrides().statistics_percentiles, expected);
    }

    #[test]
    fn test_no_percentiles_beats_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        fs::write(&config, "statistics_mode = \"individual\"\nstatistics_percentiles = true\n").unwrap();
        let args = export_args(&["--config", config.to_str().unwrap(), "--no-percentiles"]);
        let loaded = hanzi_config::load(args.config.as_deref(), &args.overrides()).unwrap();
        assert_eq!(
            loaded.statistics,
            hanzi_config::StatisticsMode::Individual(hanzi_config::StatisticsOptions { percentiles: false })
        );
    }

    #[rstest]
    #[case::unknown_mode(&["--hanzi-mode", "all"])]
    #[case::unknown_sort(&["--distance-sort", "up"])]
    #[case::not_a_number(&["--frequency-threshold", "many"])]
    fn test_rejected_arguments(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(export_argv(args)).is_err());
    }

    #[rstest]
    #[case(&[], false, 0)]
    #[case(&["-vv"], false, 2)]
    #[case(&["-q"], true, 0)]
    fn test_global_flags(#[case] flags: &[&str], #[case] quiet: bool, #[case] verbose: u8) {
        let argv = ["hanzi", "list", "--books", "in"].iter().chain(flags);
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!((cli.quiet, cli.verbose), (quiet, verbose));
    }

    #[test]
    fn test_selection_by_title() {
        let args = export_args(&["--book", "红楼梦"]);
        let books = args.selection().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id(), "红楼梦");
        assert_eq!(books[0].path(), PathBuf::from("in").join("红楼梦.txt").as_path());
    }

    #[test]
    fn test_export_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let books = dir.path().join("books");
        let output = dir.path().join("out");
        fs::create_dir(&books).unwrap();
        fs::write(books.join("短.txt"), "你好你好吗？你很好。").unwrap();
        let config = dir.path().join("config.toml");
        fs::write(&config, "").unwrap();

        let cli = Cli::try_parse_from([
            "hanzi",
            "export",
            "--books",
            books.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--individual-export",
            "both",
            "--statistics-mode",
            "individual",
        ])
        .unwrap();
        cli.command.run().unwrap();
        for name in ["短_hanzi.csv", "短_learn.csv", "短_stats.csv"] {
            assert!(output.join(name).is_file(), "{name} missing");
        }
    }

    #[test]
    fn test_export_rejects_out_of_range_option() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        fs::write(&config, "frequency_threshold = 5\n").unwrap();
        let cli = Cli::try_parse_from([
            "hanzi",
            "export",
            "--books",
            dir.path().to_str().unwrap(),
            "--output",
            dir.path().join("out").to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .unwrap();
        let err = cli.command.run().unwrap_err();
        assert_eq!(*err, ErrorKind::Configuration);
        assert!(!dir.path().join("out").exists());
    }
}
