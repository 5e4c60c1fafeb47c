//! `mlmetrics`: score a two-column `truth,prediction` CSV file.

mod render;

use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use mlmetrics_core::{FloatLabel, Label};
use mlmetrics_eval::classification::class_scores;
use mlmetrics_eval::{ClassificationReport, RegressionReport, ZeroDivisionPolicy};
use mlmetrics_io::{read_label_pairs, read_numeric_pairs, PairColumns, ReadOptions};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::render::Renderer;

#[derive(Parser, Debug)]
#[command(name = "mlmetrics")]
#[command(about = "Evaluate classification or regression predictions from a CSV file")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["regression", "classification"])))]
struct Cli {
    /// CSV file with one `truth,prediction` pair per row
    file: PathBuf,

    /// Compute regression metrics (MSE, MAE, R², MAPE)
    #[arg(short, long)]
    regression: bool,

    /// Compute classification metrics (accuracy, precision, recall, F1, Hamming loss)
    #[arg(short, long)]
    classification: bool,

    /// Value of an undefined per-class ratio: zero, one or skip
    #[arg(long, default_value = "zero")]
    zero_division: ZeroDivisionPolicy,

    /// Treat classification columns as text labels instead of numbers
    #[arg(long)]
    categorical: bool,

    /// The first row is a header
    #[arg(long)]
    header: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: Format,

    /// Also print per-class precision, recall and F1
    #[arg(long)]
    per_class: bool,

    /// Echo the parsed truth and prediction columns
    #[arg(long)]
    show_inputs: bool,

    /// Fractional digits in text output
    #[arg(long, default_value_t = 6)]
    digits: usize,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    fn read_options(&self) -> ReadOptions {
        ReadOptions {
            has_header: self.header,
            ..ReadOptions::default()
        }
    }

    fn renderer(&self) -> Renderer {
        Renderer {
            format: self.format,
            digits: self.digits,
            per_class: self.per_class,
            show_inputs: self.show_inputs,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "mlmetrics_cli=debug,mlmetrics_io=debug"
    } else {
        "mlmetrics_cli=warn,mlmetrics_io=warn"
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read the input file, compute the selected metrics, and render them.
fn run(cli: &Cli) -> Result<String> {
    let path = cli.file.display();
    if cli.regression {
        let cols = read_numeric_pairs(&cli.file, cli.read_options())
            .with_context(|| format!("failed to read {path}"))?;
        tracing::info!(samples = cols.len(), "computing regression metrics");
        let report = RegressionReport::compute(&cols.y_true, &cols.y_pred)?;
        cli.renderer().regression(&cols, &report)
    } else if cli.categorical {
        let cols = read_label_pairs(&cli.file, cli.read_options())
            .with_context(|| format!("failed to read {path}"))?;
        classify(cli, &cols)
    } else {
        let cols = read_numeric_pairs(&cli.file, cli.read_options())
            .with_context(|| format!("failed to read {path}"))?
            .try_map(FloatLabel::new)
            .with_context(|| format!("invalid class label in {path}"))?;
        classify(cli, &cols)
    }
}

fn classify<T>(cli: &Cli, cols: &PairColumns<T>) -> Result<String>
where
    T: Label + Display + Serialize,
{
    tracing::info!(
        samples = cols.len(),
        policy = %cli.zero_division,
        "computing classification metrics"
    );
    let report = ClassificationReport::compute(&cols.y_true, &cols.y_pred, cli.zero_division)?;
    let classes = if cli.per_class {
        Some(class_scores(&cols.y_true, &cols.y_pred, cli.zero_division)?)
    } else {
        None
    };
    cli.renderer().classification(cols, &report, classes.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn parse(file: &NamedTempFile, args: &[&str]) -> Cli {
        let path = file.path().to_str().unwrap();
        let argv = ["mlmetrics", path].into_iter().chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mode_is_required_and_exclusive() {
        assert!(Cli::try_parse_from(["mlmetrics", "data.csv"]).is_err());
        assert!(Cli::try_parse_from(["mlmetrics", "data.csv", "-r", "-c"]).is_err());
        assert!(Cli::try_parse_from(["mlmetrics", "data.csv", "-c"]).is_ok());
    }

    #[test]
    fn policy_flag() {
        let cli = Cli::try_parse_from(["mlmetrics", "d.csv", "-c"]).unwrap();
        assert_eq!(cli.zero_division, ZeroDivisionPolicy::ReturnZero);
        let cli = Cli::try_parse_from(["mlmetrics", "d.csv", "-c", "--zero-division", "2"]).unwrap();
        assert_eq!(cli.zero_division, ZeroDivisionPolicy::Skip);
        assert!(Cli::try_parse_from(["mlmetrics", "d.csv", "-c", "--zero-division", "7"]).is_err());
    }

    #[test]
    fn regression_text() {
        let file = write_csv("5.0,5.0\n10.0,9.0\n15.0,16.0\n");
        let out = run(&parse(&file, &["-r"])).unwrap();
        assert!(out.contains("Regression metrics:"), "{out}");
        assert!(out.contains("MSE: 0.666667"), "{out}");
        assert!(out.contains("MAE: 0.666667"), "{out}");
        assert!(out.contains("MAPE: 5.555556%"), "{out}");
    }

    #[test]
    fn classification_text() {
        let file = write_csv("1,1\n1,2\n2,2\n2,2\n3,3\n");
        let out = run(&parse(&file, &["-c"])).unwrap();
        assert!(out.contains("Accuracy: 0.800000"), "{out}");
        assert!(out.contains("Precision: 0.866667"), "{out}");
        assert!(out.contains("Hamming loss: 0.200000"), "{out}");
    }

    #[test]
    fn numeric_labels_compare_by_value() {
        // 1 and 1.0 are the same class
        let file = write_csv("1,1.0\n2.0,2\n");
        let out = run(&parse(&file, &["-c"])).unwrap();
        assert!(out.contains("Accuracy: 1.000000"), "{out}");
    }

    #[test]
    fn categorical_per_class() {
        let file = write_csv("cat,cat\ncat,cat\ndog,cat\n");
        let out = run(&parse(&file, &["-c", "--categorical", "--per-class", "--zero-division", "skip"]))
            .unwrap();
        assert!(out.contains("Precision: 0.666667"), "{out}");
        assert!(out.contains("dog"), "{out}");
    }

    #[test]
    fn json_output() {
        let file = write_csv("label,guess\na,a\nb,a\n");
        let out = run(&parse(
            &file,
            &["-c", "--categorical", "--header", "--format", "json", "--per-class"],
        ))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["samples"], 2);
        assert_eq!(value["accuracy"], 0.5);
        assert_eq!(value["policy"], "return_zero");
        assert_eq!(value["classes"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn show_inputs_echoes_columns() {
        let file = write_csv("1,2\n3,4\n");
        let out = run(&parse(&file, &["-r", "--show-inputs"])).unwrap();
        assert!(out.starts_with("y_true: 1,3\ny_pred: 2,4\n"), "{out}");
    }

    #[test]
    fn malformed_row_fails() {
        let file = write_csv("1,2\n3\n");
        let err = run(&parse(&file, &["-r"])).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to read"), "{msg}");
        assert!(msg.contains("expected 2 columns"), "{msg}");
    }

    #[test]
    fn non_numeric_in_numeric_mode_fails() {
        let file = write_csv("cat,dog\n");
        assert!(run(&parse(&file, &["-c"])).is_err());
    }

    #[test]
    fn non_finite_values_fail() {
        for contents in ["1,NaN\n2,2\n3,3\n", "inf,1\n2,2\n3,3\n"] {
            let file = write_csv(contents);
            let err = run(&parse(&file, &["-r"])).unwrap_err();
            let msg = format!("{err:#}");
            assert!(msg.contains("non-finite number"), "{msg}");
            assert!(run(&parse(&file, &["-c"])).is_err());
        }
    }

    #[test]
    fn digits_flag() {
        let file = write_csv("1,2\n3,4\n");
        let cli = parse(&file, &["-r", "--digits", "2"]);
        assert_eq!(cli.digits, 2);
        let out = run(&cli).unwrap();
        assert!(out.contains("MSE: 1.00\n"), "{out}");
        assert!(!out.contains("MSE: 1.000000"), "{out}");
        assert!(Cli::try_parse_from(["mlmetrics", "d.csv", "-r", "--precision", "2"]).is_err());
    }

    #[test]
    fn log_filter_targets_workspace_crates() {
        assert_eq!(default_filter(false), "mlmetrics_cli=warn,mlmetrics_io=warn");
        assert_eq!(default_filter(true), "mlmetrics_cli=debug,mlmetrics_io=debug");
    }
}
