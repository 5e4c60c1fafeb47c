//! Text and JSON rendering of metric reports.

use std::fmt::{Display, Write};

use anyhow::Result;
use mlmetrics_eval::{ClassScore, ClassificationReport, RegressionReport};
use mlmetrics_io::PairColumns;
use serde::Serialize;

use crate::Format;

pub(crate) struct Renderer {
    pub format: Format,
    pub digits: usize,
    pub per_class: bool,
    pub show_inputs: bool,
}

#[derive(Serialize)]
struct ClassificationOutput<'r, 'a, T> {
    #[serde(flatten)]
    report: &'r ClassificationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    classes: Option<&'r [ClassScore<'a, T>]>,
}

impl Renderer {
    pub fn regression(&self, cols: &PairColumns<f64>, report: &RegressionReport) -> Result<String> {
        if self.format == Format::Json {
            return json(report);
        }

        let d = self.digits;
        let mut out = self.inputs(cols);
        out.push_str("Regression metrics:\n");
        writeln!(out, "MSE: {:.d$}", report.mse)?;
        writeln!(out, "MAE: {:.d$}", report.mae)?;
        writeln!(out, "R²: {:.d$}", report.r2)?;
        writeln!(out, "MAPE: {:.d$}%", report.mape)?;
        Ok(out)
    }

    pub fn classification<T>(
        &self,
        cols: &PairColumns<T>,
        report: &ClassificationReport,
        classes: Option<&[ClassScore<'_, T>]>,
    ) -> Result<String>
    where
        T: Display + Serialize,
    {
        if self.format == Format::Json {
            return json(&ClassificationOutput { report, classes });
        }

        let d = self.digits;
        let mut out = self.inputs(cols);
        out.push_str("Classification metrics:\n");
        writeln!(out, "Accuracy: {:.d$}", report.accuracy)?;
        writeln!(out, "Precision: {:.d$}", report.precision)?;
        writeln!(out, "Recall: {:.d$}", report.recall)?;
        writeln!(out, "F1-score: {:.d$}", report.f1)?;
        writeln!(out, "Hamming loss: {:.d$}", report.hamming_loss)?;

        if let Some(rows) = classes.filter(|_| self.per_class) {
            out.push('\n');
            self.class_table(&mut out, rows)?;
        }
        Ok(out)
    }

    fn class_table<T: Display>(&self, out: &mut String, rows: &[ClassScore<'_, T>]) -> Result<()> {
        let labels: Vec<String> = rows.iter().map(|r| r.label.to_string()).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0).max(5);
        let col = self.digits + 2;

        writeln!(
            out,
            "{:<label_width$}  {:>col$}  {:>col$}  {:>col$}  {:>7}",
            "class", "precision", "recall", "f1", "support"
        )?;
        for (label, row) in labels.iter().zip(rows) {
            writeln!(
                out,
                "{:<label_width$}  {:>col$}  {:>col$}  {:>col$}  {:>7}",
                label,
                self.cell(row.precision),
                self.cell(row.recall),
                self.cell(row.f1),
                row.support
            )?;
        }
        Ok(())
    }

    fn cell(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{:.*}", self.digits, v),
            None => "-".to_string(),
        }
    }

    fn inputs<T: Display>(&self, cols: &PairColumns<T>) -> String {
        if !self.show_inputs {
            return String::new();
        }
        format!(
            "y_true: {}\ny_pred: {}\n\n",
            join(&cols.y_true),
            join(&cols.y_pred)
        )
    }
}

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn json<S: Serialize + ?Sized>(value: &S) -> Result<String> {
    let mut s = serde_json::to_string_pretty(value)?;
    s.push('\n');
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlmetrics_eval::classification::class_scores;
    use mlmetrics_eval::ZeroDivisionPolicy;

    fn text(digits: usize) -> Renderer {
        Renderer {
            format: Format::Text,
            digits,
            per_class: true,
            show_inputs: false,
        }
    }

    #[test]
    fn digits_respected() {
        let cols = PairColumns {
            y_true: vec![1.0, 2.0],
            y_pred: vec![1.0, 4.0],
        };
        let report = RegressionReport::compute(&cols.y_true, &cols.y_pred).unwrap();
        let out = text(2).regression(&cols, &report).unwrap();
        assert!(out.contains("MSE: 2.00\n"), "{out}");
        assert!(out.contains("MAPE: 50.00%\n"), "{out}");
    }

    #[test]
    fn skipped_cells_render_as_dash() {
        let cols = PairColumns {
            y_true: vec!["a", "b"],
            y_pred: vec!["a", "a"],
        };
        let policy = ZeroDivisionPolicy::Skip;
        let report = ClassificationReport::compute(&cols.y_true, &cols.y_pred, policy).unwrap();
        let rows = class_scores(&cols.y_true, &cols.y_pred, policy).unwrap();
        let out = text(3).classification(&cols, &report, Some(&rows)).unwrap();
        let b_row = out.lines().find(|l| l.starts_with('b')).unwrap();
        assert!(b_row.contains('-'), "{b_row}");
        assert!(b_row.contains("0.000"), "{b_row}");
    }
}
