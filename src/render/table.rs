use std::path::Path;

use anyhow::Result;
use polars::{frame::DataFrame, prelude::NamedFrom, series::Series};

use crate::{io::{self, PARCEL_ID_COLUMN}, parcel::Metric, pipeline::TopK};

const WEIGHTED_SUM_COLUMN: &str = "weighted_sum";

impl TopK {
    /// Candidate table as a DataFrame: `ParcelID`, the applicable metrics, then `weighted_sum`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let ids = self.rows().iter()
            .map(|row| row.id.to_string())
            .collect::<Vec<_>>();

        let mut columns = vec![Series::new(PARCEL_ID_COLUMN.into(), ids).into()];
        for (i, metric) in self.applicable_metrics().into_iter().enumerate() {
            let values = self.rows().iter()
                .map(|row| row.metrics.get(i).and_then(|&(_, value)| value))
                .collect::<Vec<Option<f64>>>();
            columns.push(Series::new(metric.column().into(), values).into());
        }

        let sums = self.rows().iter()
            .map(|row| row.weighted_sum)
            .collect::<Vec<_>>();
        columns.push(Series::new(WEIGHTED_SUM_COLUMN.into(), sums).into());

        Ok(DataFrame::new(columns)?)
    }

    /// Export the candidate table as CSV.
    pub fn to_csv(&self, path: &Path) -> Result<()> {
        io::csv::write_csv(&mut self.to_dataframe()?, path)
    }

    pub fn to_csv_string(&self) -> Result<String> {
        io::csv::write_csv_string(&mut self.to_dataframe()?)
    }

    /// Fixed-width text rendering of the table for terminals.
    pub fn format_table(&self) -> String {
        if self.is_empty() {
            return format!("No {} parcels match the current filters.\n", self.category());
        }

        let metrics = self.applicable_metrics();
        let mut header: Vec<String> = vec![PARCEL_ID_COLUMN.to_string()];
        header.extend(metrics.iter().map(Metric::to_string));
        header.push(WEIGHTED_SUM_COLUMN.to_string());

        let body: Vec<Vec<String>> = self.rows().iter()
            .map(|row| {
                let mut cells = vec![row.id.to_string()];
                cells.extend(row.metrics.iter().map(|(_, value)| format_value(*value)));
                cells.push(format!("{:.4}", row.weighted_sum));
                cells
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|c| body.iter()
                .filter_map(|cells| cells.get(c))
                .chain(std::iter::once(&header[c]))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0))
            .collect();

        let mut out = String::new();
        write_row(&mut out, &header, &widths);
        let rule = widths.iter().map(|&w| "-".repeat(w)).collect::<Vec<_>>();
        write_row(&mut out, &rule, &widths);
        for cells in &body {
            write_row(&mut out, cells, &widths);
        }
        out
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"))
}

/// First column left-aligned, numeric columns right-aligned.
fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (c, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        match c {
            0 => out.push_str(&format!("{cell:<width$}")),
            _ => out.push_str(&format!("  {cell:>width$}")),
        }
    }
    out.push('\n');
}
