//! Result table for a finished experiment.

use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::experiment::Sample;
use crate::model::CostModel;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// One line of the result table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    pub n: usize,
    pub measured_nanos: u64,
    pub theoretical: f64,
    pub scaling_constant: f64,
    /// `scaling_constant * theoretical`
    pub adjusted: f64,
}

/// Outcome of an [`Experiment`](crate::Experiment) run.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub workload: &'static str,
    pub cost_model: CostModel,
    pub config: ExperimentConfig,
    pub scaling_constant: f64,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(
        workload: &'static str,
        cost_model: CostModel,
        config: ExperimentConfig,
        samples: &[Sample],
        scaling_constant: f64,
    ) -> Self {
        let rows = samples
            .iter()
            .map(|s| ReportRow {
                n: s.n,
                measured_nanos: s.measured_nanos,
                theoretical: s.theoretical,
                scaling_constant,
                adjusted: scaling_constant * s.theoretical,
            })
            .collect();
        Self {
            workload,
            cost_model,
            config,
            scaling_constant,
            rows,
        }
    }

    /// Header and width of the measured-time column. Averaged runs get a wider column.
    fn measured_header(&self) -> (&'static str, usize) {
        if self.config.trials > 1 {
            ("Experimental Avg (ns)", 20)
        } else {
            ("Experimental (ns)", 18)
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the table, or the JSON form when `json` is set, followed by a
    /// newline.
    pub fn write_to<W: Write>(&self, mut out: W, json: bool) -> Result<()> {
        if json {
            writeln!(out, "{}", self.to_json()?)?;
        } else {
            write!(out, "{}", self)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (measured, width) = self.measured_header();
        writeln!(
            f,
            "{:<12} {:<width$} {:<25} {:<20} {:<25}",
            "n",
            measured,
            self.cost_model.label(),
            "Scaling Constant",
            "Adjusted Theoretical",
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12} {:<width$} {:<25.1} {:<20.2} {:<25.0}",
                row.n, row.measured_nanos, row.theoretical, row.scaling_constant, row.adjusted,
            )?;
        }
        Ok(())
    }
}
