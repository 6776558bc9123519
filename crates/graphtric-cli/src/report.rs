//! Rendering of centrality results as text or JSON.
//!
//! Scores are keyed by node id and emitted in ascending id order in both
//! modes, so output is stable across runs and engines.

use std::collections::BTreeMap;
use std::io::{self, Write};

use graphtric_centrality::{Centrality, EigenvectorResult};
use serde::Serialize;

/// Width of the rule under each text section heading.
const RULE_WIDTH: usize = 32;

/// One metric's scores plus solver metadata where it applies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReport {
    pub scores: BTreeMap<usize, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converged: Option<bool>,
}

impl MetricReport {
    pub fn from_scores(scores: &Centrality) -> Self {
        Self {
            scores: sorted(scores),
            iterations: None,
            converged: None,
        }
    }

    pub fn from_eigenvector(result: &EigenvectorResult) -> Self {
        Self {
            scores: sorted(&result.scores),
            iterations: Some(result.iterations),
            converged: Some(result.converged),
        }
    }
}

/// Every metric computed in one run, keyed by metric name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub nodes: usize,
    pub engine: String,
    pub metrics: BTreeMap<&'static str, MetricReport>,
}

impl Report {
    /// Pretty-printed JSON.
    pub fn write_json(&self, w: &mut dyn Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *w, self)?;
        writeln!(w)?;
        Ok(())
    }

    /// One section per metric, one `id score` line per node.
    pub fn write_text(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "nodes: {}  engine: {}", self.nodes, self.engine)?;

        for (name, metric) in &self.metrics {
            writeln!(w)?;
            match (metric.converged, metric.iterations) {
                (Some(true), Some(n)) => writeln!(w, "{name} (converged after {n} iterations)")?,
                (Some(false), Some(n)) => {
                    writeln!(w, "{name} (did not converge after {n} iterations)")?;
                }
                _ => writeln!(w, "{name}")?,
            }
            writeln!(w, "{:-<width$}", "", width = RULE_WIDTH)?;

            for (node, score) in &metric.scores {
                writeln!(w, "{node:>6}  {score:.6}")?;
            }
        }
        Ok(())
    }
}

fn sorted(scores: &Centrality) -> BTreeMap<usize, f64> {
    scores.iter().map(|(node, &score)| (node.index(), score)).collect()
}
