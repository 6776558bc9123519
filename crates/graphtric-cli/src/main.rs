#![forbid(unsafe_code)]

mod report;

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use graphtric_centrality::graph::load_graph_spec;
use graphtric_centrality::{
    CentralityEngine, Graph, ParallelEngine, SequentialEngine, resolve_engine_config,
};
use report::{MetricReport, Report};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "graphtric: centrality metrics for weighted graphs",
    long_about = None
)]
struct Cli {
    /// Graph description (JSON: kind, nodes, edges).
    graph: PathBuf,

    /// Which metric to compute.
    #[arg(short, long, value_enum, default_value_t = Metric::All)]
    metric: Metric,

    /// Which engine computes it.
    #[arg(short, long, value_enum, default_value_t = EngineKind::Parallel)]
    engine: EngineKind,

    /// Engine config file (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Eigenvector iteration cap; overrides the config file.
    #[arg(long)]
    max_iter: Option<usize>,

    /// Eigenvector convergence threshold; overrides the config file.
    #[arg(long)]
    tolerance: Option<f64>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Metric {
    Degree,
    Betweenness,
    Eigenvector,
    All,
}

impl Metric {
    fn includes(self, other: Self) -> bool {
        self == Self::All || self == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Sequential,
    Parallel,
}

impl EngineKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("GRAPHTRIC_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "graphtric=debug,graphtric_centrality=debug,info"
        } else {
            "graphtric=info,warn"
        })
    });

    let format = env::var("GRAPHTRIC_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    // Logs go to stderr so stdout stays parseable.
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn run(cli: &Cli) -> Result<Report> {
    let mut config = resolve_engine_config(cli.config.as_deref())?;
    if let Some(max_iter) = cli.max_iter {
        config.eigenvector.max_iter = max_iter;
    }
    if let Some(tolerance) = cli.tolerance {
        config.eigenvector.tolerance = tolerance;
    }

    let spec = load_graph_spec(&cli.graph)?;
    let graph = Graph::from_spec(&spec)
        .with_context(|| format!("Invalid graph in {}", cli.graph.display()))?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        engine = cli.engine.name(),
        "loaded graph"
    );

    let mut engine: Box<dyn CentralityEngine> = match cli.engine {
        EngineKind::Sequential => Box::new(SequentialEngine::new()),
        EngineKind::Parallel => Box::new(ParallelEngine::new(&config)?),
    };

    let mut report = Report {
        nodes: graph.node_count(),
        engine: cli.engine.name().to_string(),
        ..Report::default()
    };

    if cli.metric.includes(Metric::Degree) {
        let scores = engine.degree_centrality(&graph);
        report.metrics.insert("degree", MetricReport::from_scores(&scores));
    }
    if cli.metric.includes(Metric::Betweenness) {
        let scores = engine.betweenness_centrality(&graph);
        report
            .metrics
            .insert("betweenness", MetricReport::from_scores(&scores));
    }
    if cli.metric.includes(Metric::Eigenvector) {
        let result = engine.eigenvector_centrality(
            &graph,
            config.eigenvector.max_iter,
            config.eigenvector.tolerance,
        );
        report
            .metrics
            .insert("eigenvector", MetricReport::from_eigenvector(&result));
    }

    Ok(report)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = run(&cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_selection() {
        assert!(Metric::All.includes(Metric::Degree));
        assert!(Metric::All.includes(Metric::Eigenvector));
        assert!(Metric::Betweenness.includes(Metric::Betweenness));
        assert!(!Metric::Degree.includes(Metric::Betweenness));
        assert!(!Metric::Eigenvector.includes(Metric::All));
    }
}
