//! Decision Desk runner - replays a JSON-described session headlessly.
//!
//! Reads a session file, applies its edits through the same boundaries an
//! interactive front end would use, submits to the configured solver
//! backend, and prints the outcome. Exits non-zero when the computation
//! settles in an error state.
//!
//! ```text
//! decision-desk session.json
//! ```

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use decision_desk::adapters::HttpSolverClient;
use decision_desk::application::{
    AhpDecisionSession, CombinedPipelineSession, CriteriaWeightSession, ElectreDecisionSession,
};
use decision_desk::config::AppConfig;
use decision_desk::domain::foundation::GroupSize;

use serde::Deserialize;

/// Which flow the session file drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum Method {
    AhpWeights,
    AhpFull,
    Electre,
    Combined,
}

/// One pairwise comparison edit.
#[derive(Debug, Deserialize)]
struct ComparisonEdit {
    row: usize,
    col: usize,
    value: f64,
}

/// One alternative-matrix edit, routed through its criterion.
#[derive(Debug, Deserialize)]
struct AlternativeEdit {
    criterion: usize,
    row: usize,
    col: usize,
    value: f64,
}

/// One performance cell edit.
#[derive(Debug, Deserialize)]
struct PerformanceEdit {
    option: usize,
    criterion: usize,
    value: f64,
}

/// JSON shape of a session file.
#[derive(Debug, Deserialize)]
struct SessionFile {
    method: Method,
    criteria: u8,
    #[serde(default)]
    alternatives: Option<u8>,
    #[serde(default)]
    criteria_comparisons: Vec<ComparisonEdit>,
    #[serde(default)]
    alternative_comparisons: Vec<AlternativeEdit>,
    #[serde(default)]
    weights: Vec<f64>,
    #[serde(default)]
    performance: Vec<PerformanceEdit>,
    #[serde(default)]
    thresholds: Option<Vec<f64>>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("Configuration error: {err}");
        return ExitCode::from(2);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: decision-desk <session.json>");
        return ExitCode::from(2);
    };

    let session = match read_session(&path) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Cannot read session file {path}: {err}");
            return ExitCode::from(2);
        }
    };

    let solver = HttpSolverClient::new(&config.solver);
    match run(session, &solver).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn read_session(path: &str) -> Result<SessionFile, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn group_size(value: u8, what: &str) -> Result<GroupSize, String> {
    GroupSize::try_new(value).map_err(|err| format!("invalid {what} count: {err}"))
}

/// Applies one edit result; entered data that the boundary ignores is
/// worth knowing about in a batch run.
fn check_applied(applied: bool, description: String) {
    if !applied {
        tracing::warn!("ignored edit: {description}");
    }
}

async fn run(session: SessionFile, solver: &HttpSolverClient) -> Result<(), String> {
    let criteria = group_size(session.criteria, "criteria")?;

    match session.method {
        Method::AhpWeights => {
            let mut flow = CriteriaWeightSession::new(criteria);
            for edit in &session.criteria_comparisons {
                check_applied(
                    flow.matrix_mut().enter(edit.row, edit.col, &edit.value.to_string()),
                    format!("criteria cell ({}, {}) = {}", edit.row, edit.col, edit.value),
                );
            }
            flow.compute(solver).await;
            if let Some(result) = flow.result() {
                println!("Weights: {:?}", result.weights);
                println!(
                    "Consistency ratio: {:.4} (consistent: {})",
                    result.consistency_ratio, result.is_consistent
                );
                return Ok(());
            }
            Err(flow.error().unwrap_or("no result").to_string())
        }
        Method::AhpFull => {
            let alternatives = group_size(
                session.alternatives.ok_or("ahp-full requires an alternatives count")?,
                "alternatives",
            )?;
            let mut flow = AhpDecisionSession::new(criteria, alternatives);
            for edit in &session.criteria_comparisons {
                check_applied(
                    flow.hierarchy_mut().enter_criteria_comparison(
                        edit.row,
                        edit.col,
                        &edit.value.to_string(),
                    ),
                    format!("criteria cell ({}, {}) = {}", edit.row, edit.col, edit.value),
                );
            }
            for edit in &session.alternative_comparisons {
                if !flow.hierarchy_mut().set_active_criterion(edit.criterion) {
                    tracing::warn!("ignored edit under unknown criterion {}", edit.criterion);
                    continue;
                }
                check_applied(
                    flow.hierarchy_mut().enter_alternative_comparison(
                        edit.row,
                        edit.col,
                        &edit.value.to_string(),
                    ),
                    format!(
                        "alternative cell ({}, {}) = {} under criterion {}",
                        edit.row, edit.col, edit.value, edit.criterion
                    ),
                );
            }
            flow.compute(solver).await;
            if let Some(result) = flow.result() {
                println!("Criteria weights: {:?}", result.criteria_weights);
                println!("Global scores: {:?}", result.global_scores);
                println!("Best alternative: {}", result.best_alternative + 1);
                return Ok(());
            }
            Err(flow.error().unwrap_or("no result").to_string())
        }
        Method::Electre => {
            let options = group_size(
                session.alternatives.ok_or("electre requires an alternatives count")?,
                "alternatives",
            )?;
            let mut flow = ElectreDecisionSession::new(criteria, options);
            for (criterion, weight) in session.weights.iter().enumerate() {
                check_applied(
                    flow.worksheet_mut().enter_weight(criterion, &weight.to_string()),
                    format!("weight {criterion} = {weight}"),
                );
            }
            for edit in &session.performance {
                check_applied(
                    flow.worksheet_mut().enter_performance(
                        edit.option,
                        edit.criterion,
                        &edit.value.to_string(),
                    ),
                    format!(
                        "performance cell ({}, {}) = {}",
                        edit.option, edit.criterion, edit.value
                    ),
                );
            }
            flow.set_thresholds(session.thresholds.clone());
            flow.compute(solver).await;
            if let Some(result) = flow.result() {
                println!("Ranking: {:?}", result.ranking);
                println!("Net flows: {:?}", result.net_flows);
                return Ok(());
            }
            Err(flow.error().unwrap_or("no result").to_string())
        }
        Method::Combined => {
            let options = group_size(
                session.alternatives.ok_or("combined requires an alternatives count")?,
                "alternatives",
            )?;
            let mut flow = CombinedPipelineSession::new(criteria, options);
            for edit in &session.criteria_comparisons {
                check_applied(
                    flow.criteria_mut().enter(edit.row, edit.col, &edit.value.to_string()),
                    format!("criteria cell ({}, {}) = {}", edit.row, edit.col, edit.value),
                );
            }
            for edit in &session.performance {
                check_applied(
                    flow.performance_mut().enter(
                        edit.option,
                        edit.criterion,
                        &edit.value.to_string(),
                    ),
                    format!(
                        "performance cell ({}, {}) = {}",
                        edit.option, edit.criterion, edit.value
                    ),
                );
            }
            flow.compute(solver).await;
            if let Some(outcome) = flow.result() {
                println!("AHP weights: {:?}", outcome.ahp.weights);
                println!("Ranking: {:?}", outcome.electre.ranking);
                println!("Net flows: {:?}", outcome.electre.net_flows);
                return Ok(());
            }
            Err(flow.error().unwrap_or("no result").to_string())
        }
    }
}
