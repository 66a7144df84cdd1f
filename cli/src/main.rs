use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use planner::{ConstraintViolation, PlanOutcome, PlanRequest, PlannerForm, SolveError, SolverConfig, stats};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(#[from] ConstraintViolation),
    #[error("cannot schedule: {0}")]
    Solve(#[from] SolveError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
}

#[derive(Parser, Debug)]
#[command(name = "weekplan", about = "Weekly block planner: solve plans locally or against a server")]
struct Cli {
    #[arg(long, env = "WEEKPLAN_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Print the plan outcome as JSON instead of text tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Print the built-in sample week as a plan file.
    Template,
    /// Solve the built-in sample week locally.
    Demo {
        #[arg(long, env = "PLANNER_NODE_BUDGET", default_value_t = planner::solver::DEFAULT_NODE_BUDGET)]
        node_budget: u64,
    },
    /// Solve a JSON plan file locally.
    Solve {
        file: PathBuf,
        #[arg(long, env = "PLANNER_NODE_BUDGET", default_value_t = planner::solver::DEFAULT_NODE_BUDGET)]
        node_budget: u64,
    },
    /// Submit a JSON plan file to the server as a form body.
    Submit {
        file: PathBuf,
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Template => print_json(&planner::demo::sample_week()),
        Command::Demo { node_budget } => run_local(&planner::demo::sample_week(), node_budget, cli.json),
        Command::Solve { file, node_budget } => run_local(&load_request(&file)?, node_budget, cli.json),
        Command::Submit { file, timeout_secs } => {
            let request = load_request(&file)?;
            let outcome = submit(&cli.base_url, &request, Duration::from_secs(timeout_secs)).await?;
            print_outcome(&outcome, cli.json)
        }
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

fn load_request(path: &Path) -> Result<PlanRequest, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    Ok(serde_json::from_str(&raw)?)
}

fn run_local(request: &PlanRequest, node_budget: u64, json: bool) -> Result<(), CliError> {
    let outcome = planner::plan(request, &SolverConfig { node_budget })?;
    print_outcome(&outcome, json)
}

/// Post `request` to `/api/schedule` exactly as the browser form would.
///
/// The constraint check the planner page runs before submitting runs here
/// too, so an invalid plan never reaches the server.
async fn submit(base_url: &str, request: &PlanRequest, timeout: Duration) -> Result<PlanOutcome, CliError> {
    let form = PlannerForm::from_request(request);
    form.validate()?;

    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let url = format!("{}/api/schedule", base_url.trim_end_matches('/'));
    let response = client.post(url).form(&form.to_fields()).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: error_message(&body) });
    }
    Ok(serde_json::from_str(&body)?)
}

/// The `error` field of a JSON error body, or the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(serde_json::Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}

fn print_outcome(outcome: &PlanOutcome, json: bool) -> Result<(), CliError> {
    if json {
        return print_json(outcome);
    }
    println!("Status: {:?}", outcome.status);
    if outcome.status.has_solution() {
        print!("{}", stats::render_text(&outcome.stats));
        print!("{}", outcome.timetable.render_text());
    } else {
        println!("No solution found.");
    }
    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
