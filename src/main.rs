//! decision-walker binary: run one questionnaire over a decision graph.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use decision_walker::adapters::{
    FileDatasetStore, FileGraphSource, FixtureResponses, PlaceholderTrainer, TerminalResponses,
    TracingSink,
};
use decision_walker::application::{RunQuestionnaireCommand, RunQuestionnaireHandler};
use decision_walker::config::{AppConfig, LoggingConfig};
use decision_walker::ports::{DiagnosticSink, ResponseProvider};

/// Walk a decision graph, classifying each answer to pick the next question.
#[derive(Parser, Debug)]
#[command(name = "decision-walker", version)]
#[command(after_help = r#"Configuration is read from DECISION_WALKER__* environment variables
(and a .env file); flags override it. RUST_LOG overrides the log filter.

Examples:
  decision-walker resources/decision_tree.json
  decision-walker --responses answers.json --output data/dataset.json"#)]
struct Args {
    /// Decision graph file (JSON, or YAML by extension)
    #[arg(value_name = "GRAPH")]
    graph: Option<PathBuf>,

    /// JSON object of prompt id -> answer; answers are read from stdin when absent
    #[arg(long, value_name = "FILE")]
    responses: Option<PathBuf>,

    /// Write the collected learning dataset here
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Node id to start from
    #[arg(long, value_name = "NODE")]
    start: Option<String>,

    /// Append to the dataset already stored at --output
    #[arg(long)]
    resume: bool,

    /// Do not offer the dataset to the placeholder trainer
    #[arg(long)]
    no_training: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(logging: &LoggingConfig, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging, args.json_logs || config.logging.json);

    let graph_path = args.graph.unwrap_or(config.graph.path);
    let output = args.output.or(config.dataset.output_path);
    let start_node = args.start.unwrap_or(config.traversal.start_node);
    info!(graph = %graph_path.display(), start = %start_node, "decision-walker starting");

    let responses: Arc<dyn ResponseProvider> = match &args.responses {
        Some(path) => match FixtureResponses::from_json_file(path).await {
            Ok(fixture) => Arc::new(fixture),
            Err(e) => {
                eprintln!("Error loading responses: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Arc::new(TerminalResponses::stdio()),
    };

    let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingSink::new());
    let mut handler =
        RunQuestionnaireHandler::new(Arc::new(FileGraphSource::new(&graph_path)), responses, sink.clone());
    if config.training.enabled && !args.no_training {
        handler = handler.with_trainer(Arc::new(
            PlaceholderTrainer::new(sink).with_min_examples(config.training.min_examples),
        ));
    }
    if let Some(path) = &output {
        handler = handler.with_store(Arc::new(FileDatasetStore::new(path)));
    }

    let cmd = RunQuestionnaireCommand {
        start_node,
        resume_dataset: args.resume,
    };
    match handler.handle(cmd).await {
        Ok(result) => {
            let counts = result.dataset.outcome_counts();
            println!("Traversal complete.");
            println!("  Path: {}", result.report.path.join(" -> "));
            println!("  Examples recorded: {}", result.report.steps);
            println!(
                "  Outcome: {}",
                result
                    .report
                    .outcome
                    .map(|outcome| outcome.to_string())
                    .unwrap_or_else(|| "pending".to_string())
            );
            println!(
                "  Dataset: {} examples ({} success, {} failure, {} pending)",
                result.dataset.len(),
                counts.success,
                counts.failure,
                counts.pending
            );
            if let Some(path) = output {
                println!("  Saved to: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
