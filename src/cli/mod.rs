// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments, wires concrete loaders and stores into the
// use cases, and renders results. This is the error boundary:
// failures are logged in full and replaced with a short message,
// which is all main prints.

pub mod commands;

use anyhow::{anyhow, Result};
use clap::Parser;
use commands::{CheckArgs, Commands, TrainArgs};

use crate::application::{
    check_use_case::CheckUseCase,
    refine_use_case::{RefineUseCase, REFINED_MESSAGE, REFINE_FAILED_MESSAGE},
    train_use_case::TrainConfig,
};
use crate::data::loader::source_for;
use crate::domain::error::CheckerError;
use crate::domain::verdict::Classification;
use crate::infra::checkpoint::CheckpointManager;

#[derive(Parser, Debug)]
#[command(
    name = "content-checker",
    version,
    about = "Guess whether text was generated by AI or composed by a human."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Check(args)  => run_check(args),
            Commands::Refine(args) => run_refine(args),
        }
    }
}

fn store_for(cfg: &TrainConfig) -> CheckpointManager {
    CheckpointManager::new(&cfg.checkpoint_dir, &cfg.model_name).with_hidden_units(cfg.hidden_units)
}

const INPUT_REQUIRED_MESSAGE: &str = "Please enter some content.";
const CHECK_FAILED_MESSAGE: &str =
    "An error occurred. Run with RUST_LOG=content_checker=debug for details.";

fn run_check(args: CheckArgs) -> Result<()> {
    let cfg: TrainConfig = args.train.into();
    let source = source_for(&cfg.dataset);
    let store  = store_for(&cfg);

    let result = CheckUseCase::new(&cfg, source.as_ref(), &store)
        .run(&args.text)
        .map_err(|e| {
            if matches!(e.downcast_ref::<CheckerError>(), Some(CheckerError::InputValidation)) {
                return anyhow!(INPUT_REQUIRED_MESSAGE);
            }
            tracing::error!("Check failed: {e:#}");
            anyhow!(CHECK_FAILED_MESSAGE)
        })?;

    println!("{}", render(&result));
    Ok(())
}

fn run_refine(args: TrainArgs) -> Result<()> {
    let cfg: TrainConfig = args.into();
    let source = source_for(&cfg.dataset);
    let store  = store_for(&cfg);

    tracing::info!("Refinement in progress using '{}'", cfg.dataset);
    RefineUseCase::new(&cfg, source.as_ref(), &store)
        .execute()
        .map_err(|e| {
            tracing::error!("Error while refining the content checker: {e:#}");
            anyhow!(REFINE_FAILED_MESSAGE)
        })?;

    tracing::info!("Model saved under '{}'", store.dir().display());
    println!("{REFINED_MESSAGE}");
    Ok(())
}

/// Human-readable report for a classification.
fn render(result: &Classification) -> String {
    format!(
        "Results\n  AI Involvement:    {}%\n  Human Involvement: {}%\n\nSummary\n  {}\n\n\
         Never use these results to make decisions on someone's academic standing \
         or career, as these results may not always be accurate.",
        result.ai_percentage(),
        result.human_percentage(),
        result.summary(),
    )
}
