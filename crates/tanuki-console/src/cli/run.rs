/*
[INPUT]:  Task description and task source flags
[OUTPUT]: Task output on stdout, process exit code per outcome
[POS]:    CLI layer - one-shot submission
[UPDATE]: When changing run flags or exit code mapping
*/

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use tanuki_console::ConsoleConfig;
use tanuki_console::controller::{SubmitError, TaskController};

use super::SourceArgs;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Description of the programming task
    pub task_description: String,
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Drive one controller submission and print the output region.
///
/// Exit codes: 0 success, 1 task failure, 2 rejected input.
pub async fn execute(args: RunArgs, config: &ConsoleConfig) -> Result<ExitCode> {
    let source = super::build_task_source(&args.source, config)?;
    let mut controller = TaskController::new(source);

    match controller.submit(&args.task_description).await {
        Ok(_) => {
            println!("{}", controller.output());
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ SubmitError::EmptyTask) => {
            eprintln!("{err}");
            Ok(ExitCode::from(2))
        }
        Err(SubmitError::Task(_)) => {
            // The controller already rendered the failure into its output
            // region; report it the same way a surface would.
            println!("{}", controller.output());
            Ok(ExitCode::from(1))
        }
    }
}
