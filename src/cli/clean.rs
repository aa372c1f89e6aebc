use clap::Parser;

use super::TargetArgs;

/// Arguments for the clean command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a project directory:\n    resfetch clean --project demo\n\n\
                  Remove a project inside a group (the group stays):\n    resfetch clean -g acme -p app")]
pub struct CleanArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}
