//! target command - Switch the current target
//!
//! Only targets already present in the config file can be selected.

use clap::Args;
use pasta_core::Error;
use serde::Serialize;

use super::{Context, fail};
use crate::exit_code::ExitCode;

/// Arguments for the `target` command
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Name of the target to switch to
    pub name: String,
}

#[derive(Serialize)]
struct TargetOutput {
    success: bool,
    target: String,
}

/// Execute the target command
pub fn execute(args: TargetArgs, ctx: &Context) -> ExitCode {
    let formatter = ctx.formatter();

    match ctx
        .target_manager()
        .and_then(|manager| manager.select(&args.name))
    {
        Ok(target) => {
            if formatter.is_json() {
                formatter.json(&TargetOutput {
                    success: true,
                    target: target.name,
                });
            } else {
                formatter.success(&format!("Current target is now '{}'", target.name));
            }
            ExitCode::Success
        }
        Err(Error::TargetNotFound(name)) => {
            formatter.error(&format!("Target is invalid: '{name}'"));
            ExitCode::NotFound
        }
        Err(e) => fail(&formatter, "Failed to update the current target", &e),
    }
}
