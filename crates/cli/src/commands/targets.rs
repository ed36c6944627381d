//! targets command - List configured targets

use pasta_core::Target;
use serde::Serialize;

use super::{Context, fail};
use crate::exit_code::ExitCode;

/// JSON output for the target list
#[derive(Serialize)]
struct TargetListOutput {
    current: Option<String>,
    targets: Vec<TargetInfo>,
}

/// Target information for JSON output (without credentials)
#[derive(Serialize)]
struct TargetInfo {
    name: String,
    bucket: String,
}

impl From<&Target> for TargetInfo {
    fn from(target: &Target) -> Self {
        Self {
            name: target.name.clone(),
            bucket: target.bucket_name.clone(),
        }
    }
}

/// Execute the targets command
pub fn execute(ctx: &Context) -> ExitCode {
    let formatter = ctx.formatter();

    let config = match ctx
        .target_manager()
        .and_then(|manager| manager.config_manager().load())
    {
        Ok(config) => config,
        Err(e) => return fail(&formatter, "Failed to load the targets", &e),
    };
    let current = config.current_target.as_ref().map(|t| t.name.clone());

    if formatter.is_json() {
        formatter.json(&TargetListOutput {
            current,
            targets: config.targets.values().map(TargetInfo::from).collect(),
        });
    } else if config.targets.is_empty() {
        formatter.println("No targets configured.");
    } else {
        for target in config.targets.values() {
            let marker = if current.as_deref() == Some(target.name.as_str()) {
                "*"
            } else {
                " "
            };
            formatter.println(&format!(
                "{marker} {:<16} {}",
                target.name, target.bucket_name
            ));
        }
    }

    ExitCode::Success
}
