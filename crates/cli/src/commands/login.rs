//! login command - Register a target
//!
//! Stores the credentials under the given name and makes the target current.
//! An unreadable or corrupt config file is replaced rather than reported.

use clap::Args;
use pasta_core::Target;
use serde::Serialize;

use super::{Context, fail};
use crate::exit_code::ExitCode;

/// Arguments for the `login` command
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Target name (e.g., "work", "home")
    #[arg(short, long)]
    pub target: String,

    /// Access key ID
    #[arg(long, env = "COPY_PASTA_ACCESS_KEY", hide_env_values = true)]
    pub access_key: String,

    /// Secret access key
    #[arg(long, env = "COPY_PASTA_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: String,

    /// Bucket holding the clipboard (default: <target>-copy-pasta)
    #[arg(long)]
    pub bucket: Option<String>,
}

impl LoginArgs {
    fn bucket_name(&self) -> String {
        self.bucket
            .clone()
            .unwrap_or_else(|| format!("{}-copy-pasta", self.target))
    }
}

#[derive(Serialize)]
struct LoginOutput {
    success: bool,
    target: String,
    bucket: String,
}

/// Execute the login command
pub fn execute(args: LoginArgs, ctx: &Context) -> ExitCode {
    let formatter = ctx.formatter();

    if args.target.is_empty() {
        formatter.error("Target name cannot be empty");
        return ExitCode::UsageError;
    }

    let bucket = args.bucket_name();
    if bucket.is_empty() {
        formatter.error("Bucket name cannot be empty");
        return ExitCode::UsageError;
    }

    let target = Target::new(
        &args.target,
        &args.access_key,
        &args.secret_access_key,
        &bucket,
    );

    match ctx.target_manager().and_then(|manager| manager.set(&target)) {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&LoginOutput {
                    success: true,
                    target: target.name,
                    bucket: target.bucket_name,
                });
            } else {
                formatter.success(&format!(
                    "Logged in to '{}' (bucket '{}')",
                    target.name, target.bucket_name
                ));
            }
            ExitCode::Success
        }
        Err(e) => fail(&formatter, "Failed to save the target", &e),
    }
}
