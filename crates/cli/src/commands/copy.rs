//! copy command - Upload stdin as the clipboard
//!
//! Reads all of stdin and writes it to the target's bucket, creating the
//! bucket on first use.

use std::io::Read;

use clap::Args;
use pasta_core::store;
use serde::Serialize;

use super::{CLIPBOARD_OBJECT, Context, fail};
use crate::exit_code::ExitCode;

/// Copy stdin to the clipboard
#[derive(Args, Debug, Default)]
pub struct CopyArgs {
    /// Target to copy to (default: current target)
    #[arg(short, long)]
    pub target: Option<String>,
}

#[derive(Debug, Serialize)]
struct CopyOutput {
    status: &'static str,
    target: String,
    bucket: String,
    size_bytes: usize,
    size_human: String,
}

/// Execute the copy command
pub async fn execute(args: CopyArgs, ctx: &Context) -> ExitCode {
    let formatter = ctx.formatter();

    let target = match ctx
        .target_manager()
        .and_then(|manager| manager.get(args.target.as_deref()))
    {
        Ok(t) => t,
        Err(e) => return fail(&formatter, "Failed to load the target", &e),
    };

    // Read from stdin
    let mut buffer = Vec::new();
    if let Err(e) = std::io::stdin().read_to_end(&mut buffer) {
        formatter.error(&format!("Failed to read from stdin: {e}"));
        return ExitCode::GeneralError;
    }
    if std::str::from_utf8(&buffer).is_err() {
        formatter.error("Only text can be copied, stdin is not valid UTF-8");
        return ExitCode::UsageError;
    }
    if buffer.is_empty() {
        formatter.warning("Nothing on stdin, the clipboard will be emptied");
    }

    let client = match ctx.connect(&target).await {
        Ok(c) => c,
        Err(e) => return fail(&formatter, "Failed to create S3 client", &e),
    };

    let size = buffer.len();
    tracing::debug!(target_name = %target.name, size, "Copying stdin");
    match store::write(
        &client,
        &target.bucket_name,
        CLIPBOARD_OBJECT,
        &ctx.region,
        buffer,
    )
    .await
    {
        Ok(()) => {
            let size_human = humansize::format_size(size, humansize::BINARY);
            if formatter.is_json() {
                formatter.json(&CopyOutput {
                    status: "success",
                    target: target.name,
                    bucket: target.bucket_name,
                    size_bytes: size,
                    size_human,
                });
            } else {
                formatter.success(&format!("Copied {size_human} to '{}'", target.name));
            }
            ExitCode::Success
        }
        Err(e) => fail(&formatter, "Failed to copy", &e),
    }
}
