//! paste command - Print the clipboard
//!
//! Downloads the clipboard object and writes it to stdout untouched.

use std::io::{self, Write};

use clap::Args;
use pasta_core::store;

use super::{CLIPBOARD_OBJECT, Context, fail};
use crate::exit_code::ExitCode;

/// Print the clipboard to stdout
#[derive(Args, Debug, Default)]
pub struct PasteArgs {
    /// Target to paste from (default: current target)
    #[arg(short, long)]
    pub target: Option<String>,
}

/// Execute the paste command
pub async fn execute(args: PasteArgs, ctx: &Context) -> ExitCode {
    let formatter = ctx.formatter();

    let target = match ctx
        .target_manager()
        .and_then(|manager| manager.get(args.target.as_deref()))
    {
        Ok(t) => t,
        Err(e) => return fail(&formatter, "Failed to load the target", &e),
    };

    tracing::debug!(target_name = %target.name, bucket = %target.bucket_name, "Pasting");

    let client = match ctx.connect(&target).await {
        Ok(c) => c,
        Err(e) => return fail(&formatter, "Failed to create S3 client", &e),
    };

    match store::read(&client, &target.bucket_name, CLIPBOARD_OBJECT).await {
        Ok(content) => {
            if formatter.is_json() {
                formatter.json(&serde_json::json!({
                    "target": target.name,
                    "content": content,
                }));
                return ExitCode::Success;
            }

            // Write directly to stdout, quiet mode does not apply to the payload
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(content.as_bytes()).and_then(|()| stdout.flush()) {
                formatter.error(&format!("Failed to write to stdout: {e}"));
                return ExitCode::GeneralError;
            }
            ExitCode::Success
        }
        Err(e) => fail(&formatter, "Failed to paste", &e),
    }
}
