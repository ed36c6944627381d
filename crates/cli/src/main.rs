//! copy-pasta - a clipboard shared through S3
//!
//! Pushes text from stdin to an S3-compatible bucket and pulls it back on
//! any machine that knows the same target.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use copy_pasta::commands::{self, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr, stdout belongs to `paste`
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}
