#![forbid(unsafe_code)]

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout stays the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pisum=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match pisum::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("pisum: {e}");
            ExitCode::from(2)
        }
    }
}
