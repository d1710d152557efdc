#![forbid(unsafe_code)]

pub mod cli;
pub mod format;
pub mod orchestrator;
pub mod output;
pub mod refusal;
pub mod series;

/// Run the pisum pipeline. Returns exit code (0, 1, or 2).
pub fn run() -> Result<u8, Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    let args = match cli::args::Args::parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(if err.use_stderr() { 2 } else { 0 });
        }
    };

    let mut stdout = io::stdout().lock();
    let result = orchestrator::run(&args, &mut stdout)?;
    let mode = if args.json {
        cli::exit::OutputMode::Json
    } else {
        cli::exit::OutputMode::Human
    };
    let stream = cli::exit::output_stream(result.outcome, mode);

    match stream {
        cli::exit::OutputStream::Stdout => {
            writeln!(stdout, "{}", result.output)?;
            stdout.flush()?;
        }
        cli::exit::OutputStream::Stderr => {
            let mut stderr = io::stderr();
            writeln!(stderr, "{}", result.output)?;
            stderr.flush()?;
        }
    }

    Ok(cli::exit::exit_code(result.outcome))
}
