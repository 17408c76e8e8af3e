use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use shift_summary::{render, DEFAULT_OUTPUT_PATH};

fn main() -> ExitCode {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> shift_summary::Result<()> {
    let output = Path::new(DEFAULT_OUTPUT_PATH);
    let summary = render()?;
    summary.write_to(output)?;
    println!("generated: {}", output.display());
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
