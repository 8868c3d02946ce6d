//! Sonic cannon - turns zero-knowledge witness artifacts into wavetables
//!
//! Each witness polynomial is squeezed into the audible range, filtered
//! through half its spectrum and tiled into a 32-frame wavetable that can
//! be dragged into Serum, Vital and friends.

use std::process::ExitCode;

use clap::Parser;

use sonic_cannon::batch::BatchRunner;
use sonic_cannon::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match args.create_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Rendering {} wavetables ({} waves x {} samples @ {}Hz)",
        config.names.len(),
        config.num_waves,
        config.samples_per_wave,
        config.sample_rate_hz
    );

    let mut runner = match BatchRunner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcomes = runner.run_with(|outcome| {
        if outcome.result.is_ok() {
            println!("{}", outcome.status_line());
        } else {
            eprintln!("{}", outcome.status_line());
        }
    });

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    println!("\n{} written, {} failed", outcomes.len() - failed, failed);

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
