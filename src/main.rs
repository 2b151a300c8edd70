use std::io;
use std::process::ExitCode;

use log::error;

use classic_sort_rs::{shim, RunConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match shim::run(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{} on {}: {err}", config.algorithm, config.input.display());
            ExitCode::FAILURE
        }
    }
}
