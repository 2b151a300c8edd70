use std::process::ExitCode;

use log::error;

use classic_sort_rs::{shim, GenConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = GenConfig::from_env().and_then(|config| shim::generate_file(&config));

    match result {
        Ok(count) => {
            println!("Wrote {count} numbers");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
