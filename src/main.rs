use std::process::ExitCode;

use bmpfilter::{Options, RunError, Unstoppable};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = Options::parse(std::env::args_os().skip(1))
        .map_err(RunError::from)
        .and_then(|options| bmpfilter::run(options, Unstoppable));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("filter: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
