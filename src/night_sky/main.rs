use console::style;
use night_sky::api;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

// Not read from the environment: stderr stays empty on success.
const LOG_FILTER: &str = "warn";

fn main() {
    init_logging();

    match api::run(std::env::args_os().skip(1)) {
        Ok(_) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold().for_stderr(), e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}
