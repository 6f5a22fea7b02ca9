//! Entry point for the `mesa` command.
#![forbid(unsafe_code)]

use mesa_cli::CliError;

fn main() {
    env_logger::init();
    match mesa_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("mesa: {err}");
            std::process::exit(1);
        }
    }
}
