#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod cli;
mod infrastructure;

use std::process;

fn main() {
    if let Err(err) = bootstrap::run() {
        tracing::error!("{err:?}");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
