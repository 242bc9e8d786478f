//! The binary only invokes [`cli::run`] and turns an error into exit code 1. Everything
//! else lives in the library and in `cli/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
