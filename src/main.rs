//! Thin wrapper around [`datasum::app::run`] so core logic stays testable
//! without spawning processes.

fn main() {
    if let Err(err) = datasum::app::run() {
        eprintln!("Program terminated with error: {err}");
        std::process::exit(1);
    }
}
