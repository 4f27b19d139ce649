//! redmine-import-timelog entrypoint.

use redmine_timelog::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
