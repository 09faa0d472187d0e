use std::{env, path::PathBuf, process};

use finance_tracker::{cli::run_cli, init};

const USAGE: &str = "usage: finance_tracker_cli [LEDGER_FILE]";

fn main() {
    init();

    let ledger_path = match env::args_os().nth(1) {
        Some(arg) if arg == "-h" || arg == "--help" => {
            println!("{USAGE}");
            return;
        }
        other => other.map(PathBuf::from),
    };

    if let Err(err) = run_cli(ledger_path) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
