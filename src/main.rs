//! zenlog main entrypoint.

use zenlog::run;
use zenlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
