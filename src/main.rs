//! catercal main entrypoint.

use catercal::run;
use catercal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
