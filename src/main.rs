use std::process;

fn main() {
    if let Err(e) = dicta_cli::run_cli() {
        eprintln!("dicta: {e}");
        process::exit(1);
    }
}
