fn main() {
    if let Err(e) = apiscope_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
