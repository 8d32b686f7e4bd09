//! Binary entrypoint for gftype-cli

fn main() {
    env_logger::init();

    if let Err(err) = gftype_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
