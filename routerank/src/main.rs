use clap::Parser;
use routerank::app::RouterankAppArguments;

fn main() {
    env_logger::init();
    let args = RouterankAppArguments::parse();
    log::info!("starting routerank at {}", chrono::Local::now().to_rfc3339());
    match args.app.run() {
        Ok(_) => {}
        Err(e) => {
            log::error!("routerank failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
