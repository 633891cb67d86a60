use bikeshare_stats::app::{self, BikeshareCliArguments};
use clap::Parser;

fn main() {
    env_logger::init();
    let args = BikeshareCliArguments::parse();
    match app::run(&args) {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bikeshare: {e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
