use clap::Parser;
use todo::cli::commands::Cli;
use todo::cli::handlers;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = handlers::launch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
