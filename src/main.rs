use clap::Parser;
use stockroom::AppError;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(version)]
#[command(
    about = "Track electronic component stock from an interactive prompt",
    long_about = "Track electronic component stock from an interactive prompt.\n\n\
The inventory is kept in stock.json in the current directory. Set [store] path in \
stockroom.toml or STOCKROOM_STORE to use another file."
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    stockroom::app::logging::init();

    let result: Result<(), AppError> = stockroom::run_interactive();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
