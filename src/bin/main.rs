use clap::Parser;
use dotenvy::dotenv;
use tablegen_cli::{handle_error, run_generate_command, Cli};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    run_generate_command(cli).await.unwrap_or_else(handle_error);
}
