mod api;
mod card;
mod cli;
mod commander;
mod composer;
mod config;
mod error;
mod price;
mod tagger;
mod ui;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    cli::run(cli).await;
}
