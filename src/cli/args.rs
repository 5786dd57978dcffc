use clap::Parser;

#[derive(Parser)]
#[command(name = "commander-forge")]
#[command(author = "Commander Forge")]
#[command(version = "0.1.0")]
#[command(about = "Interactive Commander-format deck construction", long_about = None)]
pub struct Cli {
    /// Path to the card corpus CSV (schema per the corpus loader)
    #[arg(short, long, default_value = "cards.csv")]
    pub corpus: String,

    /// Directory the finished deck list CSV is written to
    #[arg(short, long, default_value = "deck_files")]
    pub output_dir: String,

    /// Per-card USD price ceiling; omit to use the $20.00 default
    #[arg(long)]
    pub max_card_price: Option<f64>,

    /// Deck-wide USD price ceiling; omit to use the $400.00 default
    #[arg(long)]
    pub max_deck_price: Option<f64>,
}
