use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dinogrid", version, about = "Compare yourself to dinosaurs")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Dinosaur data source (url, dino.json file, or directory); overrides config"
    )]
    pub endpoint: Option<String>,
    #[arg(long, global = true, help = "Seed for fact selection")]
    pub seed: Option<u64>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the page, redrawing the grid from the saved session if any.
    Show,
    /// Submit the form and render a fresh grid.
    Submit {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        feet: String,
        #[arg(long, default_value = "")]
        inches: String,
        #[arg(long, default_value = "")]
        weight: String,
        #[arg(long, default_value = "")]
        diet: String,
    },
    /// Click a tile: new fact for a dinosaur, or reset for `human`.
    Refresh { id: String },
    /// Click the human tile: forget the session and show the form.
    Reset,
    /// Fetch and list the dinosaurs without touching the page.
    Roster,
    /// Write the current page as standalone HTML.
    Export {
        #[arg(long)]
        out: PathBuf,
    },
}
