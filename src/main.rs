use clap::Parser;

mod cli;
mod commands;
mod domain;
mod roster;
mod services;

pub use cli::{Cli, Commands};
pub use commands::{handle_data_commands, handle_page_commands};
pub use domain::models::{Config, HumanForm};
pub use roster::load_roster;
pub use services::compare::StdRandom;
pub use services::config::load_config;
pub use services::events::{on_human_click, on_load, on_submit, on_tile_click, Endpoint};
pub use services::output::{print_one, print_out, print_page};
pub use services::render::render_html;
pub use services::storage::{load_page, open_store, save_page};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config()?;
    log::debug!("endpoint={} images_dir={}", config.endpoint, config.images_dir);

    if handle_page_commands(&cli, &config)? {
        return Ok(());
    }
    handle_data_commands(&cli, &config)?;
    Ok(())
}
