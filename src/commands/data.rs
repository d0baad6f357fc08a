use crate::*;

pub fn handle_data_commands(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Roster => {
            let source = cli.endpoint.as_deref().unwrap_or(&config.endpoint);
            let dinos = load_roster(source, config.timeout_ms)?;
            print_out(cli.json, &dinos, |d| {
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    d.species, d.weight, d.height, d.diet, d.era
                )
            })?;
        }
        Commands::Export { out } => {
            let (page, page_error) = load_page()?;
            if let Some(err) = page_error {
                return Err(err.into());
            }
            let html = render_html(&page);
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, html)?;
            let written = out.to_string_lossy().to_string();
            print_one(cli.json, written, |p| format!("wrote {}", p))?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
