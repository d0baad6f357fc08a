use crate::*;

fn random_source(cli: &Cli) -> StdRandom {
    match cli.seed {
        Some(seed) => StdRandom::seeded(seed),
        None => StdRandom::from_entropy(),
    }
}

pub fn handle_page_commands(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    if !matches!(
        cli.command,
        Commands::Show | Commands::Submit { .. } | Commands::Refresh { .. } | Commands::Reset
    ) {
        return Ok(false);
    }

    let (mut page, page_error) = load_page()?;
    let (mut store, store_error) = open_store()?;
    let mut rng = random_source(cli);

    match &cli.command {
        Commands::Show => {
            on_load(&mut page, &mut store, &config.images_dir, &mut rng)?;
        }
        Commands::Submit {
            name,
            feet,
            inches,
            weight,
            diet,
        } => {
            let form = HumanForm {
                name: name.clone(),
                feet: feet.clone(),
                inches: inches.clone(),
                weight: weight.clone(),
                diet: diet.clone(),
            };
            let source = Endpoint {
                source: cli.endpoint.clone().unwrap_or_else(|| config.endpoint.clone()),
                timeout_ms: config.timeout_ms,
            };
            on_submit(
                &mut page,
                &mut store,
                &form,
                &source,
                &config.images_dir,
                &mut rng,
            )?;
        }
        Commands::Refresh { id } => {
            on_tile_click(&mut page, &mut store, id, &mut rng)?;
        }
        Commands::Reset => {
            on_human_click(&mut page, &mut store)?;
        }
        _ => return Ok(false),
    }

    // Storage or page files that could not be read were already replaced;
    // say so unless the event has something more specific to report.
    if page.notice.is_none() {
        if let Some(err) = store_error.as_ref().or(page_error.as_ref()) {
            page.notice = Some(err.into());
        }
    }

    save_page(&page)?;
    print_page(cli.json, &page)?;
    Ok(true)
}
