use crate::domain::constants::{HUMAN_IMAGE, HUMAN_TILE_ID};
use crate::domain::errors::DinoError;
use crate::domain::models::{
    DinosaurRecord, HumanRecord, Page, Roster, RosterEntry, Tile, TileAction, TileKind,
};
use crate::services::compare::{compare, RandomSource};
use std::fmt::Write;

/// Handle to the element tiles are attached to.
pub trait GridContainer {
    /// Replaces the current grid contents.
    fn attach(&mut self, tiles: Vec<Tile>);
    fn tile_mut(&mut self, id: &str) -> Option<&mut Tile>;
    fn clear(&mut self);
}

impl GridContainer for Page {
    fn attach(&mut self, tiles: Vec<Tile>) {
        self.tiles = tiles;
    }

    fn tile_mut(&mut self, id: &str) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.id == id)
    }

    fn clear(&mut self) {
        self.tiles.clear();
    }
}

fn image_path(images_dir: &str, file: &str) -> String {
    format!("{}/{}", images_dir.trim_end_matches('/'), file)
}

pub fn render_dino_tile(
    dino: &DinosaurRecord,
    human: &HumanRecord,
    images_dir: &str,
    rng: &mut dyn RandomSource,
) -> Result<Tile, DinoError> {
    let fact = compare(dino, human, rng)?;
    Ok(Tile {
        id: dino.species.clone(),
        kind: TileKind::Dinosaur,
        title: dino.species.clone(),
        image: image_path(
            images_dir,
            &format!("{}.png", dino.species.to_lowercase()),
        ),
        fact: Some(fact),
        action: TileAction::RefreshFact,
    })
}

pub fn render_human_tile(human: &HumanRecord, images_dir: &str) -> Tile {
    Tile {
        id: HUMAN_TILE_ID.to_string(),
        kind: TileKind::Human,
        title: human.name.clone(),
        image: image_path(images_dir, HUMAN_IMAGE),
        fact: None,
        action: TileAction::Reset,
    }
}

/// Renders every roster entry, then attaches the whole grid at once.
pub fn render_grid(
    roster: &Roster,
    images_dir: &str,
    rng: &mut dyn RandomSource,
    container: &mut dyn GridContainer,
) -> Result<(), DinoError> {
    let mut tiles = Vec::with_capacity(roster.dinosaurs.len() + 1);
    for entry in roster.entries() {
        let tile = match entry {
            RosterEntry::Dinosaur(d) => render_dino_tile(d, &roster.human, images_dir, rng)?,
            RosterEntry::Human(h) => render_human_tile(h, images_dir),
        };
        tiles.push(tile);
    }
    container.attach(tiles);
    Ok(())
}

/// Swaps the fact of a single tile, located by its species id.
pub fn refresh_tile(
    container: &mut dyn GridContainer,
    dino: &DinosaurRecord,
    human: &HumanRecord,
    rng: &mut dyn RandomSource,
) -> Result<String, DinoError> {
    let tile = container
        .tile_mut(&dino.species)
        .ok_or_else(|| DinoError::InvalidInput(format!("no tile for {}", dino.species)))?;
    let fact = compare(dino, human, rng)?;
    tile.fact = Some(fact.clone());
    Ok(fact)
}

const FORM_HINT: &str = "dinogrid submit --name <name> --feet <ft> --inches <in> \
--weight <lbs> --diet <herbivore|omnivore|carnivore>";

pub fn render_text(page: &Page) -> String {
    let mut out = String::new();
    if let Some(n) = &page.notice {
        let _ = writeln!(out, "! {}", n.message);
    }
    if page.form_visible {
        let _ = writeln!(out, "Enter your details: {}", FORM_HINT);
    }
    for tile in &page.tiles {
        let label = if tile.title.is_empty() { "(you)" } else { tile.title.as_str() };
        let _ = writeln!(out, "[{}] {}", label, tile.image);
        match (&tile.fact, tile.action) {
            (Some(fact), _) => {
                let _ = writeln!(out, "    {}", fact);
            }
            (None, TileAction::Reset) => {
                let _ = writeln!(out, "    (dinogrid reset to start over)");
            }
            (None, TileAction::RefreshFact) => {}
        }
    }
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_html(page: &Page) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Dinosaurs and you</title>\n</head>\n<body>\n");
    if let Some(n) = &page.notice {
        let _ = writeln!(
            out,
            "<div class=\"notice\" data-kind=\"{}\">{}</div>",
            escape(&n.kind),
            escape(&n.message)
        );
    }
    let hidden = if page.form_visible { "" } else { " hidden" };
    let _ = writeln!(out, "<form id=\"dino-compare\"{}>", hidden);
    out.push_str("<input name=\"name\"><input name=\"feet\"><input name=\"inches\">");
    out.push_str("<input name=\"weight\">\n<select name=\"diet\">");
    for d in ["herbivore", "omnivore", "carnivore"] {
        let _ = write!(out, "<option>{}</option>", d);
    }
    out.push_str("</select>\n</form>\n<main id=\"grid\">\n");
    for tile in &page.tiles {
        let _ = write!(
            out,
            "<div class=\"grid-item\" id=\"{}\" data-action=\"{}\"><h3>{}</h3><img src=\"{}\">",
            escape(&tile.id),
            match tile.action {
                TileAction::RefreshFact => "refresh_fact",
                TileAction::Reset => "reset",
            },
            escape(&tile.title),
            escape(&tile.image)
        );
        if let Some(fact) = &tile.fact {
            let _ = write!(out, "<p>{}</p>", escape(fact));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</main>\n</body>\n</html>\n");
    out
}
