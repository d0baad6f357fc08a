//! UI event handlers: page load, form submit, tile click, human click.
//!
//! Every handler clears the previous notice. A `DinoError` raised inside is
//! caught here and shown on the page; the grid and form stay as they were.
//! Anything else (I/O on the user's home directory) is returned.

use crate::domain::constants::HUMAN_TILE_ID;
use crate::domain::errors::DinoError;
use crate::domain::models::{DinosaurRecord, HumanForm, Page, Roster};
use crate::roster::load_roster;
use crate::services::compare::RandomSource;
use crate::services::profile::build_human;
use crate::services::render::{refresh_tile, render_grid, GridContainer};
use crate::services::session::{self, KeyValueStore};

/// Where the dinosaur list comes from.
pub trait RosterSource {
    fn load(&self) -> anyhow::Result<Vec<DinosaurRecord>>;
}

pub struct Endpoint {
    pub source: String,
    pub timeout_ms: u64,
}

impl RosterSource for Endpoint {
    fn load(&self) -> anyhow::Result<Vec<DinosaurRecord>> {
        load_roster(&self.source, self.timeout_ms)
    }
}

fn surface(page: &mut Page, result: anyhow::Result<()>) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<DinoError>() {
            Some(err) => {
                log::warn!("{}", err);
                page.notice = Some(err.into());
                Ok(())
            }
            None => Err(e),
        },
    }
}

fn rendered(
    roster: &Roster,
    images_dir: &str,
    rng: &mut dyn RandomSource,
) -> Result<Page, DinoError> {
    let mut next = Page {
        form_visible: false,
        tiles: Vec::new(),
        notice: None,
    };
    render_grid(roster, images_dir, rng, &mut next)?;
    Ok(next)
}

pub fn on_load(
    page: &mut Page,
    store: &mut dyn KeyValueStore,
    images_dir: &str,
    rng: &mut dyn RandomSource,
) -> anyhow::Result<()> {
    page.notice = None;
    let loaded = match session::load(store) {
        Ok(v) => v,
        Err(e) => {
            if !matches!(
                e.downcast_ref::<DinoError>(),
                Some(DinoError::StorageCorrupt(_))
            ) {
                return Err(e);
            }
            session::clear(store)?;
            *page = Page::default();
            return surface(page, Err(e));
        }
    };

    let Some((human, dinos)) = loaded else {
        log::info!("no saved session; showing form");
        page.clear();
        page.form_visible = true;
        return Ok(());
    };

    log::info!("redrawing grid from saved session");
    let roster = Roster::new(dinos, human);
    let result = rendered(&roster, images_dir, rng).map(|next| *page = next);
    surface(page, result.map_err(Into::into))
}

pub fn on_submit(
    page: &mut Page,
    store: &mut dyn KeyValueStore,
    form: &HumanForm,
    source: &dyn RosterSource,
    images_dir: &str,
    rng: &mut dyn RandomSource,
) -> anyhow::Result<()> {
    page.notice = None;
    let result = (|| -> anyhow::Result<()> {
        let human = build_human(form)?;
        let dinos = source.load()?;
        let roster = Roster::new(dinos, human);
        let next = rendered(&roster, images_dir, rng)?;
        session::save(store, &roster.human, &roster.dinosaurs)?;
        log::info!("grid rendered with {} tiles", next.tiles.len());
        *page = next;
        Ok(())
    })();
    surface(page, result)
}

pub fn on_tile_click(
    page: &mut Page,
    store: &mut dyn KeyValueStore,
    id: &str,
    rng: &mut dyn RandomSource,
) -> anyhow::Result<()> {
    if id == HUMAN_TILE_ID {
        return on_human_click(page, store);
    }
    page.notice = None;
    let result = (|| -> anyhow::Result<()> {
        if page.tiles.is_empty() {
            return Err(DinoError::InvalidInput(
                "no grid is shown; submit the form first".to_string(),
            )
            .into());
        }
        let Some((human, dinos)) = session::load(store)? else {
            return Err(DinoError::InvalidInput("no saved session".to_string()).into());
        };
        let roster = Roster::new(dinos, human);
        let dino = roster
            .find(id)
            .ok_or_else(|| DinoError::InvalidInput(format!("no tile for {}", id)))?;
        let fact = refresh_tile(page, dino, &roster.human, rng)?;
        log::info!("refreshed {}: {}", id, fact);
        Ok(())
    })();
    surface(page, result)
}

pub fn on_human_click(page: &mut Page, store: &mut dyn KeyValueStore) -> anyhow::Result<()> {
    page.notice = None;
    session::clear(store)?;
    page.clear();
    page.form_visible = true;
    log::info!("session reset; showing form");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::PIGEON;
    use crate::domain::models::{Diet, TileKind};
    use crate::services::compare::tests::{dino, Scripted};
    use crate::services::compare::Category;
    use crate::services::session::MemoryStore;
    use std::cell::Cell;

    struct Fixed {
        dinos: Result<Vec<DinosaurRecord>, DinoError>,
        calls: Cell<usize>,
    }

    impl Fixed {
        fn ok(dinos: Vec<DinosaurRecord>) -> Self {
            Self {
                dinos: Ok(dinos),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                dinos: Err(DinoError::DataUnavailable("response has no \"Dinos\" key".into())),
                calls: Cell::new(0),
            }
        }
    }

    impl RosterSource for Fixed {
        fn load(&self) -> anyhow::Result<Vec<DinosaurRecord>> {
            self.calls.set(self.calls.get() + 1);
            self.dinos.clone().map_err(Into::into)
        }
    }

    fn eight() -> Vec<DinosaurRecord> {
        let mut out: Vec<_> = (0..7)
            .map(|i| dino(&format!("Dino{}", i), 3000.0, 100.0, Diet::Carnivore))
            .collect();
        let mut pigeon = dino(PIGEON, 0.5, 9.0, Diet::Herbivore);
        pigeon.fact = "Modern birds are technically dinosaurs".to_string();
        out.push(pigeon);
        out
    }

    fn ana_form() -> HumanForm {
        HumanForm {
            name: "Ana".to_string(),
            feet: "5".to_string(),
            inches: "10".to_string(),
            weight: "150".to_string(),
            diet: "herbivore".to_string(),
        }
    }

    fn submitted(store: &mut MemoryStore) -> Page {
        let mut page = Page::default();
        let mut rng = Scripted::category(Category::Weight);
        on_submit(&mut page, store, &ana_form(), &Fixed::ok(eight()), "./images", &mut rng)
            .unwrap();
        page
    }

    #[test]
    fn submit_renders_grid_hides_form_and_saves_session() {
        let mut store = MemoryStore::default();
        let page = submitted(&mut store);
        assert!(!page.form_visible);
        assert!(page.notice.is_none());
        assert_eq!(page.tiles.len(), 9);
        assert_eq!(page.tiles[4].kind, TileKind::Human);
        assert_eq!(
            page.tiles[0].fact.as_deref(),
            Some("Dino0 is 20 times your weight")
        );
        assert_eq!(
            page.tiles[8].fact.as_deref(),
            Some("Modern birds are technically dinosaurs")
        );
        let (human, dinos) = session::load(&store).unwrap().unwrap();
        assert_eq!(human.height, 70.0);
        assert_eq!(dinos.len(), 8);
    }

    #[test]
    fn blank_weight_fails_before_fetch() {
        let mut store = MemoryStore::default();
        let mut page = Page::default();
        let mut form = ana_form();
        form.weight = String::new();
        let source = Fixed::ok(eight());
        on_submit(&mut page, &mut store, &form, &source, "./images", &mut Scripted::new(&[0]))
            .unwrap();
        assert_eq!(source.calls.get(), 0);
        assert_eq!(page.notice.as_ref().unwrap().kind, "invalid_input");
        assert!(page.form_visible);
        assert!(page.tiles.is_empty());
        assert!(session::load(&store).unwrap().is_none());
    }

    #[test]
    fn unavailable_data_keeps_form_and_renders_nothing() {
        let mut store = MemoryStore::default();
        let mut page = Page::default();
        let source = Fixed::failing();
        on_submit(&mut page, &mut store, &ana_form(), &source, "./images", &mut Scripted::new(&[0]))
            .unwrap();
        assert_eq!(source.calls.get(), 1);
        let notice = page.notice.as_ref().unwrap();
        assert_eq!(notice.kind, "data_unavailable");
        assert!(notice.message.contains("could not load dinosaur data"));
        assert!(page.form_visible);
        assert!(page.tiles.is_empty());
        assert!(session::load(&store).unwrap().is_none());
    }

    #[test]
    fn load_redraws_from_session_without_fetching() {
        let mut store = MemoryStore::default();
        submitted(&mut store);
        let mut page = Page::default();
        on_load(&mut page, &mut store, "./images", &mut Scripted::category(Category::Era)).unwrap();
        assert!(!page.form_visible);
        assert_eq!(page.tiles.len(), 9);
        assert_eq!(
            page.tiles[0].fact.as_deref(),
            Some("Dino0 lived in the Late Cretaceous era!")
        );
    }

    #[test]
    fn load_without_session_shows_form() {
        let mut store = MemoryStore::default();
        let mut page = Page::default();
        on_load(&mut page, &mut store, "./images", &mut Scripted::new(&[0])).unwrap();
        assert!(page.form_visible);
        assert!(page.tiles.is_empty());
        assert!(page.notice.is_none());
    }

    #[test]
    fn corrupt_session_is_cleared_and_reported() {
        let mut store = MemoryStore::default();
        submitted(&mut store);
        store
            .set(crate::domain::constants::HUMAN_KEY, "nope".to_string())
            .unwrap();
        let mut page = Page::default();
        page.form_visible = false;
        on_load(&mut page, &mut store, "./images", &mut Scripted::new(&[0])).unwrap();
        assert_eq!(page.notice.as_ref().unwrap().kind, "storage_corrupt");
        assert!(page.form_visible);
        assert!(session::load(&store).unwrap().is_none());
    }

    #[test]
    fn tile_click_refreshes_only_that_tile() {
        let mut store = MemoryStore::default();
        let mut page = submitted(&mut store);
        let before = page.tiles.clone();
        on_tile_click(&mut page, &mut store, "Dino2", &mut Scripted::category(Category::Habitat))
            .unwrap();
        assert!(page.notice.is_none());
        for (a, b) in before.iter().zip(&page.tiles) {
            if a.id == "Dino2" {
                assert_eq!(b.fact.as_deref(), Some("Dino2 lived in the North America area!"));
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn unknown_tile_click_keeps_grid() {
        let mut store = MemoryStore::default();
        let mut page = submitted(&mut store);
        let before = page.tiles.clone();
        on_tile_click(&mut page, &mut store, "Nessie", &mut Scripted::new(&[0])).unwrap();
        assert_eq!(page.notice.as_ref().unwrap().kind, "invalid_input");
        assert_eq!(page.tiles, before);
    }

    #[test]
    fn human_click_resets_session_and_shows_form() {
        let mut store = MemoryStore::default();
        let mut page = submitted(&mut store);
        on_tile_click(&mut page, &mut store, HUMAN_TILE_ID, &mut Scripted::new(&[0])).unwrap();
        assert!(page.form_visible);
        assert!(page.tiles.is_empty());
        assert!(session::load(&store).unwrap().is_none());
    }

    #[test]
    fn degenerate_session_surfaces_invalid_comparison() {
        let mut store = MemoryStore::default();
        let mut human = crate::services::compare::tests::ana();
        human.weight = 0.0;
        session::save(&mut store, &human, &eight()).unwrap();
        let mut page = Page::default();
        on_load(&mut page, &mut store, "./images", &mut Scripted::category(Category::Weight))
            .unwrap();
        assert_eq!(page.notice.as_ref().unwrap().kind, "invalid_comparison");
        assert!(page.form_visible);
        assert!(page.tiles.is_empty());
    }
}
