use crate::domain::constants::{DEFAULT_ENDPOINT, DEFAULT_IMAGES_DIR, DEFAULT_TIMEOUT_MS};
use crate::domain::errors::DinoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Diet {
    Herbivore,
    Omnivore,
    Carnivore,
}

impl FromStr for Diet {
    type Err = DinoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The shipped data file uses the short spellings.
        match s.trim().to_ascii_lowercase().as_str() {
            "herbivore" | "herbavor" => Ok(Diet::Herbivore),
            "omnivore" | "omnivor" => Ok(Diet::Omnivore),
            "carnivore" | "carnivor" => Ok(Diet::Carnivore),
            other => Err(DinoError::InvalidInput(format!("unknown diet: {:?}", other))),
        }
    }
}

impl TryFrom<String> for Diet {
    type Error = DinoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Diet::Herbivore => "herbivore",
            Diet::Omnivore => "omnivore",
            Diet::Carnivore => "carnivore",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DinosaurRecord {
    pub species: String,
    pub weight: f64,
    pub height: f64,
    pub diet: Diet,
    #[serde(rename = "where")]
    pub habitat: String,
    #[serde(rename = "when")]
    pub era: String,
    pub fact: String,
}

/// Height is in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanRecord {
    pub name: String,
    pub height: f64,
    pub weight: f64,
    pub diet: Diet,
}

/// Raw form field values, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct HumanForm {
    pub name: String,
    pub feet: String,
    pub inches: String,
    pub weight: String,
    pub diet: String,
}

/// Dinosaurs plus the one human rendered among them.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub dinosaurs: Vec<DinosaurRecord>,
    pub human: HumanRecord,
}

pub enum RosterEntry<'a> {
    Dinosaur(&'a DinosaurRecord),
    Human(&'a HumanRecord),
}

impl Roster {
    pub fn new(dinosaurs: Vec<DinosaurRecord>, human: HumanRecord) -> Self {
        Self { dinosaurs, human }
    }

    /// Index of the human in the rendered sequence.
    pub fn center(&self) -> usize {
        self.dinosaurs.len() / 2
    }

    pub fn entries(&self) -> Vec<RosterEntry<'_>> {
        let mut out: Vec<RosterEntry<'_>> =
            self.dinosaurs.iter().map(RosterEntry::Dinosaur).collect();
        out.insert(self.center(), RosterEntry::Human(&self.human));
        out
    }

    pub fn find(&self, species: &str) -> Option<&DinosaurRecord> {
        self.dinosaurs.iter().find(|d| d.species == species)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Dinosaur,
    Human,
}

/// What a click on the tile does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileAction {
    RefreshFact,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub kind: TileKind,
    pub title: String,
    pub image: String,
    pub fact: Option<String>,
    pub action: TileAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: String,
    pub message: String,
}

impl From<&DinoError> for Notice {
    fn from(e: &DinoError) -> Self {
        Notice {
            kind: e.kind().to_string(),
            message: e.to_string(),
        }
    }
}

/// The visible document: entry form, tile grid and a message banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub form_visible: bool,
    #[serde(default)]
    pub tiles: Vec<Tile>,
    /// Transient; never written back to disk.
    #[serde(default)]
    pub notice: Option<Notice>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            form_visible: true,
            tiles: Vec::new(),
            notice: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_images_dir() -> String {
    DEFAULT_IMAGES_DIR.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            images_dir: default_images_dir(),
        }
    }
}
