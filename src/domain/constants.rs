pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/dinos";
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_IMAGES_DIR: &str = "./images";

/// Top-level key of the roster payload.
pub const ROSTER_PAYLOAD_KEY: &str = "Dinos";
/// File looked up when the endpoint is a local directory.
pub const ROSTER_FILE_NAME: &str = "dino.json";

pub const SESSION_SCHEMA_VERSION: u32 = 1;
pub const HUMAN_KEY: &str = "humanInfo";
pub const DINOS_KEY: &str = "dinos";
pub const DINOS_DIGEST_KEY: &str = "dinos.sha256";

/// Always rendered with its trivia fact: birds are modern dinosaurs.
pub const PIGEON: &str = "Pigeon";

pub const HUMAN_TILE_ID: &str = "human";
pub const HUMAN_IMAGE: &str = "human.png";
