use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub data: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let data = make_fixture_data(tmp.path());

        Self {
            _tmp: tmp,
            home,
            data,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("dinogrid");
        cmd.env("HOME", &self.home).env_remove("RUST_LOG");
        cmd
    }

    pub fn endpoint(&self) -> &str {
        self.data.to_str().expect("data path utf8")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--seed")
            .arg("7")
            .arg("--endpoint")
            .arg(self.endpoint())
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn submit_ana(&self) -> Value {
        self.run_json(&[
            "submit", "--name", "Ana", "--feet", "5", "--inches", "10", "--weight", "150",
            "--diet", "herbivore",
        ])
    }

    pub fn storage_file(&self) -> PathBuf {
        self.home.join(".local/share/dinogrid/storage.json")
    }

    pub fn page_file(&self) -> PathBuf {
        self.home.join(".local/share/dinogrid/page.json")
    }
}

pub fn tile<'a>(page: &'a Value, id: &str) -> &'a Value {
    page["data"]["tiles"]
        .as_array()
        .expect("tiles array")
        .iter()
        .find(|t| t["id"] == id)
        .unwrap_or_else(|| panic!("tile {} missing", id))
}

fn make_fixture_data(base: &Path) -> PathBuf {
    let data = base.join("data");
    fs::create_dir_all(&data).expect("create data dir");

    let mut dinos: Vec<Value> = [
        "Triceratops",
        "Tyrannosaurus Rex",
        "Anklyosaurus",
        "Brachiosaurus",
        "Stegosaurus",
        "Elasmosaurus",
        "Pteranodon",
    ]
    .iter()
    .map(|s| {
        serde_json::json!({
            "species": s,
            "weight": 3000,
            "height": 140,
            "diet": "carnivor",
            "where": "North America",
            "when": "Late Cretaceous",
            "fact": format!("{} fact", s)
        })
    })
    .collect();
    dinos.push(serde_json::json!({
        "species": "Pigeon",
        "weight": 0.5,
        "height": 9,
        "diet": "herbavor",
        "where": "World Wide",
        "when": "Holocene",
        "fact": "Modern birds are technically dinosaurs"
    }));

    fs::write(
        data.join("dino.json"),
        serde_json::to_string_pretty(&serde_json::json!({ "Dinos": dinos }))
            .expect("serialize dinos"),
    )
    .expect("write dino.json");

    data
}
