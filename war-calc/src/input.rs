use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use eyre::WrapErr;
use models::{League, RawAttack, RawField};
use serde::Deserialize;

/// Attack list loaded from disk. `player_th` and `league` fill in whatever the
/// command line left out.
#[derive(Debug, Default, Deserialize)]
pub struct AttackFile {
    #[serde(default, alias = "playerTh")]
    pub player_th: Option<RawField>,
    #[serde(default)]
    pub league: Option<League>,
    #[serde(default)]
    pub attacks: Vec<RawAttack>,
}

impl AttackFile {
    pub fn load_from_path(path: &Path) -> eyre::Result<Self> {
        let file =
            File::open(path).wrap_err_with(|| format!("open attack file: {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .wrap_err_with(|| format!("parse attack file: {}", path.display()))
    }
}
