//! JSON persistence of the team selection

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use teamdex_roster::Creature;

use crate::{Team, TeamError};

impl Team {
    /// Load a team saved with [`Team::save`]; a missing file is an empty team
    pub fn load(path: &Path) -> Result<Self, TeamError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e.into()),
        };

        let members: Vec<Creature> = serde_json::from_str(&contents)?;
        Self::from_members(members)
    }

    /// Like [`Team::load`], but falls back to an empty team on any failure
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load team, starting empty");
            Self::new()
        })
    }

    /// Write the team as pretty JSON, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), TeamError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), members = self.len(), "Saved team");
        Ok(())
    }
}
