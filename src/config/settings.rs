use crate::domain::model::Participant;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono_tz::Tz;

pub const DEFAULT_ROSTER: [&str; 12] = [
    "vishnu",
    "siddharth",
    "abhiram",
    "sayak",
    "gursimar",
    "shivi",
    "wahidur",
    "rishi",
    "tanav",
    "tanay",
    "andypramith",
    "abhay",
];

pub const DRAFT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;
pub const FALLBACK_SALT: &str = "ganeshcock";
pub const DEFAULT_STORE_FILE: &str = "team_names.txt";

/// Compiled-in draft settings, built once in `main` and passed down.
#[derive(Debug, Clone)]
pub struct DraftSettings {
    pub roster: Vec<Participant>,
    pub timezone: Tz,
    pub fallback_salt: String,
    pub store_file: String,
}

impl DraftSettings {
    pub fn with_store_file(mut self, store_file: impl Into<String>) -> Self {
        self.store_file = store_file.into();
        self
    }
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.iter().map(|id| Participant::new(*id)).collect(),
            timezone: DRAFT_TIMEZONE,
            fallback_salt: FALLBACK_SALT.to_string(),
            store_file: DEFAULT_STORE_FILE.to_string(),
        }
    }
}

impl ConfigProvider for DraftSettings {
    fn roster(&self) -> &[Participant] {
        &self.roster
    }

    fn timezone(&self) -> Tz {
        self.timezone
    }

    fn fallback_salt(&self) -> &str {
        &self.fallback_salt
    }

    fn store_file(&self) -> &str {
        &self.store_file
    }
}

impl Validate for DraftSettings {
    fn validate(&self) -> Result<()> {
        if self.roster.is_empty() {
            return Err(crate::utils::error::DraftError::ConfigError {
                message: "Roster must name at least one participant".to_string(),
            });
        }
        validation::validate_non_empty_string("fallback_salt", &self.fallback_salt)?;
        validation::validate_file_name("store_file", &self.store_file)?;
        Ok(())
    }
}
