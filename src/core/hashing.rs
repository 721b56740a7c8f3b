use crate::domain::model::{Participant, RunTimestamp};
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the UTF-8 bytes of `material`.
pub fn sha256_hex(material: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(material.as_bytes());
    hex::encode(hasher.finalize())
}

/// Identifier followed directly by the team name, or by salt and run
/// timestamp when the team name is empty. No delimiters either way.
pub fn hash_material(
    participant: &Participant,
    team_name: &str,
    fallback_salt: &str,
    run_timestamp: &RunTimestamp,
) -> String {
    if team_name.is_empty() {
        format!("{}{}{}", participant, fallback_salt, run_timestamp.to_iso8601())
    } else {
        format!("{}{}", participant, team_name)
    }
}
