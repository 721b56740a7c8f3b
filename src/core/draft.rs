use crate::core::hashing::{hash_material, sha256_hex};
use crate::domain::model::{AuditLine, DraftEntry, Participant, RunTimestamp};

pub const NO_TEAM_NAME: &str = "<no team name>";

fn fallback_note(salt: &str) -> String {
    format!("(fallback used: {} + timestamp)", salt)
}

/// One entry per participant, in roster order.
pub fn compute_entries(
    roster: &[Participant],
    finalized: &[String],
    fallback_salt: &str,
    run_timestamp: &RunTimestamp,
) -> Vec<DraftEntry> {
    roster
        .iter()
        .zip(finalized)
        .map(|(participant, team_name)| {
            let material = hash_material(participant, team_name, fallback_salt, run_timestamp);
            let digest = sha256_hex(&material);
            tracing::debug!("{} -> {}", participant, digest);

            let (team_name, note) = if team_name.is_empty() {
                (None, Some(fallback_note(fallback_salt)))
            } else {
                (Some(team_name.clone()), None)
            };

            DraftEntry {
                participant: participant.clone(),
                team_name,
                hash_material: material,
                digest,
                note,
            }
        })
        .collect()
}

pub fn audit_trail(entries: &[DraftEntry]) -> Vec<AuditLine> {
    entries
        .iter()
        .map(|entry| AuditLine {
            participant: entry.participant.clone(),
            hash_material: entry.hash_material.clone(),
        })
        .collect()
}

/// Ascending by hex digest, compared as plain strings.
pub fn order_by_digest(mut entries: Vec<DraftEntry>) -> Vec<DraftEntry> {
    entries.sort_by(|a, b| a.digest.cmp(&b.digest));
    entries
}
