use crate::domain::model::Participant;
use crate::domain::ports::TeamNameCollector;
use crate::utils::error::{DraftError, Result};
use crate::utils::validation::is_valid_team_name;
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Prompts once per participant, in roster order, until a usable answer
/// is given.
pub struct InteractiveCollector<R, W> {
    input: R,
    output: W,
}

impl<R, W> InteractiveCollector<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn print_instructions(&mut self) -> Result<()> {
        writeln!(self.output, "Fantasy Draft Hashing with the team-name store")?;
        writeln!(self.output, "- Enter to keep the existing team name from file.")?;
        writeln!(self.output, "- Enter a new value to replace it.")?;
        writeln!(
            self.output,
            "- If the file line is empty AND you press Enter, the fallback is used."
        )?;
        writeln!(
            self.output,
            "- Hash input is the participant name (lowercase) + team name (no delimiter)."
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    async fn read_answer(&mut self, participant: &Participant) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Err(DraftError::InputClosed {
                participant: participant.to_string(),
            });
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    async fn finalize_one(&mut self, participant: &Participant, current: &str) -> Result<String> {
        loop {
            let shown = if current.is_empty() { "<empty>" } else { current };
            write!(
                self.output,
                "Team name for {}: [current: {}] -> ",
                participant, shown
            )?;
            self.output.flush()?;

            let answer = self.read_answer(participant).await?;

            if answer.is_empty() {
                if current.is_empty() {
                    return Ok(String::new());
                }
                // Blank never accepts a broken stored name; a correction is required.
                if !is_valid_team_name(current) {
                    tracing::warn!("Stored team name for {} is invalid", participant);
                    writeln!(
                        self.output,
                        "  The existing team name in the file is invalid (must not start/end with a space)."
                    )?;
                    writeln!(self.output, "  Please enter a corrected, non-empty name.")?;
                    continue;
                }
                return Ok(current.to_string());
            }

            if !is_valid_team_name(&answer) {
                writeln!(
                    self.output,
                    "  Invalid: team name must start and end with a non-space character. Try again."
                )?;
                continue;
            }
            return Ok(answer);
        }
    }
}

#[async_trait]
impl<R, W> TeamNameCollector for InteractiveCollector<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn collect(&mut self, roster: &[Participant], stored: &[String]) -> Result<Vec<String>> {
        let mut finalized = Vec::with_capacity(roster.len());
        for (participant, current) in roster.iter().zip(stored) {
            let name = self.finalize_one(participant, current).await?;
            tracing::debug!("Finalized team name for {}: {:?}", participant, name);
            finalized.push(name);
        }
        Ok(finalized)
    }
}

/// Non-interactive: keeps each stored name when valid, otherwise marks
/// the slot for fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct StoredNameCollector;

#[async_trait]
impl TeamNameCollector for StoredNameCollector {
    async fn collect(&mut self, roster: &[Participant], stored: &[String]) -> Result<Vec<String>> {
        Ok(roster
            .iter()
            .zip(stored)
            .map(|(participant, current)| {
                if is_valid_team_name(current) {
                    current.clone()
                } else {
                    if !current.is_empty() {
                        tracing::warn!(
                            "Ignoring invalid stored team name for {}: {:?}",
                            participant,
                            current
                        );
                    }
                    String::new()
                }
            })
            .collect())
    }
}
