use crate::config::ReportFormat;
use crate::core::draft::NO_TEAM_NAME;
use crate::domain::model::DraftReport;
use crate::utils::error::Result;
use std::fmt;

pub fn render(report: &DraftReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn render_text(report: &DraftReport) -> String {
    TextReport(report).to_string()
}

/// Human-readable layout: ranked order, audit block, store location.
pub struct TextReport<'a>(pub &'a DraftReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f)?;
        writeln!(f, "=== DRAFT ORDER (ascending by SHA-256 hex) ===")?;
        for (rank, entry) in report.order.iter().enumerate() {
            let team = entry.team_name.as_deref().unwrap_or(NO_TEAM_NAME);
            write!(
                f,
                "{:2}. {:12} | Team: {}",
                rank + 1,
                entry.participant.as_str(),
                team
            )?;
            if let Some(note) = &entry.note {
                write!(f, "  {}", note)?;
            }
            writeln!(f)?;
            writeln!(f, "    SHA256: {}", entry.digest)?;
        }

        writeln!(f)?;
        writeln!(f, "Audit info:")?;
        writeln!(
            f,
            "- Run timestamp ({}): {}",
            report.timezone, report.run_timestamp
        )?;
        writeln!(f, "- Hash material for each entry is shown below:")?;
        for line in &report.audit {
            writeln!(
                f,
                "{:12} -> {}",
                line.participant.as_str(),
                line.hash_material
            )?;
        }

        writeln!(f)?;
        if report.saved {
            writeln!(
                f,
                "Saved updated team names to: {}",
                report.store_path.display()
            )
        } else {
            writeln!(
                f,
                "Dry run: team names were not saved to {}",
                report.store_path.display()
            )
        }
    }
}
